//! Publication metadata shared by every published module.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::{Deserialize, Serialize};

use jarpub_util::errors::JarpubError;

/// POM elements set on every publication.
///
/// Module-specific fields (name, description, artifact id) are set by each
/// module and are not part of this shared block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PomMetadata {
    pub packaging: String,
    pub url: String,
    pub licenses: Vec<PomLicense>,
    pub developers: Vec<PomDeveloper>,
    pub issue_management: Option<PomIssueManagement>,
    pub organization: Option<PomOrganization>,
    pub scm: Option<PomScm>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PomLicense {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub distribution: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PomDeveloper {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PomIssueManagement {
    pub system: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PomOrganization {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PomScm {
    pub connection: String,
    pub developer_connection: String,
    pub url: String,
}

impl Default for PomMetadata {
    fn default() -> Self {
        Self {
            packaging: "jar".to_string(),
            url: "https://objectbox.io".to_string(),
            licenses: vec![PomLicense {
                name: "The Apache Software License, Version 2.0".to_string(),
                url: "https://www.apache.org/licenses/LICENSE-2.0.txt".to_string(),
                distribution: Some("repo".to_string()),
            }],
            developers: vec![PomDeveloper {
                id: "ObjectBox".to_string(),
                name: "ObjectBox".to_string(),
            }],
            issue_management: Some(PomIssueManagement {
                system: "GitHub Issues".to_string(),
                url: "https://github.com/objectbox/objectbox-java/issues".to_string(),
            }),
            organization: Some(PomOrganization {
                name: "ObjectBox Ltd.".to_string(),
                url: "https://objectbox.io".to_string(),
            }),
            scm: Some(PomScm {
                connection: "scm:git@github.com:objectbox/objectbox-java.git".to_string(),
                developer_connection: "scm:git@github.com:objectbox/objectbox-java.git"
                    .to_string(),
                url: "https://github.com/objectbox/objectbox-java".to_string(),
            }),
        }
    }
}

fn xml_error(e: impl std::fmt::Display) -> JarpubError {
    JarpubError::Generic {
        message: format!("Failed to write POM XML: {e}"),
    }
}

struct PomWriter {
    inner: Writer<Vec<u8>>,
}

impl PomWriter {
    fn new() -> Self {
        Self {
            inner: Writer::new_with_indent(Vec::new(), b' ', 2),
        }
    }

    fn open(&mut self, name: &str) -> Result<(), JarpubError> {
        self.inner
            .write_event(Event::Start(BytesStart::new(name)))
            .map_err(xml_error)
    }

    fn close(&mut self, name: &str) -> Result<(), JarpubError> {
        self.inner
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_error)
    }

    fn text(&mut self, name: &str, value: &str) -> Result<(), JarpubError> {
        self.open(name)?;
        self.inner
            .write_event(Event::Text(BytesText::new(value)))
            .map_err(xml_error)?;
        self.close(name)
    }

    fn finish(self) -> Result<String, JarpubError> {
        String::from_utf8(self.inner.into_inner()).map_err(xml_error)
    }
}

impl PomMetadata {
    /// Render as a POM XML fragment (the children of `<project>`).
    pub fn to_xml(&self) -> Result<String, JarpubError> {
        let mut w = PomWriter::new();
        w.text("packaging", &self.packaging)?;
        w.text("url", &self.url)?;

        if !self.licenses.is_empty() {
            w.open("licenses")?;
            for license in &self.licenses {
                w.open("license")?;
                w.text("name", &license.name)?;
                w.text("url", &license.url)?;
                if let Some(ref distribution) = license.distribution {
                    w.text("distribution", distribution)?;
                }
                w.close("license")?;
            }
            w.close("licenses")?;
        }

        if !self.developers.is_empty() {
            w.open("developers")?;
            for dev in &self.developers {
                w.open("developer")?;
                w.text("id", &dev.id)?;
                w.text("name", &dev.name)?;
                w.close("developer")?;
            }
            w.close("developers")?;
        }

        if let Some(ref issues) = self.issue_management {
            w.open("issueManagement")?;
            w.text("system", &issues.system)?;
            w.text("url", &issues.url)?;
            w.close("issueManagement")?;
        }

        if let Some(ref org) = self.organization {
            w.open("organization")?;
            w.text("name", &org.name)?;
            w.text("url", &org.url)?;
            w.close("organization")?;
        }

        if let Some(ref scm) = self.scm {
            w.open("scm")?;
            w.text("connection", &scm.connection)?;
            w.text("developerConnection", &scm.developer_connection)?;
            w.text("url", &scm.url)?;
            w.close("scm")?;
        }

        w.finish()
    }
}

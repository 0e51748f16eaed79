//! Human and machine readable views of a [`ResolvedPlan`].
//!
//! Secrets are replaced by [`crate::MASK`] unless the report is built with
//! `reveal = true`. Key material itself is never included, only its digest.

use std::fmt::Write as _;
use std::path::PathBuf;

use jarpub_core::pom::PomMetadata;
use jarpub_util::errors::JarpubError;
use serde::Serialize;

use crate::repository::{AuthScheme, RepositoryDescriptor};
use crate::resolver::ResolvedPlan;
use crate::signing::SigningDescriptor;
use crate::testing::TestExecutionDescriptor;
use crate::MASK;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RepositoryReport {
    pub name: String,
    pub url: String,
    pub header_name: String,
    pub header_value: String,
    pub scheme: AuthScheme,
}

impl RepositoryReport {
    pub fn new(repo: &RepositoryDescriptor, reveal: bool) -> Self {
        Self {
            name: repo.name.clone(),
            url: repo.url.clone(),
            header_name: repo.header_name.clone(),
            header_value: mask(repo.header_value(), reveal),
            scheme: repo.scheme,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SigningReport {
    pub key_id: String,
    pub key_file: PathBuf,
    pub key_sha256: String,
    pub passphrase: String,
}

impl SigningReport {
    pub fn new(signing: &SigningDescriptor, reveal: bool) -> Self {
        Self {
            key_id: signing.key_id.clone(),
            key_file: signing.key_file.clone(),
            key_sha256: signing.key_digest(),
            passphrase: mask(signing.passphrase(), reveal),
        }
    }
}

/// Serializable summary of a resolved plan.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlanReport<'a> {
    pub project: &'a str,
    pub publish_repository: Option<RepositoryReport>,
    pub dependency_repository: Option<RepositoryReport>,
    pub signing: Option<SigningReport>,
    pub test: &'a TestExecutionDescriptor,
    pub pom: &'a PomMetadata,
}

fn mask(value: &str, reveal: bool) -> String {
    if reveal {
        value.to_string()
    } else {
        MASK.to_string()
    }
}

impl<'a> PlanReport<'a> {
    pub fn new(plan: &'a ResolvedPlan, reveal: bool) -> Self {
        Self {
            project: &plan.project,
            publish_repository: plan
                .publish_repository
                .as_ref()
                .map(|r| RepositoryReport::new(r, reveal)),
            dependency_repository: plan
                .dependency_repository
                .as_ref()
                .map(|r| RepositoryReport::new(r, reveal)),
            signing: plan.signing.as_ref().map(|s| SigningReport::new(s, reveal)),
            test: &plan.test,
            pom: &plan.pom,
        }
    }

    pub fn to_json(&self) -> Result<String, JarpubError> {
        serde_json::to_string_pretty(self).map_err(|e| JarpubError::Generic {
            message: format!("Failed to serialize plan: {e}"),
        })
    }

    /// Render as indented plain text.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}:", self.project);

        write_repository(&mut out, "publish repository", self.publish_repository.as_ref());
        write_repository(
            &mut out,
            "dependency repository",
            self.dependency_repository.as_ref(),
        );

        match self.signing {
            Some(ref s) => {
                let _ = writeln!(out, "  signing: key {}", s.key_id);
                let _ = writeln!(out, "    key file:   {}", s.key_file.display());
                let _ = writeln!(out, "    key sha256: {}", s.key_sha256);
                let _ = writeln!(out, "    passphrase: {}", s.passphrase);
            }
            None => {
                let _ = writeln!(out, "  signing: disabled");
            }
        }

        let _ = writeln!(out, "  tests: {}", self.test.jvm);
        for pattern in &self.test.filter.include {
            let _ = writeln!(out, "    include {pattern}");
        }
        for pattern in &self.test.filter.exclude {
            let _ = writeln!(out, "    exclude {pattern}");
        }
        out
    }
}

fn write_repository(out: &mut String, label: &str, repo: Option<&RepositoryReport>) {
    match repo {
        Some(r) => {
            let _ = writeln!(out, "  {label}: {} {}", r.name, r.url);
            let _ = writeln!(out, "    {}: {}", r.header_name, r.header_value);
        }
        None => {
            let _ = writeln!(out, "  {label}: not configured");
        }
    }
}

//! GitLab Maven package registry descriptors.
//!
//! Two registries are derived from the same GitLab instance: the project
//! registry artifacts are published to, and the group registry that serves
//! internal-only dependencies (e.g. native libraries) to the test builds.

use std::fmt;

use jarpub_core::keys;
use jarpub_core::properties::ConfigurationSet;
use jarpub_core::settings::GitlabSettings;
use serde::Serialize;

/// Name the repository is registered under.
pub const REPOSITORY_NAME: &str = "GitLab";

/// How credentials are attached to requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthScheme {
    /// Token sent in a custom HTTP header (`Private-Token`, `Job-Token`, ...).
    HttpHeader,
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpHeader => write!(f, "http-header"),
        }
    }
}

/// A Maven repository endpoint with header credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct RepositoryDescriptor {
    pub name: String,
    pub url: String,
    pub header_name: String,
    header_value: String,
    pub scheme: AuthScheme,
}

impl RepositoryDescriptor {
    pub fn new(url: String, header_name: String, header_value: String) -> Self {
        Self {
            name: REPOSITORY_NAME.to_string(),
            url,
            header_name,
            header_value,
            scheme: AuthScheme::HttpHeader,
        }
    }

    /// The credential sent in [`Self::header_name`].
    pub fn header_value(&self) -> &str {
        &self.header_value
    }
}

impl fmt::Debug for RepositoryDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepositoryDescriptor")
            .field("name", &self.name)
            .field("url", &self.url)
            .field("header_name", &self.header_name)
            .field("header_value", &crate::MASK)
            .field("scheme", &self.scheme)
            .finish()
    }
}

/// `{gitlab_url}/api/v4/projects/{id}/packages/maven`
pub fn project_registry_url(gitlab_url: &str, project_id: u64) -> String {
    format!("{gitlab_url}/api/v4/projects/{project_id}/packages/maven")
}

/// `{gitlab_url}/api/v4/groups/{group}/-/packages/maven`
pub fn group_registry_url(gitlab_url: &str, group: &str) -> String {
    format!("{gitlab_url}/api/v4/groups/{group}/-/packages/maven")
}

/// Resolve the repository artifacts are published to.
///
/// Requires `gitlabUrl` and `gitlabPublishToken`. The header defaults to
/// the configured default (`Private-Token`) unless `gitlabPublishTokenName`
/// is set. Returns `None` when either required property is missing.
pub fn resolve_repository(
    config: &ConfigurationSet,
    gitlab: &GitlabSettings,
) -> Option<RepositoryDescriptor> {
    let (Some(base), Some(token)) = (
        config.get(keys::GITLAB_URL),
        config.get(keys::GITLAB_PUBLISH_TOKEN),
    ) else {
        return None;
    };
    let header = config
        .get(keys::GITLAB_PUBLISH_TOKEN_NAME)
        .unwrap_or(gitlab.default_token_header.as_str());
    Some(RepositoryDescriptor::new(
        project_registry_url(base, gitlab.project_id),
        header.to_string(),
        token.to_string(),
    ))
}

/// Resolve the group repository used to fetch internal-only dependencies.
///
/// Requires `gitlabUrl` and `gitlabPrivateToken`; the header defaults to
/// the configured default unless `gitlabTokenName` is set.
pub fn resolve_dependency_repository(
    config: &ConfigurationSet,
    gitlab: &GitlabSettings,
) -> Option<RepositoryDescriptor> {
    let (Some(base), Some(token)) = (
        config.get(keys::GITLAB_URL),
        config.get(keys::GITLAB_PRIVATE_TOKEN),
    ) else {
        return None;
    };
    let header = config
        .get(keys::GITLAB_TOKEN_NAME)
        .unwrap_or(gitlab.default_token_header.as_str());
    Some(RepositoryDescriptor::new(
        group_registry_url(base, &gitlab.group),
        header.to_string(),
        token.to_string(),
    ))
}

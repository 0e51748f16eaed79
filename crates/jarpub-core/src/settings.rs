use std::path::Path;

use jarpub_util::errors::JarpubError;
use serde::{Deserialize, Serialize};

use crate::pom::PomMetadata;

/// Project settings loaded from `jarpub.toml`.
///
/// Every field has a default matching the ObjectBox Java build, so the file
/// is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub gitlab: GitlabSettings,

    #[serde(default)]
    pub test: TestSettings,

    #[serde(default)]
    pub pom: PomMetadata,
}

/// GitLab package registry layout from `[gitlab]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitlabSettings {
    /// Numeric id of the project artifacts are published to.
    #[serde(default = "default_project_id", rename = "project-id")]
    pub project_id: u64,
    /// Group whose registry serves internal-only dependencies.
    #[serde(default = "default_group")]
    pub group: String,
    #[serde(default = "default_token_header", rename = "default-token-header")]
    pub default_token_header: String,
}

impl Default for GitlabSettings {
    fn default() -> Self {
        Self {
            project_id: default_project_id(),
            group: default_group(),
            default_token_header: default_token_header(),
        }
    }
}

fn default_project_id() -> u64 {
    14
}

fn default_group() -> String {
    "objectbox".to_string()
}

fn default_token_header() -> String {
    "Private-Token".to_string()
}

/// Test-run settings from `[test]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSettings {
    /// Test-name patterns that only run on Linux hosts.
    #[serde(default = "default_linux_only", rename = "linux-only")]
    pub linux_only: Vec<String>,
}

impl Default for TestSettings {
    fn default() -> Self {
        Self {
            linux_only: default_linux_only(),
        }
    }
}

// Tree API is incubating on Linux only.
fn default_linux_only() -> Vec<String> {
    vec!["io.objectbox.tree.*".to_string()]
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn parse(content: &str) -> Result<Self, JarpubError> {
        toml::from_str(content).map_err(|e| JarpubError::Settings {
            message: e.to_string(),
        })
    }

    /// Load settings from `path`.
    pub fn load(path: &Path) -> Result<Self, JarpubError> {
        let content = std::fs::read_to_string(path).map_err(|e| JarpubError::Settings {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse(&content).map_err(|e| match e {
            JarpubError::Settings { message } => JarpubError::Settings {
                message: format!("{}: {message}", path.display()),
            },
            other => other,
        })
    }

    /// Load settings from `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, JarpubError> {
        if path.is_file() {
            Self::load(path)
        } else {
            tracing::debug!("{} not found, using default settings", path.display());
            Ok(Self::default())
        }
    }
}

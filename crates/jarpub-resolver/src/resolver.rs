//! The resolver: one pass from configuration to descriptors.

use std::fmt;

use jarpub_core::host::HostInfo;
use jarpub_core::keys;
use jarpub_core::pom::PomMetadata;
use jarpub_core::properties::ConfigurationSet;
use jarpub_core::settings::Settings;
use jarpub_util::errors::JarpubError;

use crate::repository::{self, RepositoryDescriptor};
use crate::signing::{self, KeySource, SigningDescriptor, SigningRequest};
use crate::testing::{self, TestExecutionDescriptor};

/// A feature the caller insists on, instead of letting it degrade silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Publishing,
    Signing,
}

impl Requirement {
    /// Property keys that must all be present for the feature.
    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            Self::Publishing => &[keys::GITLAB_URL, keys::GITLAB_PUBLISH_TOKEN],
            Self::Signing => &[
                keys::SIGNING_KEY_ID,
                keys::SIGNING_KEY_FILE,
                keys::SIGNING_PASSWORD,
            ],
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Publishing => write!(f, "publishing"),
            Self::Signing => write!(f, "signing"),
        }
    }
}

/// Everything decided in one resolution pass.
#[derive(Debug, Clone)]
pub struct ResolvedPlan {
    pub project: String,
    pub publish_repository: Option<RepositoryDescriptor>,
    pub dependency_repository: Option<RepositoryDescriptor>,
    pub signing: Option<SigningDescriptor>,
    pub test: TestExecutionDescriptor,
    pub pom: PomMetadata,
}

/// Resolves descriptors from an immutable configuration.
///
/// All inputs are fixed at construction; nothing is read from the
/// environment afterwards.
#[derive(Debug, Clone)]
pub struct Resolver {
    config: ConfigurationSet,
    settings: Settings,
    host: HostInfo,
    project: String,
}

impl Resolver {
    pub fn new(config: ConfigurationSet, settings: Settings, host: HostInfo) -> Self {
        Self {
            config,
            settings,
            host,
            project: "project".to_string(),
        }
    }

    /// Name used in log messages about this project.
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }

    pub fn config(&self) -> &ConfigurationSet {
        &self.config
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn host(&self) -> &HostInfo {
        &self.host
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn repository(&self) -> Option<RepositoryDescriptor> {
        repository::resolve_repository(&self.config, &self.settings.gitlab)
    }

    pub fn dependency_repository(&self) -> Option<RepositoryDescriptor> {
        repository::resolve_dependency_repository(&self.config, &self.settings.gitlab)
    }

    pub fn signing_request(&self) -> Option<SigningRequest> {
        SigningRequest::from_config(&self.config)
    }

    pub fn signing(
        &self,
        source: &dyn KeySource,
    ) -> Result<Option<SigningDescriptor>, JarpubError> {
        signing::resolve_signing(&self.config, source)
    }

    pub fn test_execution(
        &self,
        include: &[String],
    ) -> Result<TestExecutionDescriptor, JarpubError> {
        testing::resolve_test_execution(&self.config, &self.settings.test, &self.host, include)
    }

    /// Keys of `requirement` that are missing from the configuration.
    pub fn missing(&self, requirement: Requirement) -> Vec<&'static str> {
        requirement
            .keys()
            .iter()
            .copied()
            .filter(|k| !self.config.contains(k))
            .collect()
    }

    /// Fail unless every property of `requirement` is present.
    pub fn require(&self, requirement: Requirement) -> Result<(), JarpubError> {
        let missing = self.missing(requirement);
        if missing.is_empty() {
            return Ok(());
        }
        Err(JarpubError::Incomplete {
            message: format!("{requirement} requires {}", missing.join(", ")),
        })
    }

    /// Resolve everything, logging what was enabled or skipped.
    pub fn resolve_all(
        &self,
        source: &dyn KeySource,
        include: &[String],
    ) -> Result<ResolvedPlan, JarpubError> {
        let publish_repository = self.repository();
        match publish_repository {
            Some(ref repo) => tracing::info!("GitLab repository set to {}.", repo.url),
            None => tracing::warn!(
                "Can not publish to GitLab: {} or {} not set.",
                keys::GITLAB_URL,
                keys::GITLAB_PUBLISH_TOKEN
            ),
        }

        let dependency_repository = self.dependency_repository();
        match dependency_repository {
            Some(ref repo) => tracing::info!("{} added to repositories.", repo.url),
            None => {
                for key in [keys::GITLAB_URL, keys::GITLAB_PRIVATE_TOKEN] {
                    if !self.config.contains(key) {
                        tracing::info!("Property {key} not set.");
                    }
                }
            }
        }

        let signing = self.signing(source)?;
        match signing {
            Some(ref s) => tracing::info!(
                "Signing with key {} (sha256 {})",
                s.key_id,
                s.key_digest()
            ),
            None => tracing::info!(
                "Signing information missing/incomplete for {}",
                self.project
            ),
        }

        let test = self.test_execution(include)?;
        tracing::info!("Will run tests with {}", test.jvm);
        for pattern in &test.filter.exclude {
            tracing::debug!("Excluding tests matching {pattern} on {}", self.host.os_name);
        }

        Ok(ResolvedPlan {
            project: self.project.clone(),
            publish_repository,
            dependency_repository,
            signing,
            test,
            pom: self.settings.pom.clone(),
        })
    }
}

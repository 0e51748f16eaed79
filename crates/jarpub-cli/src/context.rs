//! Assembles the resolver inputs from the command line and the build directory.

use std::path::{Path, PathBuf};

use jarpub_core::host::HostInfo;
use jarpub_core::properties::{
    load_properties_file, parse_override, user_properties_path, ConfigurationSet,
};
use jarpub_core::settings::Settings;
use jarpub_core::{PROPERTIES_FILE, SETTINGS_FILE};
use jarpub_resolver::resolver::Resolver;
use jarpub_util::errors::JarpubError;
use jarpub_util::fs::find_build_root;
use miette::Result;

use crate::cli::GlobalArgs;

/// Build a [`Resolver`] for the build containing the current directory.
pub fn load(global: &GlobalArgs) -> Result<Resolver> {
    let cwd = std::env::current_dir().map_err(JarpubError::Io)?;
    load_from(&cwd, global)
}

fn load_from(cwd: &Path, global: &GlobalArgs) -> Result<Resolver> {
    let root = find_build_root(cwd);
    let base = root.as_deref().unwrap_or(cwd);

    let properties_path = match global.properties_file {
        Some(ref path) => {
            if !path.is_file() {
                return Err(JarpubError::Properties {
                    message: format!("Properties file {} not found", path.display()),
                }
                .into());
            }
            path.clone()
        }
        None => base.join(PROPERTIES_FILE),
    };
    let file_properties = load_properties_file(&properties_path)?;

    let overrides = global
        .properties
        .iter()
        .map(|arg| parse_override(arg))
        .collect::<Result<Vec<_>, _>>()?;

    let mut builder = ConfigurationSet::builder().file_properties(file_properties);
    if !global.no_env {
        if let Some(user_path) = user_properties_path() {
            builder = builder.user_file_properties(load_properties_file(&user_path)?);
        }
        builder = builder.environment(process_env());
    }
    let config = builder.overrides(overrides).build();
    tracing::debug!("Configuration: {config:?}");

    let settings = match global.settings {
        Some(ref path) => Settings::load(path)?,
        None => Settings::load_or_default(&base.join(SETTINGS_FILE))?,
    };

    let host = global
        .os_name
        .clone()
        .map(HostInfo::new)
        .unwrap_or_else(HostInfo::current);

    Ok(Resolver::new(config, settings, host).with_project(project_name(base)))
}

/// Environment variables with valid UTF-8 names and values.
fn process_env() -> Vec<(String, String)> {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}

fn project_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string())
}

/// Path shown to the user for the properties file in effect.
pub fn properties_path(global: &GlobalArgs) -> Option<PathBuf> {
    if let Some(ref path) = global.properties_file {
        return Some(path.clone());
    }
    let cwd = std::env::current_dir().ok()?;
    let base = find_build_root(&cwd).unwrap_or(cwd);
    Some(base.join(PROPERTIES_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hermetic() -> GlobalArgs {
        GlobalArgs {
            no_env: true,
            os_name: Some("Linux".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn reads_build_properties_and_settings() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.gradle.kts"), "").unwrap();
        std::fs::write(
            dir.path().join("gradle.properties"),
            "gitlabUrl=https://gitlab.example.com\ngitlabPublishToken=abc\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("jarpub.toml"), "[gitlab]\nproject-id = 3\n").unwrap();
        let sub = dir.path().join("objectbox-java");
        std::fs::create_dir(&sub).unwrap();

        let resolver = load_from(&sub, &hermetic()).unwrap();
        assert_eq!(
            resolver.repository().unwrap().url,
            "https://gitlab.example.com/api/v4/projects/3/packages/maven"
        );
        assert_eq!(
            resolver.project(),
            dir.path().file_name().unwrap().to_str().unwrap()
        );
    }

    #[test]
    fn overrides_beat_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("gradle.properties"), "TEST_JDK=11\n").unwrap();
        let args = GlobalArgs {
            properties: vec!["TEST_JDK=17".to_string()],
            ..hermetic()
        };
        let resolver = load_from(dir.path(), &args).unwrap();
        assert_eq!(resolver.config().get("TEST_JDK"), Some("17"));
    }

    #[test]
    fn malformed_override_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = GlobalArgs {
            properties: vec!["TEST_JDK".to_string()],
            ..hermetic()
        };
        assert!(load_from(dir.path(), &args).is_err());
    }

    #[test]
    fn missing_explicit_properties_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = GlobalArgs {
            properties_file: Some(dir.path().join("absent.properties")),
            ..hermetic()
        };
        assert!(load_from(dir.path(), &args).is_err());
    }

    #[test]
    fn os_name_is_taken_from_args() {
        let dir = tempfile::tempdir().unwrap();
        let args = GlobalArgs {
            os_name: Some("Windows 10".to_string()),
            ..hermetic()
        };
        let resolver = load_from(dir.path(), &args).unwrap();
        assert!(!resolver.host().is_linux());
    }
}

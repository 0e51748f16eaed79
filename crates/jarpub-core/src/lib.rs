//! Core data types for jarpub.
//!
//! This crate defines the inputs of a resolution pass: the immutable
//! [`properties::ConfigurationSet`] assembled from property files, the
//! environment and command-line overrides; the well-known property
//! [`keys`]; project [`settings`] from `jarpub.toml`; publication
//! [`pom`] metadata; and the [`host`] description.
//!
//! This crate is intentionally free of async code and network I/O.

/// File name of the optional per-build settings file.
pub const SETTINGS_FILE: &str = "jarpub.toml";

/// File name of the Gradle properties file read by default.
pub const PROPERTIES_FILE: &str = "gradle.properties";

pub mod host;
pub mod keys;
pub mod pom;
pub mod properties;
pub mod settings;

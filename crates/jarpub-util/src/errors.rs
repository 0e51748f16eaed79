use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all jarpub operations.
#[derive(Debug, Error, Diagnostic)]
pub enum JarpubError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A property source (properties file, `-P` argument) could not be read or parsed.
    #[error("Property error: {message}")]
    #[diagnostic(help("Properties are given as `key=value`, one per line or per `-P` flag"))]
    Properties { message: String },

    /// Invalid or malformed `jarpub.toml`.
    #[error("Settings error: {message}")]
    #[diagnostic(help("Check your jarpub.toml for syntax errors"))]
    Settings { message: String },

    /// Signing was requested but the key file could not be read.
    #[error("Failed to read signing key {}: {source}", path.display())]
    #[diagnostic(help("signingKeyFile must point to a readable ASCII-armored PGP private key"))]
    KeyMaterial {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required test-execution property is missing or malformed.
    #[error("Toolchain error: {message}")]
    #[diagnostic(help("TEST_JDK must be a JDK major version such as 17"))]
    Toolchain { message: String },

    /// A feature was required by the caller but its configuration is incomplete.
    #[error("Incomplete configuration: {message}")]
    Incomplete { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

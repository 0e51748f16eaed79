//! Description of the machine the tests will run on.

use serde::Serialize;

/// Host facts that influence resolution.
///
/// `os_name` follows the JVM's `os.name` convention (`Linux`,
/// `Windows 10`, `Mac OS X`), not Rust's `std::env::consts::OS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostInfo {
    pub os_name: String,
}

impl HostInfo {
    pub fn new(os_name: impl Into<String>) -> Self {
        Self {
            os_name: os_name.into(),
        }
    }

    /// Describe the machine this process runs on.
    pub fn current() -> Self {
        let name = match std::env::consts::OS {
            "linux" => "Linux",
            "windows" => "Windows",
            "macos" => "Mac OS X",
            "freebsd" => "FreeBSD",
            other => other,
        };
        Self::new(name)
    }

    /// Case-insensitive substring check, so `GNU/Linux` also counts.
    pub fn is_linux(&self) -> bool {
        self.os_name.to_lowercase().contains("linux")
    }
}

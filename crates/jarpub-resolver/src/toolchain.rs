//! JVM selection for test runs.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use jarpub_util::errors::JarpubError;
use serde::Serialize;

/// A JDK major version such as `8`, `17` or `21`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct JdkVersion(u32);

impl JdkVersion {
    pub fn new(major: u32) -> Self {
        Self(major)
    }

    pub fn major(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for JdkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for JdkVersion {
    type Err = JarpubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.parse::<u32>() {
            Ok(0) => Err(JarpubError::Toolchain {
                message: "JDK version must be greater than zero".to_string(),
            }),
            Ok(major) => Ok(Self(major)),
            Err(e) => Err(JarpubError::Toolchain {
                message: format!("Invalid JDK version '{trimmed}': {e}"),
            }),
        }
    }
}

/// Which JVM the test engine should launch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum JvmSelection {
    /// A specific `java` executable, bypassing toolchain lookup.
    Executable { path: PathBuf },
    /// A toolchain with the given language version.
    Toolchain { version: JdkVersion },
    /// Whatever JVM the test engine uses by default.
    Default,
}

impl fmt::Display for JvmSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Executable { path } => write!(f, "executable {}", path.display()),
            Self::Toolchain { version } => write!(f, "JDK {version}"),
            Self::Default => write!(f, "default toolchain"),
        }
    }
}

/// Path of the 32-bit `java.exe` inside a Windows JDK home.
///
/// Built as a plain string: the home is a Windows path even when the plan
/// is resolved elsewhere.
pub fn x86_java_executable(java_home: &str) -> PathBuf {
    let home = java_home.trim_end_matches(['\\', '/']);
    PathBuf::from(format!("{home}\\bin\\java.exe"))
}

//! Test execution descriptor: JVM selection, test filter, logging.

use std::fmt;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use jarpub_core::host::HostInfo;
use jarpub_core::keys;
use jarpub_core::properties::ConfigurationSet;
use jarpub_core::settings::TestSettings;
use jarpub_util::errors::JarpubError;
use serde::Serialize;

use crate::toolchain::{x86_java_executable, JdkVersion, JvmSelection};

/// Include/exclude patterns over fully-qualified test names.
///
/// Patterns use Gradle's filter syntax: `*` matches any run of characters.
/// A pattern without `*` matches the class itself, a method of it
/// (`Class.method`) or the simple class name. Exclusion wins over inclusion;
/// an empty include list includes everything.
#[derive(Debug, Clone, Serialize)]
pub struct TestFilter {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    #[serde(skip)]
    include_set: GlobSet,
    #[serde(skip)]
    exclude_set: GlobSet,
}

impl TestFilter {
    pub fn new(include: Vec<String>, exclude: Vec<String>) -> Result<Self, JarpubError> {
        Ok(Self {
            include_set: compile(&include)?,
            exclude_set: compile(&exclude)?,
            include,
            exclude,
        })
    }

    /// Whether the test with fully-qualified name `name` should run.
    pub fn matches(&self, name: &str) -> bool {
        if self.exclude_set.is_match(name) {
            return false;
        }
        self.include.is_empty() || self.include_set.is_match(name)
    }

    /// Whether `pattern` is among the exclusions.
    pub fn excludes_pattern(&self, pattern: &str) -> bool {
        self.exclude.iter().any(|p| p == pattern)
    }
}

fn escape_glob(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if matches!(c, '?' | '[' | ']' | '{' | '}' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn compile(patterns: &[String]) -> Result<GlobSet, JarpubError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let escaped = escape_glob(pattern);
        let variants = if pattern.contains('*') {
            vec![escaped]
        } else {
            vec![
                escaped.clone(),
                format!("{escaped}.*"),
                format!("*.{escaped}"),
                format!("*.{escaped}.*"),
            ]
        };
        for variant in variants {
            let glob = GlobBuilder::new(&variant)
                .literal_separator(false)
                .backslash_escape(true)
                .build()
                .map_err(|e| JarpubError::Generic {
                    message: format!("Invalid test pattern '{pattern}': {e}"),
                })?;
            builder.add(glob);
        }
    }
    builder.build().map_err(|e| JarpubError::Generic {
        message: format!("Invalid test patterns: {e}"),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExceptionFormat {
    Short,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestEvent {
    Started,
    Passed,
    Skipped,
    Failed,
}

impl fmt::Display for TestEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started => write!(f, "started"),
            Self::Passed => write!(f, "passed"),
            Self::Skipped => write!(f, "skipped"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// What the test engine prints while tests run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TestLogging {
    pub show_standard_streams: bool,
    pub exception_format: ExceptionFormat,
    /// Depth of the test hierarchy shown in event lines (2 = class + method).
    pub display_granularity: u32,
    pub events: Vec<TestEvent>,
}

impl Default for TestLogging {
    fn default() -> Self {
        Self {
            show_standard_streams: true,
            exception_format: ExceptionFormat::Full,
            display_granularity: 2,
            events: vec![TestEvent::Started, TestEvent::Passed],
        }
    }
}

/// Resolved description of one test run.
#[derive(Debug, Clone, Serialize)]
pub struct TestExecutionDescriptor {
    pub jvm: JvmSelection,
    pub filter: TestFilter,
    pub logging: TestLogging,
}

/// Pick the JVM for the test run.
///
/// In priority order: the 32-bit JVM when `TEST_WITH_JAVA_X86` is `true`,
/// the toolchain named by `TEST_JDK`, or the default toolchain.
pub fn select_jvm(config: &ConfigurationSet) -> Result<JvmSelection, JarpubError> {
    if config.is_true(keys::TEST_WITH_JAVA_X86) {
        let home = config
            .get(keys::JAVA_HOME_X86)
            .ok_or_else(|| JarpubError::Toolchain {
                message: format!(
                    "{} is true but {} is not set",
                    keys::TEST_WITH_JAVA_X86,
                    keys::JAVA_HOME_X86
                ),
            })?;
        return Ok(JvmSelection::Executable {
            path: x86_java_executable(home),
        });
    }
    if let Some(raw) = config.get(keys::TEST_JDK) {
        let version: JdkVersion = raw.parse().map_err(|_| JarpubError::Toolchain {
            message: format!("{}='{raw}' is not a valid JDK version", keys::TEST_JDK),
        })?;
        return Ok(JvmSelection::Toolchain { version });
    }
    Ok(JvmSelection::Default)
}

/// Resolve the test execution descriptor.
///
/// Linux-only patterns from `settings` are excluded unless `host` is Linux.
/// `include` carries caller-supplied test filters.
pub fn resolve_test_execution(
    config: &ConfigurationSet,
    settings: &TestSettings,
    host: &HostInfo,
    include: &[String],
) -> Result<TestExecutionDescriptor, JarpubError> {
    let jvm = select_jvm(config)?;
    let exclude = if host.is_linux() {
        Vec::new()
    } else {
        settings.linux_only.clone()
    };
    Ok(TestExecutionDescriptor {
        jvm,
        filter: TestFilter::new(include.to_vec(), exclude)?,
        logging: TestLogging::default(),
    })
}

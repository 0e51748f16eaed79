//! Property sources and the immutable [`ConfigurationSet`].
//!
//! Properties come from, lowest precedence first: the build's
//! `gradle.properties`, the user's `gradle.properties`, the test-run
//! environment variables, `ORG_GRADLE_PROJECT_*` environment variables, and
//! `-P key=value` command-line overrides. The resolver only
//! ever sees the merged, read-only result.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use jarpub_util::errors::JarpubError;
use serde::Serialize;

use crate::keys::{ENV_KEYS, GRADLE_ENV_PREFIX};

/// Where a property value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertySource {
    File,
    UserFile,
    Environment,
    GradleEnvironment,
    CommandLine,
}

impl fmt::Display for PropertySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "properties file"),
            Self::UserFile => write!(f, "user properties file"),
            Self::Environment => write!(f, "environment"),
            Self::GradleEnvironment => write!(f, "{GRADLE_ENV_PREFIX}* environment"),
            Self::CommandLine => write!(f, "command line"),
        }
    }
}

#[derive(Clone)]
struct Entry {
    value: String,
    source: PropertySource,
}

/// Immutable mapping from property name to value for one resolution pass.
///
/// Empty and whitespace-only values are stored but reported as absent, so
/// "present" always means "present and non-empty".
#[derive(Clone, Default)]
pub struct ConfigurationSet {
    entries: BTreeMap<String, Entry>,
}

impl ConfigurationSet {
    pub fn builder() -> ConfigurationSetBuilder {
        ConfigurationSetBuilder::default()
    }

    /// Build a set directly from key/value pairs, attributed to the command line.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::builder().overrides(pairs).build()
    }

    /// The value of `key`, or `None` if unset or blank.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(|e| e.value.as_str())
            .filter(|v| !v.trim().is_empty())
    }

    /// Where the effective value of `key` came from, if it is present.
    pub fn source(&self, key: &str) -> Option<PropertySource> {
        self.get(key)?;
        self.entries.get(key).map(|e| e.source)
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Whether `key` is exactly `true`.
    ///
    /// Any other value, including `TRUE` or `1`, counts as false.
    pub fn is_true(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }

    /// Number of present (non-blank) properties.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate present properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, e)| (k.as_str(), e.value.as_str()))
            .filter(|(_, v)| !v.trim().is_empty())
    }
}

// Values may be secrets, so only keys are printed.
impl fmt::Debug for ConfigurationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurationSet")
            .field("keys", &self.iter().map(|(k, _)| k).collect::<Vec<_>>())
            .finish()
    }
}

/// Layers property sources into a [`ConfigurationSet`].
///
/// Each call overrides values set by earlier calls, so layers are applied
/// lowest precedence first.
#[derive(Default)]
pub struct ConfigurationSetBuilder {
    entries: BTreeMap<String, Entry>,
}

impl ConfigurationSetBuilder {
    fn layer<I, K, V>(mut self, source: PropertySource, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.entries.insert(
                key.into(),
                Entry {
                    value: value.into(),
                    source,
                },
            );
        }
        self
    }

    /// Add values loaded from the build's properties file.
    pub fn file_properties(self, properties: BTreeMap<String, String>) -> Self {
        self.layer(PropertySource::File, properties)
    }

    /// Add values from the user-wide properties file (`~/.gradle/gradle.properties`).
    pub fn user_file_properties(self, properties: BTreeMap<String, String>) -> Self {
        self.layer(PropertySource::UserFile, properties)
    }

    /// Add environment variables.
    ///
    /// Variables carrying the `ORG_GRADLE_PROJECT_` prefix are added with the
    /// prefix stripped. Of the rest, only [`ENV_KEYS`] are taken under their
    /// own names; the prefixed form wins when both are set.
    pub fn environment<I>(self, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut verbatim = Vec::new();
        let mut gradle = Vec::new();
        for (key, value) in vars {
            if let Some(stripped) = key.strip_prefix(GRADLE_ENV_PREFIX) {
                if !stripped.is_empty() {
                    gradle.push((stripped.to_string(), value));
                }
            } else if ENV_KEYS.contains(&key.as_str()) {
                verbatim.push((key, value));
            }
        }
        self.layer(PropertySource::Environment, verbatim)
            .layer(PropertySource::GradleEnvironment, gradle)
    }

    /// Add explicit overrides (`-P key=value`).
    pub fn overrides<I, K, V>(self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.layer(PropertySource::CommandLine, pairs)
    }

    pub fn build(self) -> ConfigurationSet {
        ConfigurationSet {
            entries: self.entries,
        }
    }
}

/// Load a Java-style properties file.
///
/// Follows `java.util.Properties`: keys end at the first unescaped `=`, `:`
/// or whitespace, a line ending in an odd number of backslashes continues
/// on the next line, and `\t`, `\n`, `\r`, `\f`, `\uXXXX` and `\<char>`
/// escapes are decoded in keys and values. Lines starting with `#` or `!`
/// are comments. A missing file yields an empty map.
pub fn load_properties_file(path: &Path) -> Result<BTreeMap<String, String>, JarpubError> {
    if !path.is_file() {
        return Ok(BTreeMap::new());
    }
    let content = std::fs::read_to_string(path).map_err(|e| JarpubError::Properties {
        message: format!("Failed to read {}: {e}", path.display()),
    })?;
    let map = parse_properties(&content).map_err(|message| JarpubError::Properties {
        message: format!("{}: {message}", path.display()),
    })?;
    tracing::debug!("Loaded {} properties from {}", map.len(), path.display());
    Ok(map)
}

const WHITESPACE: [char; 3] = [' ', '\t', '\x0c'];

fn parse_properties(content: &str) -> Result<BTreeMap<String, String>, String> {
    let mut map = BTreeMap::new();
    for line in logical_lines(content) {
        let (key, value) = split_entry(&line);
        map.insert(unescape(key)?, unescape(value)?);
    }
    Ok(map)
}

/// Join continued lines and drop blank and comment lines.
fn logical_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pending: Option<String> = None;
    for raw in content.lines() {
        let line = raw.trim_start_matches(WHITESPACE);
        if pending.is_none() && (line.is_empty() || line.starts_with(['#', '!'])) {
            continue;
        }
        let continued = line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1;
        let body = if continued {
            &line[..line.len() - 1]
        } else {
            line
        };
        let mut current = pending.take().unwrap_or_default();
        current.push_str(body);
        if continued {
            pending = Some(current);
        } else {
            lines.push(current);
        }
    }
    lines.extend(pending);
    lines
}

/// Split a logical line into its still-escaped key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => return (&line[..i], line[i + 1..].trim_start_matches(WHITESPACE)),
            ' ' | '\t' | '\x0c' => {
                let rest = line[i..].trim_start_matches(WHITESPACE);
                let rest = rest.strip_prefix(['=', ':']).unwrap_or(rest);
                return (&line[..i], rest.trim_start_matches(WHITESPACE));
            }
            _ => {}
        }
    }
    (line, "")
}

fn unescape(raw: &str) -> Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let decoded = (hex.len() == 4 && hex.chars().all(|h| h.is_ascii_hexdigit()))
                    .then(|| u32::from_str_radix(&hex, 16).ok())
                    .flatten()
                    .and_then(char::from_u32)
                    .ok_or_else(|| format!("Malformed \\u{hex} escape in '{raw}'"))?;
                out.push(decoded);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    Ok(out)
}

/// Location of the user-wide properties file.
///
/// `$GRADLE_USER_HOME/gradle.properties`, else `~/.gradle/gradle.properties`.
pub fn user_properties_path() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("GRADLE_USER_HOME") {
        return Some(PathBuf::from(home).join(crate::PROPERTIES_FILE));
    }
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok()
        .map(|home| Path::new(&home).join(".gradle").join(crate::PROPERTIES_FILE))
}

/// Parse one `-P key=value` argument.
pub fn parse_override(arg: &str) -> Result<(String, String), JarpubError> {
    let Some((key, value)) = arg.split_once('=') else {
        return Err(JarpubError::Properties {
            message: format!("Expected key=value, got '{arg}'"),
        });
    };
    let key = key.trim();
    if key.is_empty() {
        return Err(JarpubError::Properties {
            message: format!("Missing property name in '{arg}'"),
        });
    }
    Ok((key.to_string(), value.to_string()))
}

use std::path::{Path, PathBuf};

/// Files that mark the root of a Gradle build.
pub const BUILD_ROOT_MARKERS: &[&str] = &["settings.gradle.kts", "settings.gradle"];

/// Walk up from `start` until a directory contains one of `names`.
///
/// Names are checked in order within each directory, so earlier entries win
/// when several are present side by side.
pub fn find_ancestor_with_any<'a>(start: &Path, names: &[&'a str]) -> Option<(PathBuf, &'a str)> {
    let mut current = start;
    loop {
        if let Some(name) = names.iter().find(|n| current.join(n).is_file()) {
            return Some((current.to_path_buf(), *name));
        }
        current = current.parent()?;
    }
}

/// Walk up from `start` looking for a file named `filename`.
/// Returns the path to the directory containing the file, or `None`.
pub fn find_ancestor_with(start: &Path, filename: &str) -> Option<PathBuf> {
    find_ancestor_with_any(start, &[filename]).map(|(dir, _)| dir)
}

/// Locate the root of the Gradle build containing `start`.
///
/// Falls back to the nearest directory holding a `gradle.properties` when no
/// settings script exists (single-project builds).
pub fn find_build_root(start: &Path) -> Option<PathBuf> {
    find_ancestor_with_any(start, BUILD_ROOT_MARKERS)
        .map(|(dir, _)| dir)
        .or_else(|| find_ancestor_with(start, "gradle.properties"))
}

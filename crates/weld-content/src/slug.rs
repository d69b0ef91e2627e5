//! Slug derivation from content file locations.
//!
//! A slug is a pure function of the file path relative to the content root:
//! it never depends on file content, so the result is stable across
//! reorderings and reruns.

use std::path::Path;

/// Derive the route slug for a content file.
///
/// The extension is stripped, path separators become `/`, and an `index`
/// basename collapses to its parent directory's path.
///
/// Examples:
/// - `index.md` -> `""`
/// - `guide.md` -> `"guide"`
/// - `guides/index.md` -> `"guides"`
/// - `guides/install.md` -> `"guides/install"`
#[must_use]
pub fn slug_from_path(rel_path: &Path) -> String {
    let mut segments: Vec<String> = rel_path
        .with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if segments.last().is_some_and(|s| s == "index") {
        segments.pop();
    }

    segments.join("/")
}

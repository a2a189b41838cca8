/*!
 * Path filtering predicates
 *
 * Both specs are parsed once per invocation from their raw comma-separated
 * flag values and never mutated afterwards. The predicates inspect only the
 * path string, never the filesystem.
 */

use std::path::Path;

/// Extension filter parsed from the `--filter` flag.
///
/// Holds the comma-separated extension entries verbatim, without leading
/// dots. An empty spec includes every file.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    extensions: Vec<String>,
}

impl FilterSpec {
    /// Parse a raw comma-separated extension list.
    ///
    /// An empty string yields an empty spec. Entries are kept exactly as
    /// split, so `"go,txt"` holds two entries and `"go,"` holds `"go"` and
    /// an empty entry.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        Self {
            extensions: raw.split(',').map(str::to_owned).collect(),
        }
    }

    /// Whether a file path passes the filter.
    ///
    /// True when the spec is empty, or when the path ends with `"." + ext`
    /// for any entry. Directories are never subject to this check; the
    /// walker only consults it for non-directory entries.
    pub fn includes(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        let path = path.to_string_lossy();
        self.extensions
            .iter()
            .any(|ext| path.ends_with(&format!(".{}", ext)))
    }
}

/// Ignore list parsed from the `--ignore` flag.
///
/// Entries are exact basenames or raw path prefixes. An empty spec ignores
/// nothing.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSpec {
    entries: Vec<String>,
}

impl IgnoreSpec {
    /// Parse a raw comma-separated ignore list. Same rules as
    /// [`FilterSpec::parse`].
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        Self {
            entries: raw.split(',').map(str::to_owned).collect(),
        }
    }

    /// Whether a path is ignored.
    ///
    /// True when any entry equals the path's final component exactly, or is
    /// a plain character prefix of the whole path. The prefix comparison is
    /// not segment-aware: entry `dir` also matches `dir2/file`.
    pub fn matches(&self, path: &Path) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        let path = path.to_string_lossy();
        self.entries
            .iter()
            .any(|entry| name == entry.as_str() || path.starts_with(entry.as_str()))
    }
}

//! Build-wide inputs for URL derivation.

use std::path::PathBuf;

use indexmap::IndexMap;

/// Language assumed when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Build configuration shared by every page of a documentation build.
///
/// Constructed once per build and only read afterwards. All fields are
/// optional in spirit: unset values degrade to single-version or
/// single-language output instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildConfig {
    /// Version being built (e.g. `14.0`).
    pub current_version: Option<String>,
    /// Version canonical URLs point at. Falls back to `current_version`.
    pub canonical_version: Option<String>,
    /// Language being built. Falls back to [`DEFAULT_LANGUAGE`].
    pub current_language: Option<String>,
    /// Language whose URLs carry no language segment. Falls back to [`DEFAULT_LANGUAGE`].
    pub canonical_language: Option<String>,
    /// Published versions. Empty means the project has a single version.
    pub published_versions: Vec<String>,
    /// Published locales. Empty means the project has a single language.
    pub published_languages: Vec<String>,
    /// Whether pages are served from [`remote_root`](Self::remote_root)
    /// rather than from the local output directory.
    pub is_remote_build: bool,
    /// Public site root used by remote builds (e.g. `https://docs.example.com/product`).
    pub remote_root: Option<String>,
    /// Version id to human label. Versions missing here are unsupported.
    pub version_display_names: IndexMap<String, String>,
    /// Locale code to human label. Locales missing here are unsupported.
    pub language_display_names: IndexMap<String, String>,
}

impl BuildConfig {
    /// Version used when a URL does not name one explicitly.
    pub fn effective_version(&self) -> &str {
        self.current_version.as_deref().unwrap_or_default()
    }

    /// Language used when a URL does not name one explicitly.
    pub fn effective_language(&self) -> &str {
        non_empty(self.current_language.as_deref()).unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Version the canonical URL points at.
    pub fn effective_canonical_version(&self) -> &str {
        non_empty(self.canonical_version.as_deref()).unwrap_or_else(|| self.effective_version())
    }

    /// Language the canonical URL points at, and the one served without a
    /// language segment.
    pub fn effective_canonical_language(&self) -> &str {
        non_empty(self.canonical_language.as_deref()).unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Whether more than one version is published.
    pub fn is_multi_version(&self) -> bool {
        !self.published_versions.is_empty()
    }
}

/// Per-page input for URL derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Logical page path without extension (e.g. `guides/intro`).
    pub page_name: String,
    /// Output root of the current build. Only consulted by local builds.
    pub output_directory: PathBuf,
}

impl PageRequest {
    /// Create a request for `page_name` built into `output_directory`.
    pub fn new(page_name: impl Into<String>, output_directory: impl Into<PathBuf>) -> Self {
        Self {
            page_name: page_name.into(),
            output_directory: output_directory.into(),
        }
    }
}

/// Split a comma-separated allow-list (`"14.0,15.0"`) into its entries.
///
/// Entries are trimmed and empty entries are dropped, so an empty or
/// whitespace-only string yields an empty list.
///
/// # Examples
///
/// ```
/// use ml_alternates::parse_list;
///
/// assert_eq!(parse_list("fr, en,,"), vec!["fr".to_owned(), "en".to_owned()]);
/// assert!(parse_list("").is_empty());
/// ```
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

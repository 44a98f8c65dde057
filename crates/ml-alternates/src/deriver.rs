//! URL derivation for every version and language variant of a page.
//!
//! All variant URLs share the same shape:
//!
//! ```text
//! <site root>[/<version>][/<language>]/<page>.html
//! ```
//!
//! The version segment only exists for multi-version projects and the
//! language segment is omitted for the canonical language.

use crate::alternates::{AlternateLanguage, AlternateUrlSet, AlternateVersion};
use crate::build_config::{BuildConfig, PageRequest};
use crate::locale::hreflang_code;

/// Derive the canonical URL and the version and language alternates of a page.
///
/// Never fails: missing configuration yields fewer alternates, never an error.
pub fn derive_alternate_urls(page: &PageRequest, config: &BuildConfig) -> AlternateUrlSet {
    let urls = UrlBuilder::new(page, config);

    AlternateUrlSet {
        canonical_url: urls.build(
            Some(config.effective_canonical_version()),
            Some(config.effective_canonical_language()),
        ),
        version_display_label: config
            .current_version
            .as_ref()
            .and_then(|version| config.version_display_names.get(version))
            .cloned(),
        language_display_label: config
            .language_display_names
            .get(config.effective_language())
            .cloned(),
        alternate_versions: alternate_versions(&urls, config),
        alternate_languages: alternate_languages(&urls, config),
    }
}

/// Other published versions, in display-name mapping order.
fn alternate_versions(urls: &UrlBuilder<'_>, config: &BuildConfig) -> Vec<AlternateVersion> {
    for version in &config.published_versions {
        if !config.version_display_names.contains_key(version) {
            tracing::debug!(version = %version, "Published version has no display name, skipping");
        }
    }

    config
        .version_display_names
        .iter()
        .filter(|(version, _)| {
            config.published_versions.contains(*version)
                && config.current_version.as_deref() != Some(version.as_str())
        })
        .map(|(version, label)| AlternateVersion {
            label: label.clone(),
            url: urls.build(Some(version.as_str()), None),
        })
        .collect()
}

/// Other published languages, in allow-list order.
fn alternate_languages(urls: &UrlBuilder<'_>, config: &BuildConfig) -> Vec<AlternateLanguage> {
    let current = config.effective_language();

    config
        .published_languages
        .iter()
        .filter(|locale| locale.as_str() != current)
        .filter_map(|locale| {
            let Some(label) = config.language_display_names.get(locale) else {
                tracing::debug!(locale = %locale, "Published language is not supported, skipping");
                return None;
            };
            Some(AlternateLanguage {
                label: label.clone(),
                hreflang: hreflang_code(locale).to_owned(),
                url: urls.build(None, Some(locale.as_str())),
            })
        })
        .collect()
}

/// Builds variant URLs for one page.
///
/// The site root and page filename are resolved once and shared by every
/// variant.
struct UrlBuilder<'a> {
    config: &'a BuildConfig,
    root: String,
    page_file: String,
}

impl<'a> UrlBuilder<'a> {
    fn new(page: &PageRequest, config: &'a BuildConfig) -> Self {
        Self {
            config,
            root: resolve_site_root(page, config),
            page_file: canonical_page_name(&page.page_name, config.is_remote_build),
        }
    }

    /// URL of the page in `version` and `language`, each defaulting to the
    /// one being built.
    fn build(&self, version: Option<&str>, language: Option<&str>) -> String {
        let version = version
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| self.config.effective_version());
        let language = language
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| self.config.effective_language());

        let mut url = String::with_capacity(
            self.root.len() + version.len() + language.len() + self.page_file.len() + 3,
        );
        url.push_str(&self.root);
        if self.config.is_multi_version() && !version.is_empty() {
            url.push('/');
            url.push_str(version);
        }
        if language != self.config.effective_canonical_language() {
            url.push('/');
            url.push_str(language);
        }
        url.push('/');
        url.push_str(&self.page_file);
        url
    }
}

/// Prefix shared by every variant URL.
///
/// Remote builds use the configured public root verbatim. Local builds
/// recover the site root from the output directory (e.g.
/// `_build/html/14.0/fr`) by dropping the trailing language segment and
/// then the trailing version segment, so sibling variants can be addressed.
pub fn resolve_site_root(page: &PageRequest, config: &BuildConfig) -> String {
    if config.is_remote_build {
        return match &config.remote_root {
            Some(root) => root.clone(),
            None => {
                tracing::debug!(page = %page.page_name, "Remote build without project root");
                String::new()
            }
        };
    }

    let output_dir = page.output_directory.to_string_lossy();
    let mut root = output_dir.as_ref();
    if root.len() > 1 {
        root = root.trim_end_matches('/');
    }
    root = strip_segment(root, config.effective_language());
    root = strip_segment(root, config.effective_version());
    root.to_owned()
}

/// Remove a trailing `/<segment>` path component, if present.
fn strip_segment<'p>(path: &'p str, segment: &str) -> &'p str {
    if segment.is_empty() {
        return path;
    }
    path.strip_suffix(segment)
        .and_then(|rest| rest.strip_suffix('/'))
        .unwrap_or(path)
}

/// File part of every variant URL.
///
/// Remote servers resolve directory indexes, so remote builds drop a trailing
/// `index.html` component. Local file browsing needs the explicit filename.
pub fn canonical_page_name(page_name: &str, is_remote_build: bool) -> String {
    let file = format!("{page_name}.html");
    if !is_remote_build {
        return file;
    }
    if file == "index.html" {
        return String::new();
    }
    match file.strip_suffix("/index.html") {
        Some(dir) => format!("{dir}/"),
        None => file,
    }
}

//! Derived URLs and their injection into a page rendering context.

use serde_json::{Map, Value, json};

/// Context key holding the canonical URL.
pub const CANONICAL_KEY: &str = "canonical";
/// Context key holding `[label, url]` pairs for the other versions.
pub const ALTERNATE_VERSIONS_KEY: &str = "alternate_versions";
/// Context key holding `[label, hreflang, url]` triples for the other languages.
pub const ALTERNATE_LANGUAGES_KEY: &str = "alternate_languages";
/// Context key overwritten with the current version's label.
pub const VERSION_DISPLAY_NAME_KEY: &str = "version_display_name";
/// Context key overwritten with the current language's label.
pub const LANGUAGE_KEY: &str = "language";

/// The same page in another published version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateVersion {
    /// Human label of the version (e.g. `Odoo 14`).
    pub label: String,
    pub url: String,
}

/// The same page in another published language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateLanguage {
    /// Human label of the language (e.g. `Français`).
    pub label: String,
    /// Code for `<link rel="alternate" hreflang="...">`.
    pub hreflang: String,
    pub url: String,
}

/// Every URL a page needs for its canonical tag and its version and
/// language switchers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateUrlSet {
    pub canonical_url: String,
    /// Label of the version being built, if it has one.
    pub version_display_label: Option<String>,
    /// Label of the language being built, if it is supported.
    pub language_display_label: Option<String>,
    /// Other versions, current version excluded.
    pub alternate_versions: Vec<AlternateVersion>,
    /// Other languages, current language excluded.
    pub alternate_languages: Vec<AlternateLanguage>,
}

impl AlternateUrlSet {
    /// Write the derived values into a rendering context.
    ///
    /// Sets `canonical`, `alternate_versions` and `alternate_languages`, and
    /// overwrites `version_display_name` and `language` with the resolved
    /// labels (`null` when unsupported). Other keys are left untouched.
    pub fn apply_to(&self, context: &mut Map<String, Value>) {
        context.insert(CANONICAL_KEY.to_owned(), json!(self.canonical_url));
        context.insert(
            ALTERNATE_VERSIONS_KEY.to_owned(),
            Value::Array(
                self.alternate_versions
                    .iter()
                    .map(|v| json!([v.label, v.url]))
                    .collect(),
            ),
        );
        context.insert(
            ALTERNATE_LANGUAGES_KEY.to_owned(),
            Value::Array(
                self.alternate_languages
                    .iter()
                    .map(|l| json!([l.label, l.hreflang, l.url]))
                    .collect(),
            ),
        );
        context.insert(
            VERSION_DISPLAY_NAME_KEY.to_owned(),
            json!(self.version_display_label),
        );
        context.insert(LANGUAGE_KEY.to_owned(), json!(self.language_display_label));
    }

    /// Build a fresh rendering context holding only the derived values.
    pub fn to_context(&self) -> Map<String, Value> {
        let mut context = Map::new();
        self.apply_to(&mut context);
        context
    }
}

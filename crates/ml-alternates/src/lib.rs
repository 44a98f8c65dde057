//! Canonical and alternate URLs for multi-version, multi-language documentation.
//!
//! This crate provides:
//! - [`derive_alternate_urls`]: the canonical URL of a page plus the URLs of
//!   the same page in every other published version and language
//! - [`AlternateUrlSet::apply_to`]: injection of those URLs into a page
//!   rendering context
//!
//! Derivation is a pure function of an immutable [`BuildConfig`] and a
//! per-page [`PageRequest`], so it can run from parallel page-rendering
//! workers without coordination.
//!
//! # Quick Start
//!
//! ```
//! use ml_alternates::{BuildConfig, PageRequest, derive_alternate_urls, parse_list};
//!
//! let config = BuildConfig {
//!     current_version: Some("14.0".to_owned()),
//!     current_language: Some("fr".to_owned()),
//!     canonical_version: Some("15.0".to_owned()),
//!     published_versions: parse_list("14.0,15.0"),
//!     published_languages: parse_list("fr,en"),
//!     is_remote_build: true,
//!     remote_root: Some("https://docs.x.com".to_owned()),
//!     ..BuildConfig::default()
//! };
//! let page = PageRequest::new("intro", "_build/html/14.0/fr");
//!
//! let urls = derive_alternate_urls(&page, &config);
//! assert_eq!(urls.canonical_url, "https://docs.x.com/15.0/intro.html");
//! ```

mod alternates;
mod build_config;
mod deriver;
mod locale;

pub use alternates::{
    ALTERNATE_LANGUAGES_KEY, ALTERNATE_VERSIONS_KEY, AlternateLanguage, AlternateUrlSet,
    AlternateVersion, CANONICAL_KEY, LANGUAGE_KEY, VERSION_DISPLAY_NAME_KEY,
};
pub use build_config::{BuildConfig, DEFAULT_LANGUAGE, PageRequest, parse_list};
pub use deriver::{canonical_page_name, derive_alternate_urls, resolve_site_root};
pub use locale::{X_DEFAULT, hreflang_code};

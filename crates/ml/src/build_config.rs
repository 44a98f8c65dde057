//! Conversion from the loaded configuration file to derivation inputs.

use ml_alternates::{BuildConfig, parse_list};
use ml_config::Config;

/// Map the loaded configuration onto the deriver's build configuration.
pub(crate) fn build_config_from(config: &Config) -> BuildConfig {
    BuildConfig {
        current_version: config.version.clone(),
        canonical_version: config.canonical_version.clone(),
        current_language: config.language.clone(),
        canonical_language: config.canonical_language.clone(),
        published_versions: config.versions.as_deref().map(parse_list).unwrap_or_default(),
        published_languages: config.languages.as_deref().map(parse_list).unwrap_or_default(),
        is_remote_build: config.is_remote_build,
        remote_root: config.project_root.clone(),
        version_display_names: config.versions_names.clone(),
        language_display_names: config.supported_languages.clone(),
    }
}

/// Published entries without a display name.
///
/// The deriver skips them silently, so they are worth reporting before a build.
pub(crate) fn unsupported_entries(config: &BuildConfig) -> Vec<String> {
    let versions = config
        .published_versions
        .iter()
        .filter(|v| !config.version_display_names.contains_key(*v))
        .map(|v| format!("version {v} has no entry in versions_names"));
    let languages = config
        .published_languages
        .iter()
        .filter(|l| !config.language_display_names.contains_key(*l))
        .map(|l| format!("language {l} has no entry in supported_languages"));
    versions.chain(languages).collect()
}

//! Configuration management for multilingual documentation builds.
//!
//! Parses `multilingual.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Example
//!
//! ```toml
//! version = "${DOCS_VERSION}"
//! language = "fr"
//! versions = "14.0,15.0"
//! languages = "en,fr"
//! canonical_version = "15.0"
//! is_remote_build = true
//! project_root = "https://docs.example.com/product"
//!
//! [versions_names]
//! "14.0" = "Odoo 14"
//! "15.0" = "Odoo 15"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! String values support `${VAR}` and `${VAR:-default}`. Expanded fields:
//! - `version`, `language`
//! - `canonical_version`, `canonical_language`
//! - `versions`, `languages`
//! - `project_root`
//! - `output_dir`

mod expand;

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the version being built.
    pub version: Option<String>,
    /// Override the language being built.
    pub language: Option<String>,
    /// Override the remote build flag.
    pub is_remote_build: Option<bool>,
    /// Override the remote project root.
    pub project_root: Option<String>,
    /// Override the build output directory.
    pub output_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "multilingual.toml";

/// Default build output directory, relative to the config file.
const DEFAULT_OUTPUT_DIR: &str = "_build/html";

/// Application configuration.
///
/// Field names follow the documentation build's option names so existing
/// settings can be copied over unchanged.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Version being built.
    pub version: Option<String>,
    /// Language being built (defaults to English when unset).
    pub language: Option<String>,
    /// Remote site root (e.g. `https://docs.example.com/product`).
    pub project_root: Option<String>,
    /// Version canonical URLs point at.
    pub canonical_version: Option<String>,
    /// Language canonical URLs point at.
    pub canonical_language: Option<String>,
    /// Comma-separated published versions.
    pub versions: Option<String>,
    /// Comma-separated published languages.
    pub languages: Option<String>,
    /// Whether the site is served from `project_root`.
    pub is_remote_build: bool,
    /// Locale code to display name. Locales missing here are unsupported.
    pub supported_languages: IndexMap<String, String>,
    /// Version id to display name. Versions missing here are unsupported.
    pub versions_names: IndexMap<String, String>,
    /// Build output directory as written in the file.
    output_dir: Option<String>,

    /// Resolved build output directory (set after loading).
    #[serde(skip)]
    pub output_dir_resolved: PathBuf,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Display names of the locales supported out of the box.
pub fn default_supported_languages() -> IndexMap<String, String> {
    [
        ("de", "Deutsch"),
        ("en", "English"),
        ("es", "Español"),
        ("fr", "Français"),
        ("nl", "Nederlands"),
        ("pt_BR", "Português (BR)"),
        ("uk", "українська"),
        ("zh_CN", "简体中文"),
    ]
    .into_iter()
    .map(|(code, name)| (code.to_owned(), name.to_owned()))
    .collect()
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`project_root`").
        field: String,
        /// Error message (e.g., "${`DOCS_ROOT`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Require a value used as a single URL path segment.
fn require_segment(value: Option<&str>, field: &str) -> Result<(), ConfigError> {
    if let Some(value) = value
        && value.contains('/')
    {
        return Err(ConfigError::Validation(format!(
            "{field} cannot contain '/': {value}"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `multilingual.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            tracing::info!(path = %discovered.display(), "Using discovered configuration");
            Self::load_from_file(&discovered)?
        } else {
            tracing::info!("No {CONFIG_FILENAME} found, using defaults");
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        // Validate once CLI settings are applied
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(version) = &settings.version {
            self.version = Some(version.clone());
        }
        if let Some(language) = &settings.language {
            self.language = Some(language.clone());
        }
        if let Some(is_remote_build) = settings.is_remote_build {
            self.is_remote_build = is_remote_build;
        }
        if let Some(project_root) = &settings.project_root {
            self.project_root = Some(project_root.clone());
        }
        if let Some(output_dir) = &settings.output_dir {
            self.output_dir_resolved.clone_from(output_dir);
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            version: None,
            language: None,
            project_root: None,
            canonical_version: None,
            canonical_language: None,
            versions: None,
            languages: None,
            is_remote_build: false,
            supported_languages: default_supported_languages(),
            versions_names: IndexMap::new(),
            output_dir: None,
            output_dir_resolved: base.join(DEFAULT_OUTPUT_DIR),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically by [`Config::load`] once CLI settings are applied.
    /// Remote builds need an absolute `project_root`. Versions and languages
    /// end up as URL path segments and cannot contain `/`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_remote()?;
        require_segment(self.version.as_deref(), "version")?;
        require_segment(self.language.as_deref(), "language")?;
        require_segment(self.canonical_version.as_deref(), "canonical_version")?;
        require_segment(self.canonical_language.as_deref(), "canonical_language")?;
        Ok(())
    }

    /// Validate remote build settings.
    fn validate_remote(&self) -> Result<(), ConfigError> {
        if !self.is_remote_build {
            return Ok(());
        }
        let project_root = self.project_root.as_deref().ok_or_else(|| {
            ConfigError::Validation("is_remote_build requires project_root to be set".to_owned())
        })?;
        require_non_empty(project_root, "project_root")?;
        require_http_url(project_root, "project_root")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_optional(&mut self.version, "version")?;
        expand::expand_optional(&mut self.language, "language")?;
        expand::expand_optional(&mut self.canonical_version, "canonical_version")?;
        expand::expand_optional(&mut self.canonical_language, "canonical_language")?;
        expand::expand_optional(&mut self.versions, "versions")?;
        expand::expand_optional(&mut self.languages, "languages")?;
        expand::expand_optional(&mut self.project_root, "project_root")?;
        expand::expand_optional(&mut self.output_dir, "output_dir")?;
        Ok(())
    }

    /// Resolve the output directory relative to the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.output_dir_resolved =
            config_dir.join(self.output_dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR));
    }
}

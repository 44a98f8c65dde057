//! `ml check` command implementation.

use std::path::PathBuf;

use clap::Args;
use ml_alternates::BuildConfig;
use ml_config::Config;

use crate::build_config::{build_config_from, unsupported_entries};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover multilingual.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fail when a published version or language has no display name.
    #[arg(long)]
    strict: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, or in strict mode if
    /// any published entry would be dropped from the alternates.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), None)?;
        let build_config = build_config_from(&config);

        output.highlight("Multilingual configuration");
        match &config.config_path {
            Some(path) => output.info(&format!("Config file: {}", path.display())),
            None => output.info("Config file: none (defaults)"),
        }
        for line in summary(&build_config, &config) {
            output.info(&line);
        }

        let warnings = unsupported_entries(&build_config);
        for warning in &warnings {
            output.warning(&format!("Warning: {warning}"));
        }

        if self.strict && !warnings.is_empty() {
            return Err(CliError::Validation(format!(
                "{} published entries have no display name",
                warnings.len()
            )));
        }

        output.success("Configuration is valid");
        Ok(())
    }
}

/// Human-readable description of the resolved settings.
fn summary(build_config: &BuildConfig, config: &Config) -> Vec<String> {
    let or_unset = |value: &str| {
        if value.is_empty() {
            "(unset)".to_owned()
        } else {
            value.to_owned()
        }
    };
    let list = |values: &[String]| {
        if values.is_empty() {
            "(none)".to_owned()
        } else {
            values.join(", ")
        }
    };

    let root = if build_config.is_remote_build {
        format!(
            "Site root: {} (remote)",
            or_unset(build_config.remote_root.as_deref().unwrap_or_default())
        )
    } else {
        format!("Site root: {} (local)", config.output_dir_resolved.display())
    };

    vec![
        format!("Version: {}", or_unset(build_config.effective_version())),
        format!("Language: {}", build_config.effective_language()),
        format!(
            "Canonical: {} / {}",
            or_unset(build_config.effective_canonical_version()),
            build_config.effective_canonical_language()
        ),
        format!("Published versions: {}", list(build_config.published_versions.as_slice())),
        format!("Published languages: {}", list(build_config.published_languages.as_slice())),
        root,
    ]
}

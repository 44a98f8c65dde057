//! `ml context` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use ml_alternates::{BuildConfig, PageRequest, derive_alternate_urls};
use ml_config::{CliSettings, Config};
use rayon::prelude::*;
use serde_json::{Map, Value};

use crate::build_config::build_config_from;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the context command.
#[derive(Args)]
pub(crate) struct ContextArgs {
    /// Logical page names without extension (e.g. `guides/intro`).
    #[arg(required = true)]
    pages: Vec<String>,

    /// Path to configuration file (default: auto-discover multilingual.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Build output directory of the current version and language (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Version being built (overrides config).
    #[arg(long, env = "DOCS_VERSION")]
    doc_version: Option<String>,

    /// Language being built (overrides config).
    #[arg(short, long, env = "DOCS_LANGUAGE")]
    language: Option<String>,

    /// Remote site root (overrides config).
    #[arg(long)]
    project_root: Option<String>,

    /// Resolve URLs against the remote project root.
    #[arg(long)]
    remote: bool,

    /// Resolve URLs against the local output directory.
    #[arg(long, conflicts_with = "remote")]
    local: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ContextArgs {
    /// Execute the context command.
    ///
    /// Prints a JSON object mapping each page name to its rendering context
    /// keys (`canonical`, `alternate_versions`, `alternate_languages`,
    /// `version_display_name`, `language`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            version: self.doc_version.clone(),
            language: self.language.clone(),
            is_remote_build: self.resolve_remote(),
            project_root: self.project_root.clone(),
            output_dir: self.output_dir.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let build_config = build_config_from(&config);

        if self.verbose {
            if let Some(path) = &config.config_path {
                output.info(&format!("Config: {}", path.display()));
            }
            output.info(&format!(
                "Output: {}",
                config.output_dir_resolved.display()
            ));
        }

        let contexts = derive_contexts(&self.pages, &config.output_dir_resolved, &build_config);
        let json = if self.pretty {
            serde_json::to_string_pretty(&contexts)?
        } else {
            serde_json::to_string(&contexts)?
        };
        output.data(&json);

        Ok(())
    }

    /// Resolve `is_remote_build` from --remote/--local flags.
    fn resolve_remote(&self) -> Option<bool> {
        if self.remote {
            Some(true)
        } else if self.local {
            Some(false)
        } else {
            None
        }
    }
}

/// Derive the rendering context of every page, keyed by page name.
///
/// Pages are independent, so they are derived in parallel.
fn derive_contexts(
    pages: &[String],
    output_dir: &Path,
    config: &BuildConfig,
) -> Map<String, Value> {
    let contexts: Vec<(String, Map<String, Value>)> = pages
        .par_iter()
        .map(|page| {
            let request = PageRequest::new(page.as_str(), output_dir);
            let context = derive_alternate_urls(&request, config).to_context();
            (page.clone(), context)
        })
        .collect();

    tracing::debug!(pages = contexts.len(), "Derived page contexts");

    contexts
        .into_iter()
        .map(|(page, context)| (page, Value::Object(context)))
        .collect()
}

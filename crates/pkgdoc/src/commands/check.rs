//! `pkgdoc check` command implementation.

use std::path::PathBuf;

use clap::Args;
use pkgdoc_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;
use crate::registry::registry_from_config;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover pkgdoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Template directory (overrides config).
    #[arg(long, env = "PKGDOC_TEMPLATES")]
    templates: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            templates_dir: self.templates,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let registry = registry_from_config(&config)?;
        Output::stderr().template_set(&config.templates_resolved.dir, &registry.template_names());
        Ok(())
    }
}

//! CLI error types.

use std::path::PathBuf;

use pkgdoc_config::ConfigError;
use pkgdoc_templates::TemplateError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Template(#[from] TemplateError),

    #[error("Invalid package data in {}: {source}", .path.display())]
    Data {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

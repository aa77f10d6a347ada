//! Template error types.

use std::path::PathBuf;

/// Error returned when loading or executing templates fails.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Template directory pattern could not be built.
    #[error("Invalid template pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// Template file could not be listed or read.
    #[error("Failed to read template {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Template source failed to parse.
    #[error("Failed to parse template {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: minijinja::Error,
    },
    /// No template with this name is loaded.
    #[error("Template not found: {0}")]
    NotFound(String),
    /// Template evaluation failed, including helper argument errors.
    #[error("Failed to render template {name}: {source}")]
    Render {
        name: String,
        #[source]
        source: minijinja::Error,
    },
    /// Writing the response body failed.
    #[error("Failed to write response: {0}")]
    Write(#[source] std::io::Error),
}

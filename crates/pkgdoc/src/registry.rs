//! Template registry construction from configuration.

use std::sync::Arc;

use pkgdoc_config::{CommentSyntax, Config};
use pkgdoc_renderer::{CommentMarkup, CommentRenderer, GodocMarkup, MarkdownMarkup};
use pkgdoc_templates::{RegistryConfig, TemplateError, TemplateRegistry, TemplateSource};

/// Comment renderer for the configured syntax and text layout.
pub(crate) fn comment_renderer(config: &Config) -> CommentRenderer {
    let markup: Arc<dyn CommentMarkup> = match config.comments.syntax {
        CommentSyntax::Godoc => Arc::new(GodocMarkup),
        CommentSyntax::Markdown => Arc::new(MarkdownMarkup),
    };
    CommentRenderer::new(markup).with_layout(config.comments.indent, config.comments.width)
}

/// Parse the configured template set.
///
/// Fails on the first unreadable or invalid template so problems surface
/// before anything is rendered.
pub(crate) fn registry_from_config(config: &Config) -> Result<TemplateRegistry, TemplateError> {
    let templates = &config.templates_resolved;
    tracing::info!(
        dir = %templates.dir.display(),
        dev_mode = templates.dev_mode,
        syntax = ?config.comments.syntax,
        "Loading templates"
    );
    let registry_config = RegistryConfig::new(TemplateSource::Dir(templates.dir.clone()))
        .with_dev_mode(templates.dev_mode)
        .with_comments(comment_renderer(config));
    TemplateRegistry::load(registry_config)
}

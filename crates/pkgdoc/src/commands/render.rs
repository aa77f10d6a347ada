//! `pkgdoc render` command implementation.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::Args;
use pkgdoc_config::{CliSettings, CommentSyntax, Config};
use pkgdoc_doc::{DocItem, Package};
use pkgdoc_templates::{BufferedResponse, WriterResponse};

use crate::error::CliError;
use crate::output::Output;
use crate::registry::registry_from_config;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Package documentation JSON produced by the source parser.
    data: PathBuf,

    /// Template to render; its extension selects the content type.
    #[arg(short, long, default_value = "package.html")]
    pub template: String,

    /// Status code reported with the response.
    #[arg(short, long, default_value_t = 200)]
    pub status: u16,

    /// Write the body to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover pkgdoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Template directory (overrides config).
    #[arg(long, env = "PKGDOC_TEMPLATES")]
    templates: Option<PathBuf>,

    /// Re-parse templates on every render.
    #[arg(long)]
    pub dev: bool,

    /// Treat doc comments as CommonMark.
    #[arg(long)]
    markdown: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, template loading, reading the
    /// package data, rendering or writing the output fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::stderr();

        let cli_settings = CliSettings {
            templates_dir: self.templates,
            dev_mode: self.dev.then_some(true),
            comment_syntax: self.markdown.then_some(CommentSyntax::Markdown),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let registry = registry_from_config(&config)?;
        let package = read_package(&self.data)?;
        let item = DocItem::Package(&package);

        let (status, content_type) = if let Some(path) = &self.output {
            let mut response = BufferedResponse::default();
            registry.execute(&mut response, &self.template, self.status, &item)?;
            std::fs::write(path, &response.body)?;
            output.rendered(&self.template, path);
            (response.status, response.content_type)
        } else {
            let mut response = WriterResponse::new(std::io::stdout().lock());
            registry.execute(&mut response, &self.template, self.status, &item)?;
            (response.status, response.content_type)
        };

        if self.verbose {
            output.response_meta(status, content_type);
        }

        Ok(())
    }
}

/// Read package documentation from a JSON file.
pub(crate) fn read_package(path: &Path) -> Result<Package, CliError> {
    let reader = BufReader::new(File::open(path)?);
    serde_json::from_reader(reader).map_err(|source| CliError::Data {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_package() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fmt.json");
        std::fs::write(
            &path,
            r#"{"import_path": "fmt", "name": "fmt", "funcs": [{"name": "Println"}], "extra": 1}"#,
        )
        .unwrap();

        let pkg = read_package(&path).unwrap();

        assert_eq!(pkg.import_path, "fmt");
        assert_eq!(pkg.funcs.len(), 1);
        assert_eq!(pkg.funcs[0].name, "Println");
    }

    #[test]
    fn test_read_package_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{").unwrap();

        let err = read_package(&path).unwrap_err();

        assert!(matches!(err, CliError::Data { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_read_package_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_package(&dir.path().join("none.json")).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}

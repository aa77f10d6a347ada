//! Configuration management for pkgdoc.
//!
//! Parses `pkgdoc.toml` with serde and discovers it in the current
//! directory or its parents. CLI settings are applied during load via
//! [`CliSettings`].
//!
//! ```toml
//! [templates]
//! dir = "${PKGDOC_TEMPLATES:-templates}"
//! dev_mode = false
//!
//! [comments]
//! syntax = "godoc"
//! indent = 4
//! width = 80
//! ```
//!
//! `templates.dir` supports `${VAR}` and `${VAR:-default}` expansion and is
//! resolved relative to the config file.

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "pkgdoc.toml";

const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    pub templates_dir: Option<PathBuf>,
    pub dev_mode: Option<bool>,
    pub comment_syntax: Option<CommentSyntax>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Template section as written in TOML.
    templates: TemplatesConfigRaw,
    /// Doc comment rendering settings.
    pub comments: CommentsConfig,

    /// Resolved template settings (set after loading).
    #[serde(skip)]
    pub templates_resolved: TemplatesConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct TemplatesConfigRaw {
    dir: Option<String>,
    dev_mode: Option<bool>,
}

/// Resolved template settings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TemplatesConfig {
    /// Directory holding `*.html` and `*.txt` templates.
    pub dir: PathBuf,
    /// Re-parse templates on every render.
    pub dev_mode: bool,
}

/// Markup convention used by doc comments.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentSyntax {
    /// Indented blocks are preformatted, headings are bare lines.
    #[default]
    Godoc,
    /// `CommonMark`.
    Markdown,
}

/// Doc comment settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CommentsConfig {
    pub syntax: CommentSyntax,
    /// Columns prefixed to each text-mode line.
    pub indent: usize,
    /// Total text-mode line width, indentation included.
    pub width: usize,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            syntax: CommentSyntax::default(),
            indent: 4,
            width: 80,
        }
    }
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
    EnvVar { field: String, message: String },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `pkgdoc.toml` in the current directory and its parents, falling
    /// back to defaults relative to the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if reading,
    /// parsing, expansion or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(dir) = &settings.templates_dir {
            self.templates_resolved.dir.clone_from(dir);
        }
        if let Some(dev_mode) = settings.dev_mode {
            self.templates_resolved.dev_mode = dev_mode;
        }
        if let Some(syntax) = settings.comment_syntax {
            self.comments.syntax = syntax;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::discover_from(&cwd)
    }

    fn discover_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.is_file())
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            templates: TemplatesConfigRaw::default(),
            comments: CommentsConfig::default(),
            templates_resolved: TemplatesConfig {
                dir: base.join(DEFAULT_TEMPLATES_DIR),
                dev_mode: false,
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.validate()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if `templates.dir` is empty or
    /// `comments.width` leaves no room for text after indentation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.templates.dir.as_deref().is_some_and(str::is_empty) {
            return Err(ConfigError::Validation(
                "templates.dir cannot be empty".to_owned(),
            ));
        }

        let CommentsConfig { indent, width, .. } = self.comments;
        if width <= indent.saturating_mul(2) {
            return Err(ConfigError::Validation(format!(
                "comments.width ({width}) must exceed twice comments.indent ({indent})"
            )));
        }

        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(dir) = &self.templates.dir {
            self.templates.dir = Some(expand::expand_env(dir, "templates.dir")?);
        }
        Ok(())
    }

    fn resolve_paths(&mut self, config_dir: &Path) {
        self.templates_resolved = TemplatesConfig {
            dir: config_dir.join(
                self.templates
                    .dir
                    .as_deref()
                    .unwrap_or(DEFAULT_TEMPLATES_DIR),
            ),
            dev_mode: self.templates.dev_mode.unwrap_or(false),
        };
    }
}

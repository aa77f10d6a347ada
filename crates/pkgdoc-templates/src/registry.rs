//! Parsed template set with bound helpers.

use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use minijinja::{Environment, ErrorKind, context};
use pkgdoc_renderer::{Clock, CommentRenderer, SystemClock};
use serde::Serialize;

use crate::content_type::content_type_for;
use crate::error::TemplateError;
use crate::helpers;
use crate::response::ResponseSink;

/// File extensions picked up from a template directory.
const TEMPLATE_EXTENSIONS: &[&str] = &["html", "txt"];

/// Where template sources come from.
#[derive(Clone, Debug)]
pub enum TemplateSource {
    /// Every `*.html` and `*.txt` file directly inside the directory.
    Dir(PathBuf),
    /// Named sources held in memory.
    Memory(Vec<(String, String)>),
}

/// Registry settings.
#[derive(Clone)]
pub struct RegistryConfig {
    pub source: TemplateSource,
    /// Re-parse the template set on every [`TemplateRegistry::execute`].
    pub dev_mode: bool,
    pub comments: Arc<CommentRenderer>,
    pub clock: Arc<dyn Clock>,
}

impl RegistryConfig {
    /// Config with the default comment renderer and the wall clock.
    #[must_use]
    pub fn new(source: TemplateSource) -> Self {
        Self {
            source,
            dev_mode: false,
            comments: Arc::new(CommentRenderer::default()),
            clock: Arc::new(SystemClock),
        }
    }

    #[must_use]
    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    #[must_use]
    pub fn with_comments(mut self, comments: CommentRenderer) -> Self {
        self.comments = Arc::new(comments);
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }
}

impl fmt::Debug for RegistryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryConfig")
            .field("source", &self.source)
            .field("dev_mode", &self.dev_mode)
            .field("comments", &self.comments)
            .finish_non_exhaustive()
    }
}

/// Named templates ready for rendering.
///
/// The parsed set is shared behind a lock so [`reload`](Self::reload) can
/// swap it while renders hold the previous one.
pub struct TemplateRegistry {
    config: RegistryConfig,
    env: RwLock<Arc<Environment<'static>>>,
}

impl TemplateRegistry {
    /// Parse every template and bind the helpers.
    ///
    /// # Errors
    ///
    /// Returns an error if a template cannot be read or fails to parse.
    pub fn load(config: RegistryConfig) -> Result<Self, TemplateError> {
        let env = build_environment(&config)?;
        tracing::info!(
            templates = env.templates().count(),
            dev_mode = config.dev_mode,
            "Loaded templates"
        );
        Ok(Self {
            config,
            env: RwLock::new(Arc::new(env)),
        })
    }

    /// Re-parse the template set from its source.
    ///
    /// On failure the previously loaded set stays in use.
    ///
    /// # Errors
    ///
    /// Returns an error if a template cannot be read or fails to parse.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn reload(&self) -> Result<(), TemplateError> {
        let env = build_environment(&self.config)?;
        tracing::info!(templates = env.templates().count(), "Reloaded templates");
        *self.env.write().unwrap() = Arc::new(env);
        Ok(())
    }

    /// Names of the loaded templates, sorted.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn template_names(&self) -> Vec<String> {
        let env = self.environment();
        let mut names: Vec<String> = env.templates().map(|(name, _)| name.to_owned()).collect();
        names.sort();
        names
    }

    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Render template `name` with `data` and write it to `sink`.
    ///
    /// Templates see `data` as the top-level variable `data`. The body is
    /// rendered completely before the sink is touched, so a failed render
    /// writes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NotFound`] for an unknown name,
    /// [`TemplateError::Render`] when evaluation or a helper fails, and
    /// [`TemplateError::Write`] when the sink rejects the body. In dev mode
    /// load errors are reported here as well.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn execute<S, T>(
        &self,
        sink: &mut S,
        name: &str,
        status: u16,
        data: &T,
    ) -> Result<(), TemplateError>
    where
        S: ResponseSink + ?Sized,
        T: Serialize + ?Sized,
    {
        let env = if self.config.dev_mode {
            Arc::new(build_environment(&self.config)?)
        } else {
            self.environment()
        };

        let template = env.get_template(name).map_err(|err| match err.kind() {
            ErrorKind::TemplateNotFound => TemplateError::NotFound(name.to_owned()),
            _ => TemplateError::Render {
                name: name.to_owned(),
                source: err,
            },
        })?;
        let body = template.render(context! { data => data }).map_err(|err| {
            tracing::warn!(template = %name, error = %err, "Template render failed");
            TemplateError::Render {
                name: name.to_owned(),
                source: err,
            }
        })?;

        match content_type_for(name) {
            Some(content_type) => sink.set_content_type(content_type),
            None => tracing::debug!(template = %name, "No content type for template"),
        }
        sink.write_status(status);
        sink.write_body(body.as_bytes()).map_err(TemplateError::Write)
    }

    fn environment(&self) -> Arc<Environment<'static>> {
        self.env.read().unwrap().clone()
    }
}

impl fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn build_environment(config: &RegistryConfig) -> Result<Environment<'static>, TemplateError> {
    let mut env = Environment::new();
    helpers::register(
        &mut env,
        Arc::clone(&config.comments),
        Arc::clone(&config.clock),
    );
    for (name, source) in read_sources(&config.source)? {
        tracing::debug!(template = %name, "Parsing template");
        env.add_template_owned(name.clone(), source)
            .map_err(|source| TemplateError::Parse { name, source })?;
    }
    Ok(env)
}

fn read_sources(source: &TemplateSource) -> Result<Vec<(String, String)>, TemplateError> {
    match source {
        TemplateSource::Memory(templates) => Ok(templates.clone()),
        TemplateSource::Dir(dir) => read_dir(dir),
    }
}

fn read_dir(dir: &Path) -> Result<Vec<(String, String)>, TemplateError> {
    if !dir.is_dir() {
        return Err(TemplateError::Read {
            path: dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "template directory not found"),
        });
    }

    let base = glob::Pattern::escape(&dir.to_string_lossy());
    let mut templates = Vec::new();
    for ext in TEMPLATE_EXTENSIONS {
        for entry in glob::glob(&format!("{base}/*.{ext}"))? {
            let path = entry.map_err(|err| TemplateError::Read {
                path: err.path().to_path_buf(),
                source: err.into(),
            })?;
            let Some(name) = path.file_name().and_then(OsStr::to_str) else {
                tracing::warn!(path = %path.display(), "Skipping template with non-UTF-8 name");
                continue;
            };
            let name = name.to_owned();
            let source = fs::read_to_string(&path)
                .map_err(|source| TemplateError::Read { path, source })?;
            templates.push((name, source));
        }
    }
    Ok(templates)
}

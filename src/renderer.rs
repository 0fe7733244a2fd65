//! Template renderer for build-system configuration files.
//! Loads named templates from a directory and renders them with MiniJinja
//! under strict-undefined semantics.
use crate::context::TemplateContext;
use crate::error::{Error, Result};
use minijinja::{Environment, ErrorKind, UndefinedBehavior, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders the named template with the given context.
    ///
    /// # Arguments
    /// * `name` - Template file name, relative to the templates directory
    /// * `context` - Values available to the template
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template text
    fn render(&self, name: &str, context: &TemplateContext) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer reading templates from `templates_dir`.
    ///
    /// # Errors
    /// * `Error::TemplatesDirNotFound` if the directory does not exist
    pub fn new<P: AsRef<Path>>(templates_dir: P) -> Result<Self> {
        let templates_dir = templates_dir.as_ref();
        if !templates_dir.is_dir() {
            return Err(Error::TemplatesDirNotFound {
                templates_dir: templates_dir.display().to_string(),
            });
        }

        let mut env = Environment::new();
        env.set_loader(template_loader(templates_dir.to_path_buf()));
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_function("os", os);
        env.add_function("os_env", os_env);

        Ok(Self { env })
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template from the templates directory.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if:
    ///   - The template does not exist or fails to parse
    ///   - The template references an undefined variable
    fn render(&self, name: &str, context: &TemplateContext) -> Result<String> {
        let tmpl = self.env.get_template(name).map_err(Error::MinijinjaError)?;
        tmpl.render(context).map_err(Error::MinijinjaError)
    }
}

/// Resolves a `/`-separated template name inside `templates_dir`.
///
/// Names with empty, `.` or `..` segments, or with drive or backslash
/// characters, resolve to `None`. Dot files such as `.bazelrc.j2` are allowed.
pub fn template_path(templates_dir: &Path, name: &str) -> Option<PathBuf> {
    let mut path = templates_dir.to_path_buf();
    for segment in name.split('/') {
        if segment.is_empty()
            || segment == "."
            || segment == ".."
            || segment.contains(['\\', ':'])
        {
            return None;
        }
        path.push(segment);
    }
    Some(path)
}

fn template_loader(
    templates_dir: PathBuf,
) -> impl Fn(&str) -> std::result::Result<Option<String>, minijinja::Error> + Send + Sync + 'static
{
    move |name| {
        let Some(path) = template_path(&templates_dir, name) else {
            return Ok(None);
        };
        match fs::read_to_string(&path) {
            Ok(source) => Ok(Some(source)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(minijinja::Error::new(
                ErrorKind::InvalidOperation,
                format!("could not read template '{}'", path.display()),
            )
            .with_source(e)),
        }
    }
}

/// Lower-case operating system name.
///
/// Usage: `{% if os() == "darwin" %}`
pub fn os() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        other => other,
    }
}

/// Reads an environment variable, returning `default` (or none) when unset.
///
/// Usage: `{{ os_env("VCPKG_ROOT", "") }}`
pub fn os_env(name: &str, default: Option<Value>) -> Value {
    match std::env::var(name) {
        Ok(value) => Value::from(value),
        Err(_) => default.unwrap_or_else(|| Value::from(())),
    }
}

//! Output rendering.
//!
//! Renders the decoded credential sequence through a text template: either a
//! file named by configuration or [`DEFAULT_TEMPLATE`], which prints one
//! `docker login` command per credential. The sequence is bound as the
//! `credentials` variable; each element exposes the [`Credential`] field
//! names (`user`, `pass`, `endpoint`, `token`, `expires_at`).

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use minijinja::{context, Environment, UndefinedBehavior};

use crate::credential::Credential;
use crate::error::{EcrLoginError, Result};

/// The built-in template: one `docker login` command line per credential, in
/// input order.
pub const DEFAULT_TEMPLATE: &str = "{% for credential in credentials %}docker login -u {{ credential.user }} -p {{ credential.pass }} -e none {{ credential.endpoint }}\n{% endfor %}";

const TEMPLATE_NAME: &str = "output";

/// Renders credentials through a compiled template.
#[derive(Debug)]
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Build a renderer from an optional template path, falling back to the
    /// built-in default. Reading or parsing the template fails here, before
    /// any output is produced.
    pub fn from_config(template: Option<&Path>) -> Result<Self> {
        match template {
            Some(path) => {
                let source =
                    fs::read_to_string(path).map_err(|e| EcrLoginError::TemplateLoad {
                        path: path.to_path_buf(),
                        message: e.to_string(),
                    })?;
                tracing::debug!("Using template from {}", path.display());
                Self::from_source(source, path.to_path_buf())
            }
            None => Self::from_source(DEFAULT_TEMPLATE.to_owned(), PathBuf::from("<built-in>")),
        }
    }

    /// Compile a template from source. `origin` is used only in load-failure
    /// messages.
    pub fn from_source(source: String, origin: PathBuf) -> Result<Self> {
        let mut env = Environment::new();
        // Referencing a field the credential shape does not have is a
        // template bug; fail the render instead of printing nothing.
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_template_owned(TEMPLATE_NAME, source)
            .map_err(|e| EcrLoginError::TemplateLoad {
                path: origin,
                message: e.to_string(),
            })?;
        Ok(Self { env })
    }

    /// Render the credential sequence to a string.
    pub fn render(&self, credentials: &[Credential]) -> Result<String> {
        let template = self
            .env
            .get_template(TEMPLATE_NAME)
            .map_err(|e| EcrLoginError::TemplateRender {
                message: e.to_string(),
            })?;
        template
            .render(context! { credentials })
            .map_err(|e| EcrLoginError::TemplateRender {
                message: e.to_string(),
            })
    }

    /// Render the credential sequence and write it to the output sink.
    pub fn render_to<W: Write>(&self, credentials: &[Credential], out: &mut W) -> Result<()> {
        let rendered = self.render(credentials)?;
        out.write_all(rendered.as_bytes())?;
        Ok(())
    }
}

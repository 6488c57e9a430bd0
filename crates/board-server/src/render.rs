//! HTML template rendering
//!
//! The template is read and compiled from disk on every render, so edits to
//! the file show up without a restart.

use std::path::{Path, PathBuf};

use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse template: {0}")]
    Parse(#[source] minijinja::Error),

    #[error("failed to apply template: {0}")]
    Apply(#[source] minijinja::Error),
}

#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    path: PathBuf,
}

impl TemplateRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render the template with `context` into a complete document
    pub async fn render<S: Serialize>(&self, context: &S) -> Result<String, RenderError> {
        let source = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| RenderError::Read {
                path: self.path.clone(),
                source,
            })?;

        // The name's extension drives auto-escaping, so keep the file name
        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("board.html");

        let mut env = Environment::new();
        env.add_template(name, &source).map_err(RenderError::Parse)?;
        let template = env.get_template(name).map_err(RenderError::Parse)?;

        template.render(context).map_err(RenderError::Apply)
    }
}

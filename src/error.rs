//! Error types
//!
//! Every failure aborts the run. `ForgeError::kind` gives the stable name the
//! command surface reports to the user.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, rendering or writing a document
#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("input file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("template '{name}' not found (searched: {searched})")]
    TemplateNotFound { name: String, searched: String },

    #[error("template '{name}': {source}")]
    Template {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown document kind '{0}' (expected one of: {kinds})", kinds = crate::kind::DocumentKind::names().join(", "))]
    UnknownKind(String),

    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ForgeError {
    /// Name of the failure kind, as shown to the user
    pub fn kind(&self) -> &'static str {
        match self {
            ForgeError::NotFound { .. } => "NotFoundError",
            ForgeError::Parse { .. } => "ParseError",
            ForgeError::TemplateNotFound { .. } | ForgeError::Template { .. } => "TemplateError",
            ForgeError::Write { .. } => "WriteError",
            ForgeError::UnknownKind(_) => "UnknownKind",
            ForgeError::Config { .. } => "ConfigError",
            ForgeError::Io(_) => "IoError",
        }
    }

    pub(crate) fn template(name: impl Into<String>, source: minijinja::Error) -> Self {
        ForgeError::Template {
            name: name.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ForgeError>;

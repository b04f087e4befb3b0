#![forbid(unsafe_code)]

//! # cvforge
//!
//! Render resume and cover letter data into plaintext or LaTeX documents.
//!
//! ## Pipeline
//!
//! - **Load**: a YAML file becomes a [`DocumentRecord`] keyed by section
//! - **Render**: a [`Renderer`] substitutes the sections a [`DocumentKind`]
//!   needs into its template, defaulting absent sections to empty values
//! - **Write**: the text is written verbatim with [`write_output`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use cvforge::{render_document, write_output, DocumentKind, DocumentRecord, TemplateStore};
//!
//! fn main() -> cvforge::Result<()> {
//!     let record = DocumentRecord::load("resume.yaml")?;
//!     let text = render_document(
//!         DocumentKind::ResumeMinimalist,
//!         &record,
//!         &TemplateStore::builtin(),
//!     )?;
//!     write_output("resume.tex", &text)?;
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod kind;
pub mod output;
pub mod render;
pub mod templates;

// Re-exports
pub use config::Config;
pub use document::{DocumentRecord, Section, SectionShape};
pub use error::{ForgeError, Result};
pub use kind::DocumentKind;
pub use output::write_output;
pub use render::{latex_escape, project, render_document, Dialect, Renderer, RendererConfig};
pub use templates::{TemplateOrigin, TemplateStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

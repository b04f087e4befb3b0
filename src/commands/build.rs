//! Build command: load, render and write one document
//!
//! The kind arrives already parsed, so an unknown kind is rejected by the
//! caller before the config, input or output are touched. The command
//! creates the output directory; the writer itself never does.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::document::DocumentRecord;
use crate::error::ForgeError;
use crate::kind::DocumentKind;
use crate::output::write_output;
use crate::render::Renderer;

/// Options for the build command
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Kind of document to render
    pub kind: DocumentKind,
    /// YAML data file
    pub input: PathBuf,
    /// File name inside the configured output directory
    pub output: PathBuf,
}

/// Execute the build command, returning the path written
pub fn execute_build(options: BuildOptions, config: &Config) -> Result<PathBuf> {
    let kind = options.kind;
    let record = DocumentRecord::load(&options.input)?;
    tracing::debug!(
        "Loaded {} with sections {:?}",
        options.input.display(),
        record.present_sections()
    );

    let renderer = Renderer::for_kind(kind, config.template_store())?;
    let text = renderer.render_kind(kind, &record)?;

    std::fs::create_dir_all(&config.output_dir).map_err(|source| ForgeError::Write {
        path: config.output_dir.clone(),
        source,
    })?;
    let output_path = config.output_path(&options.output);
    write_output(&output_path, &text)?;

    println!(
        "{} {} built successfully: {}",
        style("✓").green(),
        kind.description(),
        style(output_path.display()).green()
    );

    Ok(output_path)
}

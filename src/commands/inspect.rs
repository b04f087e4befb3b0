//! Inspect command: report which sections a data file provides
//!
//! Keys outside the known sections are listed but never rejected. With a
//! kind, absent sections are checked against that kind's section list.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::document::{DocumentRecord, Section};
use crate::kind::DocumentKind;

/// Options for the inspect command
#[derive(Debug, Clone)]
pub struct InspectOptions {
    /// YAML data file
    pub input: PathBuf,
    /// Only report sections used by this kind
    pub kind: Option<String>,
}

/// Execute the inspect command
pub fn execute_inspect(options: InspectOptions) -> Result<()> {
    let sections: &[Section] = match &options.kind {
        Some(name) => name.parse::<DocumentKind>()?.sections(),
        None => &Section::ALL,
    };

    let record = DocumentRecord::load(&options.input)?;
    println!(
        "{} {}",
        style("→").cyan(),
        style(options.input.display()).bold()
    );

    for section in sections {
        match record.get(*section) {
            Some(value) => {
                let detail = match value.as_sequence() {
                    Some(items) => format!("{} entries", items.len()),
                    None => "present".to_string(),
                };
                println!("  {} {:<12} {}", style("✓").green(), section.key(), detail);
            }
            None => println!(
                "  {} {:<12} {}",
                style("·").dim(),
                section.key(),
                style("absent (renders empty)").dim()
            ),
        }
    }

    for key in record.unknown_keys() {
        println!(
            "  {} {:<12} {}",
            style("!").yellow(),
            key,
            style("not a known section, ignored").yellow()
        );
    }

    Ok(())
}

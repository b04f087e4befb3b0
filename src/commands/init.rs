//! Init command: write a default config file

use std::path::PathBuf;

use anyhow::{bail, Result};
use console::style;

use crate::config::Config;

/// Options for the init command
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Config file to create
    pub path: PathBuf,
    /// Overwrite an existing config
    pub force: bool,
    pub templates_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    if options.path.exists() && !options.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            options.path.display()
        );
    }

    let config = Config::default().with_overrides(options.templates_dir, options.output_dir);
    config.save(&options.path)?;

    println!(
        "{} Created {}",
        style("✓").green(),
        options.path.display()
    );
    println!("  Output directory: {}", config.output_dir.display());
    if let Some(dir) = &config.templates_dir {
        println!("  Templates directory: {}", dir.display());
    }

    Ok(())
}

#![forbid(unsafe_code)]
//! cvforge command line interface

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use cvforge::commands::{
    execute_build, execute_init, execute_inspect, execute_kinds, BuildOptions, InitOptions,
    InspectOptions,
};
use cvforge::config::CONFIG_FILE;
use cvforge::{Config, DocumentKind, ForgeError};

#[derive(Parser)]
#[command(name = "cvforge")]
#[command(about = "Render resume and cover letter data into plaintext or LaTeX")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Directory searched for templates before the built-in set
    #[arg(long, global = true, env = "CVFORGE_TEMPLATES")]
    templates: Option<PathBuf>,

    /// Directory documents are written into
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a resume or cover letter
    Build {
        /// Document kind (resume_plaintext, resume_minimalist, resume_two_column, cover_letter)
        kind: String,

        /// YAML file containing resume or cover letter data
        input: PathBuf,

        /// File name of the rendered document inside the output directory
        output: PathBuf,
    },

    /// List document kinds and the templates they use
    Kinds,

    /// Show which sections a data file provides
    Inspect {
        /// YAML data file
        input: PathBuf,

        /// Only report sections used by this document kind
        #[arg(long)]
        kind: Option<String>,
    },

    /// Create a config file with default settings
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "cvforge=debug" } else { "cvforge=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(
    path: &Path,
    templates: Option<PathBuf>,
    output_dir: Option<PathBuf>,
) -> anyhow::Result<Config> {
    Ok(Config::load_or_default(path)?.with_overrides(templates, output_dir))
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Build { kind, input, output } => {
            // Unknown kinds fail before the config or any input is read
            let kind: DocumentKind = kind.parse()?;
            let config = load_config(&cli.config, cli.templates, cli.output_dir)?;
            let options = BuildOptions { kind, input, output };
            execute_build(options, &config)?;
        }

        Commands::Kinds => {
            let config = load_config(&cli.config, cli.templates, cli.output_dir)?;
            execute_kinds(&config)?;
        }

        Commands::Inspect { input, kind } => {
            let options = InspectOptions { input, kind };
            execute_inspect(options)?;
        }

        Commands::Init { force } => {
            let options = InitOptions {
                path: cli.config,
                force,
                templates_dir: cli.templates,
                output_dir: cli.output_dir,
            };
            execute_init(options)?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        let kind = err
            .downcast_ref::<ForgeError>()
            .map(ForgeError::kind)
            .unwrap_or("Error");
        eprintln!("{} {}: {}", style("✗").red(), style(kind).red().bold(), err);
        std::process::exit(1);
    }
}

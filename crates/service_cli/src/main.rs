//! Datagen CLI - Command Line Front End for Value Generators
//!
//! # Commands
//!
//! - `datagen position` - Generate bounded longitude/latitude pairs
//! - `datagen check` - Show the resolved configuration and a sample value
//!
//! Generated data goes to stdout (or `--output`); logs go to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use datagen_generators::{Coordinate, Encoding};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// Datagen value generator CLI
#[derive(Parser)]
#[command(name = "datagen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "datagen.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random coordinates inside a bounding box
    Position {
        /// North-west corner as LON,LAT
        #[arg(long, allow_hyphen_values = true)]
        top_left: Option<Coordinate>,

        /// South-east corner as LON,LAT
        #[arg(long, allow_hyphen_values = true)]
        bottom_right: Option<Coordinate>,

        /// Number of values to generate
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Base seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Worker threads
        #[arg(short, long)]
        workers: Option<usize>,

        /// Output format (text, binary)
        #[arg(short, long)]
        format: Option<Encoding>,

        /// Output file; stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check configuration and print one sample value
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = config::DatagenConfig::load_or_default(&cli.config)?.with_env_override()?;

    match cli.command {
        Commands::Position {
            top_left,
            bottom_right,
            count,
            seed,
            workers,
            format,
            output,
        } => {
            let overrides = commands::position::Overrides {
                top_left,
                bottom_right,
                count,
                seed,
                workers,
                format,
            };
            commands::position::run(config, overrides, output.as_deref())
        }
        Commands::Check => commands::check::run(&config),
    }
}

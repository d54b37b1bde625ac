//! jpegify - batch-convert WebP and AVIF images to JPEG.
//!
//! Drop images into the `input` folder next to the executable, run
//! `jpegify`, pick a worker count, and collect the JPEGs from `output`.
//!
//! # Usage
//!
//! ```bash
//! # Interactive run against <exe_dir>/input and <exe_dir>/output
//! jpegify
//!
//! # Scripted run with explicit folders
//! jpegify convert --input ./webp --output ./jpg --workers 4 --no-pause
//!
//! # View configuration
//! jpegify config show
//! ```

use clap::{Parser, Subcommand};
use std::process::ExitCode;

mod cli;
mod logging;

/// jpegify - batch-convert WebP and AVIF images to JPEG.
#[derive(Parser, Debug)]
#[command(name = "jpegify")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Convert options when no subcommand is given
    #[command(flatten)]
    convert: cli::convert::ConvertArgs,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert every WebP/AVIF image in the input folder (default)
    Convert(cli::convert::ConvertArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so config warnings go through eprintln.
    let config = match jpegify_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `jpegify config path`."
            );
            jpegify_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("jpegify v{}", jpegify_core::VERSION);

    match cli.command {
        Some(Commands::Convert(args)) => cli::convert::execute(args, config).await,
        Some(Commands::Config(args)) => {
            cli::config::execute(args, &config)?;
            Ok(ExitCode::SUCCESS)
        }
        None => cli::convert::execute(cli.convert, config).await,
    }
}

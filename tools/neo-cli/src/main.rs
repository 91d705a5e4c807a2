//! neocart - converts arcade ROM archives into `.neo` cartridge images
//!
//! # Commands
//!
//! - `neocart convert` - Convert one or more ROM archives (or unpacked directories)
//! - `neocart batch` - Convert every `.zip` archive found in a directory
//! - `neocart info` - Show the header of an existing `.neo` image
//!
//! # Usage
//!
//! ```bash
//! # Convert a single set into ./out/kof98.neo
//! neocart convert roms/kof98.zip -o out
//!
//! # Convert a whole ROM folder with 4 worker threads
//! neocart batch roms -o out --jobs 4
//!
//! # Inspect the result
//! neocart info out/kof98.neo
//! ```
//!
//! # Config (neocart.toml)
//!
//! ```toml
//! [convert]
//! output_dir = "out"
//! year = 1998
//! exclude = [".html", ".txt"]
//! overwrite = false
//! ```

mod batch;
mod config;
mod convert;
mod info;
mod pipeline;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// neocart - arcade ROM archive to .neo converter
#[derive(Parser)]
#[command(name = "neocart")]
#[command(about = "Convert arcade ROM archives into .neo cartridge images")]
#[command(version)]
struct Cli {
    /// Path to a neocart.toml config file (defaults to ./neocart.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (per-file logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert ROM archives or unpacked ROM directories
    Convert(convert::ConvertArgs),

    /// Convert every ROM archive in a directory
    Batch(batch::BatchArgs),

    /// Display the header of a .neo image
    Info(info::InfoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Convert(args) => {
            let config = config::NeocartConfig::discover(cli.config.as_deref())?;
            convert::execute(args, &config)
        }
        Commands::Batch(args) => {
            let config = config::NeocartConfig::discover(cli.config.as_deref())?;
            batch::execute(args, &config)
        }
        Commands::Info(args) => info::execute(args),
    }
}

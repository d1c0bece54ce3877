//! Terminal shell for The Sardine's Secret.

mod commands;
mod error;
mod render;
mod shell;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sardine",
    about = "The Sardine's Secret — consult the fortune-telling fish",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sit down at the table of tins (interactive)
    Play {
        /// RNG seed for reproducible readings (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON file with custom fortunes
        #[arg(short, long)]
        fortunes: Option<PathBuf>,

        /// Skip the dramatic pauses
        #[arg(long)]
        fast: bool,
    },

    /// Draw fortunes straight from the pool
    Draw {
        /// Number of fortunes to draw
        #[arg(short, long, default_value = "12")]
        count: usize,

        /// RNG seed for reproducible draws (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON file with custom fortunes
        #[arg(short, long)]
        fortunes: Option<PathBuf>,
    },

    /// List every fortune the fish know
    Fortunes {
        /// JSON file with custom fortunes
        #[arg(short, long)]
        fortunes: Option<PathBuf>,
    },

    /// Read about the sardines
    Almanac {
        /// Show the sardine stories instead of the facts
        #[arg(long)]
        stories: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            seed,
            fortunes,
            fast,
        } => commands::play::run(fortunes.as_deref(), seed, fast),
        Commands::Draw {
            count,
            seed,
            fortunes,
        } => commands::draw::run(fortunes.as_deref(), count, seed),
        Commands::Fortunes { fortunes } => commands::fortunes::run(fortunes.as_deref()),
        Commands::Almanac { stories } => commands::almanac::run(stories),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

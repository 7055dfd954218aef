//! CLI frontend for the Zauberwerk world simulation.

mod campus;
mod commands;
mod console;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "zw",
    about = "Zauberwerk — a clockwork text-world simulation",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the campus headless and print a report
    Simulate {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "24")]
        ticks: u64,

        /// RNG seed for a deterministic run
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Stream every announcement as it happens
        #[arg(short, long)]
        verbose: bool,
    },

    /// Explore the campus interactively as the avatar
    Play {
        /// RNG seed for a deterministic world
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Name of your avatar
        #[arg(short, long, default_value = "Wanderer")]
        name: String,

        /// See announcements from everywhere, not just your room
        #[arg(long)]
        omniscient: bool,
    },

    /// Export the freshly built campus world as JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            ticks,
            seed,
            verbose,
        } => commands::simulate::run(ticks, seed, verbose),
        Commands::Play {
            seed,
            name,
            omniscient,
        } => commands::play::run(seed, &name, omniscient),
        Commands::Export { output } => commands::export::run(output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

//! Duchess CLI - Command-line interface
//!
//! Commands:
//! - tables: Emit the position <-> index lookup tables
//! - lookup: Convert a single position or index

mod config;
mod lookup_cmd;
mod tables_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lookup_cmd::LookupArgs;
use tables_cmd::TablesArgs;

#[derive(Parser)]
#[command(name = "duchess")]
#[command(about = "Six-player Duchess board coordinate tables")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a lookup table for engine sources
    Tables(TablesArgs),
    /// Convert a position to its index, or an index to its position
    Lookup(LookupArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout only carries table data
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tables(args) => tables_cmd::run(args),
        Commands::Lookup(args) => lookup_cmd::run(args),
    }
}

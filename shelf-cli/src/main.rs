//! Shelf CLI - Command-line reading tracker

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session over a library
    Shell {
        /// Start with an empty library instead of the sample books
        #[arg(long)]
        empty: bool,
    },

    /// List the books in a fresh library
    List {
        /// Start with an empty library instead of the sample books
        #[arg(long)]
        empty: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Walk through adding, toggling and removing books
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "shelf_cli=debug,shelf_core=debug"
    } else {
        "shelf_cli=info,shelf_core=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Shell { empty } => commands::shell(empty),

        Commands::List { empty, json } => commands::list(empty, json),

        Commands::Demo => commands::demo(),
    }
}

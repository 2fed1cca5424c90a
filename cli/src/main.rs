//! Kevinify CLI - Command-line interface for the kevin path code.
//!
//! This is the main entry point for the `kevinify` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{CountCommand, DecodeCommand, EncodeCommand, TableCommand, TreeCommand};

#[derive(Parser)]
#[command(name = "kevinify")]
#[command(about = "Rewrite text using only the letters k, e, v, i and n", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text into kevin paths
    Encode(EncodeCommand),
    /// Decode kevin paths back to text
    Decode(DecodeCommand),
    /// Print the symbol -> path table
    Table(TableCommand),
    /// Print the structure of the code tree
    Tree(TreeCommand),
    /// Build a frequency table by counting characters in a text file
    Count(CountCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Decode(cmd) => commands::decode::run(cmd)?,
        Commands::Table(cmd) => commands::table::run(cmd)?,
        Commands::Tree(cmd) => commands::tree::run(cmd)?,
        Commands::Count(cmd) => commands::count::run(cmd)?,
    }

    Ok(())
}

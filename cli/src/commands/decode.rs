//! Decode command implementation.

use clap::Parser;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    #[command(flatten)]
    pub tree: super::TreeArgs,

    /// Coded text to decode ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<String>,
}

use anyhow::{Context, Result as AnyhowResult};

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    let kevinifier = cmd.tree.kevinifier()?;
    let code = super::read_input(&cmd.input)?;

    let text = kevinifier
        .decode(&code)
        .context("input was not produced by this frequency table")?;

    super::write_output(&text, cmd.output.as_deref(), "Decoded")
}

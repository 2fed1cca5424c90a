//! Encode command implementation.

use clap::Parser;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    #[command(flatten)]
    pub tree: super::TreeArgs,

    /// Text to encode ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<String>,
}

use anyhow::Result as AnyhowResult;

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let kevinifier = cmd.tree.kevinifier()?;
    let text = super::read_input(&cmd.input)?;

    let coded = kevinifier.encode(&text);

    super::write_output(&coded, cmd.output.as_deref(), "Encoded")
}

//! Table command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Table command arguments.
#[derive(Parser)]
pub struct TableCommand {
    #[command(flatten)]
    pub tree: super::TreeArgs,

    /// Print the table as JSON
    #[arg(short, long, default_value_t = false)]
    pub json: bool,

    /// Save the table as JSON to this file instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

use anyhow::Result as AnyhowResult;
use kevinify::TableSaver;

pub fn run(cmd: TableCommand) -> AnyhowResult<()> {
    let kevinifier = cmd.tree.kevinifier()?;
    let table = kevinifier.table();

    if let Some(path) = &cmd.output {
        TableSaver::save_paths(table, path)?;
        eprintln!("Wrote {} paths to {}", table.len(), path.display());
        return Ok(());
    }

    if cmd.json {
        let serialized = TableSaver::serialize_paths(table);
        println!("{}", serde_json::to_string_pretty(&serialized)?);
        return Ok(());
    }

    for (symbol, path) in table.sorted_entries() {
        let shown = if path.is_empty() { "(empty)" } else { path };
        println!("{:?}\t{}", symbol, shown);
    }

    Ok(())
}

//! Tree command implementation.

use clap::Parser;

/// Tree command arguments.
#[derive(Parser)]
pub struct TreeCommand {
    #[command(flatten)]
    pub tree: super::TreeArgs,

    /// Print only the summary statistics
    #[arg(short, long, default_value_t = false)]
    pub stats: bool,
}

use anyhow::Result as AnyhowResult;

pub fn run(cmd: TreeCommand) -> AnyhowResult<()> {
    let kevinifier = cmd.tree.kevinifier()?;

    if !cmd.stats {
        print!("{}", kevinifier.render_tree());
        println!();
    }

    let stats = kevinifier.tree().stats();
    println!("Symbols:        {}", stats.symbols);
    println!("Internal nodes: {}", stats.internal_nodes);
    println!("Partial groups: {}", stats.partial_groups);
    println!("Depth:          {}", stats.depth);

    Ok(())
}

//! Count command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Count command arguments.
#[derive(Parser)]
pub struct CountCommand {
    /// Path to the text sample to count
    #[arg(short, long)]
    pub input: PathBuf,

    /// Where to write the JSON frequency table
    #[arg(short, long, default_value = "freqs.json")]
    pub output: PathBuf,

    /// Count upper and lower case separately
    #[arg(long, default_value_t = false)]
    pub keep_case: bool,

    /// Count every character, not just letters
    #[arg(long, default_value_t = false)]
    pub all_chars: bool,
}

use anyhow::{bail, Result as AnyhowResult};
use kevinify::{CountConfig, FrequencyLoader, TableSaver};

pub fn run(cmd: CountCommand) -> AnyhowResult<()> {
    let config = CountConfig {
        lowercase: !cmd.keep_case,
        letters_only: !cmd.all_chars,
    };

    let table = FrequencyLoader::count_file(&cmd.input, &config)?;
    if table.is_empty() {
        bail!("no symbols found in {}", cmd.input.display());
    }

    TableSaver::save_frequencies(&table, &cmd.output)?;
    eprintln!(
        "Counted {} symbols ({} occurrences) into {}",
        table.len(),
        table.total_weight(),
        cmd.output.display()
    );

    Ok(())
}

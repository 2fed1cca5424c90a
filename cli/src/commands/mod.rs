//! CLI commands for the kevinify tool.

pub mod count;
pub mod decode;
pub mod encode;
pub mod table;
pub mod tree;

pub use count::CountCommand;
pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use table::TableCommand;
pub use tree::TreeCommand;

use anyhow::{Context, Result as AnyhowResult};
use clap::Args;
use kevinify::{Kevinifier, KevinifierConfig};
use std::io::Read;
use std::path::PathBuf;

/// Arguments shared by every command that needs a code tree.
#[derive(Args)]
pub struct TreeArgs {
    /// Path to the JSON frequency table
    #[arg(short, long, default_value = "freqs.json")]
    pub freqs: PathBuf,

    /// Arity of the priority queue used to build the tree
    #[arg(long, default_value_t = KevinifierConfig::default().heap_arity)]
    pub arity: usize,
}

impl TreeArgs {
    /// Load the frequency table and build the kevinifier.
    pub fn kevinifier(&self) -> AnyhowResult<Kevinifier> {
        let frequencies = kevinify::FrequencyLoader::load(&self.freqs)
            .with_context(|| format!("loading {}", self.freqs.display()))?;
        let kevinifier = Kevinifier::builder()
            .heap_arity(self.arity)
            .build(&frequencies)?;
        Ok(kevinifier)
    }
}

/// Return `input`, or the contents of stdin if it is "-".
///
/// A single trailing line break is dropped from stdin input.
pub fn read_input(input: &str) -> AnyhowResult<String> {
    if input != "-" {
        return Ok(input.to_string());
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    Ok(buffer)
}

/// Write `text` to `output`, or to stdout if no path is given.
pub fn write_output(text: &str, output: Option<&str>, verb: &str) -> AnyhowResult<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text).with_context(|| format!("writing {}", path))?;
            eprintln!("{} {} characters to {}", verb, text.chars().count(), path);
        }
        None => println!("{}", text),
    }
    Ok(())
}

pub mod close;
pub mod compare;
pub mod plates;

use std::io::IsTerminal;

use anyhow::Result;
use clap::Subcommand;
use seqmatch_utils::color::{self, ColorConfig, ColorMode};

use crate::Cli;

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two strings and report similarity and alignment
    Compare(compare::CompareArgs),
    /// Run the generated license-plate regression harness
    Plates(plates::PlatesArgs),
    /// Find the candidates most similar to a word
    Close(close::CloseArgs),
}

pub fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::Compare(args) => compare::run(args, &cli),
        Commands::Plates(args) => plates::run(args, &cli),
        Commands::Close(args) => close::run(args, &cli),
    }
}

/// Whether stdout output should be colored for this invocation.
pub(crate) fn color_enabled(cli: &Cli) -> bool {
    color::use_color(ColorMode::from(cli.global.color), std::io::stdout().is_terminal())
}

/// Color overrides from `SEQMATCH_COLOR_<SLOT>` environment variables,
/// e.g. `SEQMATCH_COLOR_MATCH="bold #00FFCC"`.
pub(crate) fn load_color_config() -> ColorConfig {
    ColorConfig::from_config(|key| std::env::var(env_key(key)).ok())
}

fn env_key(key: &str) -> String {
    format!("SEQMATCH_{}", key.replace('.', "_").to_uppercase())
}

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;
use seqmatch_core::close_matches;
use seqmatch_utils::color::ColorSlot;

use super::{color_enabled, load_color_config};
use crate::Cli;

#[derive(Args)]
pub struct CloseArgs {
    /// Word to look up
    word: String,

    /// Candidate strings
    #[arg(required = true)]
    candidates: Vec<String>,

    /// Maximum number of matches to print
    #[arg(short = 'n', default_value_t = 3)]
    count: usize,

    /// Minimum similarity in [0, 1]
    #[arg(long, default_value_t = 0.6)]
    cutoff: f64,
}

pub fn run(args: &CloseArgs, cli: &Cli) -> Result<i32> {
    let matches = close_matches(&args.word, &args.candidates, args.count, args.cutoff)
        .with_context(|| format!("cannot look up '{}'", args.word))?;

    if matches.is_empty() {
        return Ok(1);
    }
    if cli.global.quiet {
        return Ok(0);
    }

    let cc = load_color_config();
    let color = color_enabled(cli);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for m in &matches {
        let score = format!("{:.2}%", m.score * 100.0);
        writeln!(out, "{}\t{}", m.candidate, cc.paint(&score, ColorSlot::Value, color))?;
    }
    out.flush()?;

    Ok(0)
}

use std::io::{self, Write};

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use seqmatch_core::MatcherOptions;
use seqmatch_utils::color::{ColorConfig, ColorSlot};
use tracing::debug;

use super::{color_enabled, load_color_config};
use crate::plate::{self, Status, Tally, Trial, TrialKind};
use crate::Cli;

#[derive(Args)]
pub struct PlatesArgs {
    /// Number of trials; half compare each plate with itself, half with a mutation
    #[arg(long, default_value_t = 1000)]
    trials: usize,

    /// Seed for plate generation (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Probability that a mutation leaves the plate unchanged
    #[arg(long, default_value_t = 0.05)]
    failure_chance: f64,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonRun<'t> {
    seed: u64,
    tally: Tally,
    detection_rate: f64,
    trials: &'t [Trial],
}

pub fn run(args: &PlatesArgs, cli: &Cli) -> Result<i32> {
    if !(0.0..=1.0).contains(&args.failure_chance) {
        bail!(
            "--failure-chance must be between 0 and 1, got {}",
            args.failure_chance
        );
    }

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let trials = run_harness(args.trials / 2, seed, args.failure_chance)?;
    let tally = Tally::from_trials(&trials);
    let invalid = trials.iter().filter(|t| t.kind == TrialKind::Invalid).count();
    debug!(seed, ?tally, "plate harness finished");

    let code = if tally.failed == 0 { 0 } else { 1 };
    if cli.global.quiet {
        return Ok(code);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Json => {
            let report = JsonRun {
                seed,
                tally,
                detection_rate: tally.detection_rate(invalid),
                trials: &trials,
            };
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            let cc = load_color_config();
            let color = color_enabled(cli);
            writeln!(out, "Running automated license plate tests (seed {seed})...")?;
            writeln!(out)?;
            for trial in &trials {
                if cli.global.verbose || trial.status == Status::Failed {
                    writeln!(out, "{}", trial_line(trial, &cc, color))?;
                }
            }
            write_summary(&mut out, &tally, tally.detection_rate(invalid))?;
        }
    }
    out.flush()?;

    Ok(code)
}

/// Generate `plates` plates from `seed` and run both trials for each.
///
/// Generation is sequential so a seed always yields the same plates;
/// the comparisons themselves run in parallel.
fn run_harness(plates: usize, seed: u64, failure_chance: f64) -> Result<Vec<Trial>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let pairs: Vec<(String, String)> = (0..plates)
        .map(|_| {
            let valid = plate::random_plate(&mut rng);
            let invalid = plate::mutate(&valid, &mut rng, failure_chance);
            (valid, invalid)
        })
        .collect();

    let options = MatcherOptions::default();
    let results = pairs
        .par_iter()
        .map(|(valid, invalid)| plate::run_pair(valid, invalid, &options))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(results.into_iter().flatten().collect())
}

fn trial_line(trial: &Trial, cc: &ColorConfig, color: bool) -> String {
    let (label, slot) = match trial.status {
        Status::Passed => ("PASSED", ColorSlot::AlignMatch),
        Status::Failed => ("FAILED", ColorSlot::AlignMismatch),
        Status::Collision => ("COLLISION", ColorSlot::Value),
    };
    let name = match trial.kind {
        TrialKind::Valid => format!("valid[{}]", trial.expected),
        TrialKind::Invalid => format!("invalid[{}-{}]", trial.expected, trial.actual),
    };
    format!(
        "{name} {} ({:.2}%)",
        cc.paint(label, slot, color),
        trial.similarity
    )
}

fn write_summary(out: &mut impl Write, tally: &Tally, detection_rate: f64) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "=== SUMMARY ===")?;
    writeln!(out, "Total tests executed: {}", tally.total)?;
    writeln!(out, "Passed: {}", tally.passed)?;
    writeln!(out, "Failed: {}", tally.failed)?;
    writeln!(out, "Collisions (accepted): {}", tally.collisions)?;
    writeln!(out, "Mutations detected: {:.2}%", detection_rate * 100.0)?;
    if tally.failed == 0 {
        writeln!(out, "All tests passed")?;
    } else {
        writeln!(out, "Some tests failed (see output above)")?;
    }
    writeln!(out, "===============")?;
    Ok(())
}

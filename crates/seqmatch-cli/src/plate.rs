//! License-plate generation and trial evaluation for the regression harness.
//!
//! A plate is two letters, two digits, two letters and a number in
//! `1..=9999`, e.g. `MH12AB1234`.

use rand::Rng;
use seqmatch_core::{compare_str, AlignError, MatcherOptions};
use serde::Serialize;
use tracing::warn;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn pick<R: Rng>(rng: &mut R, set: &[u8]) -> char {
    char::from(set[rng.random_range(0..set.len())])
}

/// Generate a random well-formed plate.
pub fn random_plate<R: Rng>(rng: &mut R) -> String {
    let mut plate = String::with_capacity(10);
    for set in [LETTERS, LETTERS, DIGITS, DIGITS, LETTERS, LETTERS] {
        plate.push(pick(rng, set));
    }
    plate.push_str(&rng.random_range(1..=9999u32).to_string());
    plate
}

/// Change one position of `plate` to a different alphanumeric character.
///
/// With probability `failure_chance` the plate is returned unchanged.
pub fn mutate<R: Rng>(plate: &str, rng: &mut R, failure_chance: f64) -> String {
    if plate.is_empty() || rng.random_bool(failure_chance) {
        return plate.to_string();
    }
    let mut chars: Vec<char> = plate.chars().collect();
    let idx = rng.random_range(0..chars.len());
    loop {
        let c = pick(rng, ALPHANUMERIC);
        if c != chars[idx] {
            chars[idx] = c;
            break;
        }
    }
    chars.into_iter().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrialKind {
    /// A plate compared against itself.
    Valid,
    /// A plate compared against its mutation.
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Passed,
    Failed,
    /// The mutation left the plate unchanged.
    Collision,
}

#[derive(Debug, Clone, Serialize)]
pub struct Trial {
    pub kind: TrialKind,
    pub expected: String,
    pub actual: String,
    pub similarity: f64,
    pub status: Status,
}

impl Trial {
    fn new(
        kind: TrialKind,
        expected: &str,
        actual: &str,
        options: &MatcherOptions,
    ) -> Result<Self, AlignError> {
        let similarity = compare_str(expected, actual, options)?.percentage();
        let status = match kind {
            TrialKind::Valid if similarity == 100.0 => Status::Passed,
            TrialKind::Invalid if expected == actual => Status::Collision,
            TrialKind::Invalid if similarity < 100.0 => Status::Passed,
            _ => Status::Failed,
        };
        if status == Status::Failed {
            warn!(?kind, expected, actual, similarity, "plate trial failed");
        }
        Ok(Self {
            kind,
            expected: expected.to_string(),
            actual: actual.to_string(),
            similarity,
            status,
        })
    }
}

/// Run both trials for one plate and its mutation.
pub fn run_pair(
    plate: &str,
    mutated: &str,
    options: &MatcherOptions,
) -> Result<[Trial; 2], AlignError> {
    Ok([
        Trial::new(TrialKind::Valid, plate, plate, options)?,
        Trial::new(TrialKind::Invalid, plate, mutated, options)?,
    ])
}

/// Aggregate counts over a harness run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub collisions: usize,
}

impl Tally {
    pub fn from_trials<'t>(trials: impl IntoIterator<Item = &'t Trial>) -> Self {
        let mut tally = Tally::default();
        for trial in trials {
            tally.total += 1;
            match trial.status {
                Status::Passed => tally.passed += 1,
                Status::Failed => tally.failed += 1,
                Status::Collision => tally.collisions += 1,
            }
        }
        tally
    }

    /// Share of invalid trials detected as different, in `[0, 1]`.
    pub fn detection_rate(&self, invalid_trials: usize) -> f64 {
        if invalid_trials == 0 {
            return 1.0;
        }
        let detected = invalid_trials.saturating_sub(self.collisions + self.failed);
        detected as f64 / invalid_trials as f64
    }
}

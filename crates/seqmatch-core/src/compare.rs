//! One-shot comparison entry points.

use std::hash::Hash;

use serde::Serialize;

use crate::{Match, MatcherOptions, NoisePredicate, Opcode, Result, SequenceMatcher};

/// Everything a single comparison produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Similarity in `[0, 1]`.
    pub ratio: f64,
    /// Matching blocks, terminated by the zero-length sentinel.
    pub blocks: Vec<Match>,
    pub opcodes: Vec<Opcode>,
}

impl Comparison {
    /// The ratio scaled to `[0, 100]`.
    pub fn percentage(&self) -> f64 {
        self.ratio * 100.0
    }

    /// True when every position of both sequences is matched.
    pub fn is_identical(&self) -> bool {
        self.opcodes.iter().all(|op| op.tag == crate::Tag::Equal)
    }

    /// Total number of matched symbols.
    pub fn matched_len(&self) -> usize {
        crate::ratio::matched_len(&self.blocks)
    }
}

/// Compare `a` against `b`.
pub fn compare<T: Eq + Hash>(a: &[T], b: &[T], options: &MatcherOptions) -> Result<Comparison> {
    run(SequenceMatcher::with_options(a, b, None, *options))
}

/// Compare `a` against `b`, treating symbols of `b` matching `is_noise` as noise.
pub fn compare_with_noise<T: Eq + Hash>(
    a: &[T],
    b: &[T],
    is_noise: NoisePredicate<'_, T>,
    options: &MatcherOptions,
) -> Result<Comparison> {
    run(SequenceMatcher::with_options(a, b, Some(is_noise), *options))
}

/// Compare two strings character by character.
pub fn compare_str(a: &str, b: &str, options: &MatcherOptions) -> Result<Comparison> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    compare(&a, &b, options)
}

fn run<T: Eq + Hash>(mut matcher: SequenceMatcher<'_, T>) -> Result<Comparison> {
    let blocks = matcher.matching_blocks()?.to_vec();
    let opcodes = matcher.opcodes()?.to_vec();
    let ratio = crate::ratio::ratio(&blocks, matcher.a().len(), matcher.b().len());
    Ok(Comparison {
        ratio,
        blocks,
        opcodes,
    })
}

//! Sequence alignment engine: matching blocks, edit scripts, similarity ratios.
//!
//! Compares two sequences of hashable symbols by recursively finding the
//! longest common contiguous run, then derives an opcode edit script,
//! a normalized similarity ratio, and a three-row alignment rendering
//! with a per-column match/mismatch classification.

pub mod algorithm;
pub mod close;
pub mod color;
pub mod compare;
pub mod matcher;
pub mod opcodes;
pub mod ratio;
pub mod render;

use serde::{Deserialize, Serialize};

pub use close::{close_matches, CloseMatch};
pub use compare::{compare, compare_str, compare_with_noise, Comparison};
pub use matcher::SequenceMatcher;
pub use render::{render, AlignmentRender, Cell, Class, ReportLine, Summary};

pub type Result<T> = std::result::Result<T, AlignError>;

/// Caller-supplied predicate marking symbols of the target sequence as noise.
///
/// Noise symbols never seed a match but may extend one at its edges.
pub type NoisePredicate<'p, T> = &'p dyn Fn(&T) -> bool;

/// Options controlling index construction and match extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherOptions {
    /// Drop "popular" symbols from the index for long target sequences.
    ///
    /// Popular symbols never seed a match. When every shared symbol is
    /// popular the ratio is `0.0` even though the sequences overlap.
    pub autojunk: bool,
    /// Minimum occurrence count before a symbol can be considered popular (default 100).
    pub popular_floor: usize,
    /// Target sequence length at which the popularity filter activates (default 200).
    pub popular_min_len: usize,
    /// Grow the longest match over equal noise symbols on both sides.
    pub extend_with_noise: bool,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            autojunk: true,
            popular_floor: 100,
            popular_min_len: 200,
            extend_with_noise: true,
        }
    }
}

/// A matching block: `a[a..a + size] == b[b..b + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    /// Start offset in the first sequence.
    pub a: usize,
    /// Start offset in the second sequence.
    pub b: usize,
    /// Length of the run.
    pub size: usize,
}

impl Match {
    pub fn new(a: usize, b: usize, size: usize) -> Self {
        Self { a, b, size }
    }

    /// One past the last matched position in the first sequence.
    pub fn a_end(&self) -> usize {
        self.a + self.size
    }

    /// One past the last matched position in the second sequence.
    pub fn b_end(&self) -> usize {
        self.b + self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

/// The kind of an edit-script span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// `a[a_start..a_end] == b[b_start..b_end]`.
    Equal,
    /// `a[a_start..a_end]` should be replaced by `b[b_start..b_end]`.
    Replace,
    /// `a[a_start..a_end]` should be deleted (`b_start == b_end`).
    Delete,
    /// `b[b_start..b_end]` should be inserted (`a_start == a_end`).
    Insert,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Replace => "replace",
            Self::Delete => "delete",
            Self::Insert => "insert",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One labeled span of the edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Opcode {
    pub tag: Tag,
    pub a_start: usize,
    pub a_end: usize,
    pub b_start: usize,
    pub b_end: usize,
}

impl Opcode {
    pub fn new(tag: Tag, a_start: usize, a_end: usize, b_start: usize, b_end: usize) -> Self {
        Self {
            tag,
            a_start,
            a_end,
            b_start,
            b_end,
        }
    }

    /// Span covered in the first sequence.
    pub fn a_range(&self) -> std::ops::Range<usize> {
        self.a_start..self.a_end
    }

    /// Span covered in the second sequence.
    pub fn b_range(&self) -> std::ops::Range<usize> {
        self.b_start..self.b_end
    }
}

/// Error types for alignment operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlignError {
    #[error(
        "invalid range a[{alo}..{ahi}] b[{blo}..{bhi}] for sequences of length {len_a} and {len_b}"
    )]
    InvalidRange {
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
        len_a: usize,
        len_b: usize,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

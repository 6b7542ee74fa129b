//! Best-match lookup of a word among candidate strings.

use serde::Serialize;

use crate::{AlignError, Result, SequenceMatcher};

/// A candidate scored against the lookup word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloseMatch<'p> {
    pub candidate: &'p str,
    pub score: f64,
}

/// Return up to `n` candidates whose similarity to `word` is at least `cutoff`.
///
/// Results are ordered by score, best first; equal scores keep the order of
/// `possibilities`. The word is indexed once and reused for every candidate.
pub fn close_matches<'p, S: AsRef<str>>(
    word: &str,
    possibilities: &'p [S],
    n: usize,
    cutoff: f64,
) -> Result<Vec<CloseMatch<'p>>> {
    if n == 0 {
        return Err(AlignError::InvalidArgument(format!(
            "n must be > 0: {n}"
        )));
    }
    if !(0.0..=1.0).contains(&cutoff) {
        return Err(AlignError::InvalidArgument(format!(
            "cutoff must be in [0.0, 1.0]: {cutoff}"
        )));
    }

    let word: Vec<char> = word.chars().collect();
    let candidates: Vec<Vec<char>> = possibilities
        .iter()
        .map(|p| p.as_ref().chars().collect())
        .collect();

    let mut matcher = SequenceMatcher::new(&[], &word);
    let mut scored = Vec::new();
    for (candidate, chars) in possibilities.iter().zip(&candidates) {
        matcher.set_seq1(chars);
        if matcher.real_quick_ratio() < cutoff || matcher.quick_ratio() < cutoff {
            continue;
        }
        let score = matcher.ratio()?;
        if score >= cutoff {
            scored.push(CloseMatch {
                candidate: candidate.as_ref(),
                score,
            });
        }
    }

    scored.sort_by(|x, y| y.score.total_cmp(&x.score));
    scored.truncate(n);
    Ok(scored)
}

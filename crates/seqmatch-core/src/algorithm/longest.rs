//! Longest common contiguous run between two sub-ranges.

use std::hash::Hash;
use std::ops::Range;

use super::TokenIndex;
use crate::{AlignError, Match, Result};

/// Find the longest block with `a[i..i+k] == b[j..j+k]` inside `a_range` x `b_range`.
///
/// Among equally long blocks the one starting earliest in `a` wins, then the
/// one starting earliest in `b`. The winner is then grown over equal symbols
/// the index left out: first non-noise ones (popular symbols), then, when
/// `extend_with_noise` is set, noise symbols.
///
/// Returns `Match { a: alo, b: blo, size: 0 }` when nothing matches.
pub fn find_longest_match<T: Eq + Hash>(
    a: &[T],
    b: &[T],
    index: &TokenIndex<'_, T>,
    a_range: Range<usize>,
    b_range: Range<usize>,
) -> Result<Match> {
    let (alo, ahi) = (a_range.start, a_range.end);
    let (blo, bhi) = (b_range.start, b_range.end);
    if alo > ahi || ahi > a.len() || blo > bhi || bhi > b.len() {
        return Err(AlignError::InvalidRange {
            alo,
            ahi,
            blo,
            bhi,
            len_a: a.len(),
            len_b: b.len(),
        });
    }

    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0usize);

    // runs[s] holds the length of the run ending at b[blo + s - 1] for the
    // previous row; slot 0 stays zero so a run starting at blo reads 0.
    let width = bhi - blo;
    let mut prev = vec![0usize; width + 1];
    let mut cur = vec![0usize; width + 1];
    let mut prev_touched: Vec<usize> = Vec::new();
    let mut cur_touched: Vec<usize> = Vec::new();

    for i in alo..ahi {
        let positions = index.positions(&a[i]);
        let first = positions.partition_point(|&j| j < blo);
        for &j in &positions[first..] {
            if j >= bhi {
                break;
            }
            let slot = j - blo;
            let k = prev[slot] + 1;
            cur[slot + 1] = k;
            cur_touched.push(slot + 1);
            if k > best_size {
                best_i = i + 1 - k;
                best_j = j + 1 - k;
                best_size = k;
            }
        }
        for &s in &prev_touched {
            prev[s] = 0;
        }
        prev_touched.clear();
        std::mem::swap(&mut prev, &mut cur);
        std::mem::swap(&mut prev_touched, &mut cur_touched);
    }

    let mut best = Match::new(best_i, best_j, best_size);
    extend(a, b, &mut best, alo..ahi, blo..bhi, |sym| !index.is_noise(sym));
    if index.options().extend_with_noise && index.has_noise() {
        extend(a, b, &mut best, alo..ahi, blo..bhi, |sym| index.is_noise(sym));
    }
    Ok(best)
}

/// Grow `m` left then right while both sides agree and `admit` accepts the
/// symbol from `b`.
fn extend<T: Eq>(
    a: &[T],
    b: &[T],
    m: &mut Match,
    a_range: Range<usize>,
    b_range: Range<usize>,
    admit: impl Fn(&T) -> bool,
) {
    while m.a > a_range.start
        && m.b > b_range.start
        && admit(&b[m.b - 1])
        && a[m.a - 1] == b[m.b - 1]
    {
        m.a -= 1;
        m.b -= 1;
        m.size += 1;
    }
    while m.a_end() < a_range.end
        && m.b_end() < b_range.end
        && admit(&b[m.b_end()])
        && a[m.a_end()] == b[m.b_end()]
    {
        m.size += 1;
    }
}

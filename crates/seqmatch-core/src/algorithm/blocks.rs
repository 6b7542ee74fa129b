//! Divide-and-conquer assembly of the complete matching-block set.

use std::hash::Hash;

use tracing::{debug, trace};

use super::{find_longest_match, TokenIndex};
use crate::{Match, Result};

/// Compute the matching blocks of `a` against `b`.
///
/// The longest match of the whole range is taken first, then the regions
/// strictly before and strictly after it are processed the same way until
/// no region has a common symbol. Blocks are returned in increasing order,
/// merged where they touch in both sequences, and terminated by the sentinel
/// `Match { a: a.len(), b: b.len(), size: 0 }`.
pub fn matching_blocks<T: Eq + Hash>(
    a: &[T],
    b: &[T],
    index: &TokenIndex<'_, T>,
) -> Result<Vec<Match>> {
    let mut found = Vec::new();
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let m = find_longest_match(a, b, index, alo..ahi, blo..bhi)?;
        if m.is_empty() {
            continue;
        }
        trace!(a = m.a, b = m.b, size = m.size, "longest match");
        if alo < m.a && blo < m.b {
            pending.push((alo, m.a, blo, m.b));
        }
        if m.a_end() < ahi && m.b_end() < bhi {
            pending.push((m.a_end(), ahi, m.b_end(), bhi));
        }
        found.push(m);
    }

    found.sort_unstable_by_key(|m| (m.a, m.b));
    let mut blocks = merge_adjacent(found);
    blocks.push(Match::new(a.len(), b.len(), 0));

    debug!(
        len_a = a.len(),
        len_b = b.len(),
        blocks = blocks.len() - 1,
        "computed matching blocks"
    );
    Ok(blocks)
}

/// Fuse consecutive blocks that are contiguous in both sequences.
fn merge_adjacent(blocks: Vec<Match>) -> Vec<Match> {
    let mut merged: Vec<Match> = Vec::with_capacity(blocks.len() + 1);
    for m in blocks {
        match merged.last_mut() {
            Some(last) if last.a_end() == m.a && last.b_end() == m.b => last.size += m.size,
            _ => merged.push(m),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatcherOptions;

    fn blocks(a: &str, b: &str) -> Vec<Match> {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let index = TokenIndex::build(&b, None, &MatcherOptions::default());
        matching_blocks(&a, &b, &index).unwrap()
    }

    #[test]
    fn identical() {
        assert_eq!(
            blocks("ABCD", "ABCD"),
            vec![Match::new(0, 0, 4), Match::new(4, 4, 0)]
        );
    }

    #[test]
    fn both_empty() {
        assert_eq!(blocks("", ""), vec![Match::new(0, 0, 0)]);
    }

    #[test]
    fn disjoint() {
        assert_eq!(blocks("ABC", "XYZ"), vec![Match::new(3, 3, 0)]);
    }

    #[test]
    fn gaps_on_both_sides() {
        assert_eq!(
            blocks("abxcd", "abcd"),
            vec![Match::new(0, 0, 2), Match::new(3, 2, 2), Match::new(5, 4, 0)]
        );
    }

    #[test]
    fn plate_with_changed_suffix() {
        assert_eq!(
            blocks("AB12CD1234", "AB12CD5678"),
            vec![Match::new(0, 0, 6), Match::new(10, 10, 0)]
        );
    }

    #[test]
    fn recursion_finds_blocks_left_and_right() {
        // Longest is "cdef"; "a" survives on the left and "h" on the right.
        assert_eq!(
            blocks("a-cdef-h", "aXcdefYh"),
            vec![
                Match::new(0, 0, 1),
                Match::new(2, 2, 4),
                Match::new(7, 7, 1),
                Match::new(8, 8, 0),
            ]
        );
    }

    #[test]
    fn merge_touching_blocks() {
        let merged = merge_adjacent(vec![
            Match::new(0, 0, 2),
            Match::new(2, 2, 3),
            Match::new(6, 5, 1),
        ]);
        assert_eq!(merged, vec![Match::new(0, 0, 5), Match::new(6, 5, 1)]);
    }

    #[test]
    fn merge_requires_contiguity_in_both() {
        let merged = merge_adjacent(vec![Match::new(0, 0, 2), Match::new(2, 3, 1)]);
        assert_eq!(merged.len(), 2);
    }
}

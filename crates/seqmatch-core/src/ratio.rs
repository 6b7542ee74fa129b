//! Similarity scores.
//!
//! `ratio` is exact with respect to the matching blocks; `quick_ratio` and
//! `real_quick_ratio` are progressively cheaper upper bounds on it.

use std::collections::HashMap;
use std::hash::Hash;

use crate::Match;

/// Total number of matched symbols across all blocks.
pub fn matched_len(blocks: &[Match]) -> usize {
    blocks.iter().map(|m| m.size).sum()
}

/// `2 * M / (len_a + len_b)`, or `1.0` when both sequences are empty.
///
/// `M` only counts symbols inside matching blocks. With autojunk on, a long
/// second sequence drops its popular symbols from the index, so they can only
/// extend a match seeded elsewhere: two long runs sharing nothing but a
/// popular symbol score `0.0`.
pub fn ratio(blocks: &[Match], len_a: usize, len_b: usize) -> f64 {
    calculate_ratio(matched_len(blocks), len_a + len_b)
}

/// Upper bound on `ratio` from the multiset intersection of the symbols.
pub fn quick_ratio<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    let mut available: HashMap<&T, usize> = HashMap::new();
    for symbol in b {
        *available.entry(symbol).or_default() += 1;
    }
    let mut matches = 0;
    for symbol in a {
        if let Some(count) = available.get_mut(symbol) {
            if *count > 0 {
                *count -= 1;
                matches += 1;
            }
        }
    }
    calculate_ratio(matches, a.len() + b.len())
}

/// Upper bound on `ratio` from the lengths alone.
pub fn real_quick_ratio(len_a: usize, len_b: usize) -> f64 {
    calculate_ratio(len_a.min(len_b), len_a + len_b)
}

fn calculate_ratio(matches: usize, length: usize) -> f64 {
    if length > 0 {
        2.0 * matches as f64 / length as f64
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_identical() {
        assert_eq!(ratio(&[Match::new(0, 0, 0)], 0, 0), 1.0);
        assert_eq!(real_quick_ratio(0, 0), 1.0);
        assert_eq!(quick_ratio::<char>(&[], &[]), 1.0);
    }

    #[test]
    fn full_match() {
        assert_eq!(ratio(&[Match::new(0, 0, 4), Match::new(4, 4, 0)], 4, 4), 1.0);
    }

    #[test]
    fn no_match() {
        assert_eq!(ratio(&[Match::new(3, 3, 0)], 3, 3), 0.0);
    }

    #[test]
    fn partial_match() {
        let blocks = [Match::new(0, 0, 6), Match::new(10, 10, 0)];
        assert_eq!(matched_len(&blocks), 6);
        assert!((ratio(&blocks, 10, 10) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn quick_ratio_counts_multiset_overlap() {
        let a: Vec<char> = "abcd".chars().collect();
        let b: Vec<char> = "dcba".chars().collect();
        assert_eq!(quick_ratio(&a, &b), 1.0);

        let a: Vec<char> = "aab".chars().collect();
        let b: Vec<char> = "abb".chars().collect();
        assert!((quick_ratio(&a, &b) - 4.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn real_quick_ratio_uses_lengths() {
        assert!((real_quick_ratio(2, 6) - 0.5).abs() < 1e-12);
        assert_eq!(real_quick_ratio(5, 5), 1.0);
        assert_eq!(real_quick_ratio(0, 3), 0.0);
    }
}

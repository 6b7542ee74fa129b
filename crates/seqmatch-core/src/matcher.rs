//! Stateful matcher holding one (A, B) pair and its cached results.

use std::hash::Hash;
use std::ops::Range;

use crate::algorithm::{self, TokenIndex};
use crate::{opcodes, ratio, Match, MatcherOptions, NoisePredicate, Opcode, Result};

/// Compares a pair of sequences, caching matching blocks and opcodes.
///
/// The token index is built from `b`. Replacing `a` with [`set_seq1`]
/// keeps the index, so comparing many sequences against one fixed
/// sequence should put the fixed one in `b`.
///
/// [`set_seq1`]: SequenceMatcher::set_seq1
pub struct SequenceMatcher<'a, T> {
    a: &'a [T],
    b: &'a [T],
    is_noise: Option<NoisePredicate<'a, T>>,
    options: MatcherOptions,
    index: TokenIndex<'a, T>,
    blocks: Option<Vec<Match>>,
    opcodes: Option<Vec<Opcode>>,
}

impl<'a, T: Eq + Hash> SequenceMatcher<'a, T> {
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self::with_options(a, b, None, MatcherOptions::default())
    }

    /// Matcher treating symbols for which `is_noise` holds as noise.
    pub fn with_noise(a: &'a [T], b: &'a [T], is_noise: NoisePredicate<'a, T>) -> Self {
        Self::with_options(a, b, Some(is_noise), MatcherOptions::default())
    }

    pub fn with_options(
        a: &'a [T],
        b: &'a [T],
        is_noise: Option<NoisePredicate<'a, T>>,
        options: MatcherOptions,
    ) -> Self {
        Self {
            a,
            b,
            is_noise,
            options,
            index: TokenIndex::build(b, is_noise, &options),
            blocks: None,
            opcodes: None,
        }
    }

    /// Replace both sequences.
    pub fn set_seqs(&mut self, a: &'a [T], b: &'a [T]) {
        self.set_seq1(a);
        self.set_seq2(b);
    }

    /// Replace the first sequence; the index of `b` is kept.
    pub fn set_seq1(&mut self, a: &'a [T]) {
        if std::ptr::eq(a, self.a) {
            return;
        }
        self.a = a;
        self.invalidate();
    }

    /// Replace the second sequence and rebuild the index.
    pub fn set_seq2(&mut self, b: &'a [T]) {
        if std::ptr::eq(b, self.b) {
            return;
        }
        self.b = b;
        self.index = TokenIndex::build(b, self.is_noise, &self.options);
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.blocks = None;
        self.opcodes = None;
    }

    pub fn a(&self) -> &'a [T] {
        self.a
    }

    pub fn b(&self) -> &'a [T] {
        self.b
    }

    pub fn index(&self) -> &TokenIndex<'a, T> {
        &self.index
    }

    pub fn options(&self) -> &MatcherOptions {
        &self.options
    }

    /// Longest matching block within the given sub-ranges.
    pub fn find_longest_match(
        &self,
        a_range: Range<usize>,
        b_range: Range<usize>,
    ) -> Result<Match> {
        algorithm::find_longest_match(self.a, self.b, &self.index, a_range, b_range)
    }

    /// Matching blocks of the current pair, terminated by the sentinel.
    pub fn matching_blocks(&mut self) -> Result<&[Match]> {
        let blocks = match self.blocks.take() {
            Some(blocks) => blocks,
            None => algorithm::matching_blocks(self.a, self.b, &self.index)?,
        };
        Ok(self.blocks.insert(blocks).as_slice())
    }

    /// Edit script of the current pair.
    pub fn opcodes(&mut self) -> Result<&[Opcode]> {
        let ops = match self.opcodes.take() {
            Some(ops) => ops,
            None => opcodes::opcodes(self.matching_blocks()?),
        };
        Ok(self.opcodes.insert(ops).as_slice())
    }

    /// Opcodes grouped into hunks with `context` symbols of context.
    pub fn grouped_opcodes(&mut self, context: usize) -> Result<Vec<Vec<Opcode>>> {
        Ok(opcodes::grouped_opcodes(self.opcodes()?, context))
    }

    /// Similarity in `[0, 1]`.
    pub fn ratio(&mut self) -> Result<f64> {
        let (len_a, len_b) = (self.a.len(), self.b.len());
        Ok(ratio::ratio(self.matching_blocks()?, len_a, len_b))
    }

    /// Upper bound on [`ratio`](Self::ratio), cheaper to compute.
    pub fn quick_ratio(&self) -> f64 {
        ratio::quick_ratio(self.a, self.b)
    }

    /// Upper bound on [`quick_ratio`](Self::quick_ratio) from lengths only.
    pub fn real_quick_ratio(&self) -> f64 {
        ratio::real_quick_ratio(self.a.len(), self.b.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tag;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn caches_blocks_and_opcodes() {
        let (a, b) = (chars("abxcd"), chars("abcd"));
        let mut sm = SequenceMatcher::new(&a, &b);
        let first = sm.matching_blocks().unwrap().to_vec();
        let second = sm.matching_blocks().unwrap().to_vec();
        assert_eq!(first, second);
        assert_eq!(
            sm.opcodes().unwrap(),
            &[
                Opcode::new(Tag::Equal, 0, 2, 0, 2),
                Opcode::new(Tag::Delete, 2, 3, 2, 2),
                Opcode::new(Tag::Equal, 3, 5, 2, 4),
            ]
        );
    }

    #[test]
    fn set_seq1_invalidates_cache() {
        let (a1, a2, b) = (chars("abcd"), chars("wxyz"), chars("abcd"));
        let mut sm = SequenceMatcher::new(&a1, &b);
        assert_eq!(sm.ratio().unwrap(), 1.0);
        sm.set_seq1(&a2);
        assert_eq!(sm.ratio().unwrap(), 0.0);
        assert_eq!(sm.opcodes().unwrap(), &[Opcode::new(Tag::Replace, 0, 4, 0, 4)]);
    }

    #[test]
    fn set_seq2_rebuilds_index() {
        let (a, b1, b2) = (chars("abcd"), chars("wxyz"), chars("abcd"));
        let mut sm = SequenceMatcher::new(&a, &b1);
        assert_eq!(sm.ratio().unwrap(), 0.0);
        sm.set_seq2(&b2);
        assert_eq!(sm.index().positions(&'a'), &[0]);
        assert_eq!(sm.ratio().unwrap(), 1.0);
    }

    #[test]
    fn set_seqs_replaces_both() {
        let (a, b) = (chars("ab"), chars("ab"));
        let (c, d) = (chars("ab"), chars("ba"));
        let mut sm = SequenceMatcher::new(&a, &b);
        assert_eq!(sm.ratio().unwrap(), 1.0);
        sm.set_seqs(&c, &d);
        assert_eq!(sm.ratio().unwrap(), 0.5);
        assert_eq!(sm.a(), c.as_slice());
        assert_eq!(sm.b(), d.as_slice());
    }

    #[test]
    fn noise_predicate_applies() {
        let (a, b) = (chars(" abc"), chars(" abc"));
        let is_space = |c: &char| *c == ' ';
        let sm = SequenceMatcher::with_noise(&a, &b, &is_space);
        assert!(sm.index().is_noise(&' '));
        assert_eq!(sm.find_longest_match(0..4, 0..4).unwrap(), Match::new(0, 0, 4));
    }

    #[test]
    fn ratio_bounds_ordered() {
        let a = chars("private Thread currentThread;");
        let b = chars("private volatile Thread currentThread;");
        let mut sm = SequenceMatcher::new(&a, &b);
        let r = sm.ratio().unwrap();
        assert!(sm.quick_ratio() >= r);
        assert!(sm.real_quick_ratio() >= sm.quick_ratio());
    }

    #[test]
    fn grouped_opcodes_through_matcher() {
        let (a, b) = (chars("abcdefghijklmnop"), chars("abcdefgXijklmnop"));
        let mut sm = SequenceMatcher::new(&a, &b);
        let groups = sm.grouped_opcodes(2).unwrap();
        assert_eq!(
            groups,
            vec![vec![
                Opcode::new(Tag::Equal, 5, 7, 5, 7),
                Opcode::new(Tag::Replace, 7, 8, 7, 8),
                Opcode::new(Tag::Equal, 8, 10, 8, 10),
            ]]
        );
    }

    #[test]
    fn out_of_range_lookup_fails() {
        let (a, b) = (chars("ab"), chars("ab"));
        let sm = SequenceMatcher::new(&a, &b);
        assert!(sm.find_longest_match(0..3, 0..2).is_err());
    }
}

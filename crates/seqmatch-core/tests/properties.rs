//! Property-based tests for the comparison laws.

use proptest::prelude::*;
use seqmatch_core::ratio::{quick_ratio, real_quick_ratio};
use seqmatch_core::render::{Cell, GAP};
use seqmatch_core::{compare, render, Class, MatcherOptions, Opcode, Tag};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Small alphabets produce plenty of repeated symbols and partial matches.
fn small_alphabet() -> impl Strategy<Value = String> {
    "[abcd]{0,40}"
}

proptest! {
    /// Comparing a sequence with itself is a perfect score and a single equal span.
    #[test]
    fn identity_is_perfect(s in "[A-Z0-9]{0,60}") {
        let v = chars(&s);
        let c = compare(&v, &v, &MatcherOptions::default()).unwrap();
        prop_assert_eq!(c.ratio, 1.0);
        if v.is_empty() {
            prop_assert!(c.opcodes.is_empty());
        } else {
            prop_assert_eq!(c.opcodes, vec![Opcode::new(Tag::Equal, 0, v.len(), 0, v.len())]);
        }
    }

    /// The ratio always lies in [0, 1] and below both cheap upper bounds.
    #[test]
    fn ratio_bounded(a in small_alphabet(), b in small_alphabet()) {
        let (a, b) = (chars(&a), chars(&b));
        let c = compare(&a, &b, &MatcherOptions::default()).unwrap();
        prop_assert!((0.0..=1.0).contains(&c.ratio));
        prop_assert!(quick_ratio(&a, &b) >= c.ratio);
        prop_assert!(real_quick_ratio(a.len(), b.len()) >= quick_ratio(&a, &b));
    }

    /// Opcode spans tile both sequences exactly once, in order.
    #[test]
    fn opcodes_cover_both_sequences(a in small_alphabet(), b in small_alphabet()) {
        let (a, b) = (chars(&a), chars(&b));
        let c = compare(&a, &b, &MatcherOptions::default()).unwrap();
        let mut rebuilt_a = Vec::new();
        let mut rebuilt_b = Vec::new();
        for op in &c.opcodes {
            rebuilt_a.extend_from_slice(&a[op.a_range()]);
            rebuilt_b.extend_from_slice(&b[op.b_range()]);
        }
        prop_assert_eq!(rebuilt_a, a);
        prop_assert_eq!(rebuilt_b, b);

        for pair in c.opcodes.windows(2) {
            prop_assert_eq!(pair[0].a_end, pair[1].a_start);
            prop_assert_eq!(pair[0].b_end, pair[1].b_start);
            prop_assert!(pair[0].tag == Tag::Equal || pair[0].tag != pair[1].tag);
        }
    }

    /// Blocks match, increase strictly in both coordinates, never overlap,
    /// never touch in both sequences, and end with the sentinel.
    #[test]
    fn blocks_are_ordered_and_maximal(a in small_alphabet(), b in small_alphabet()) {
        let (a, b) = (chars(&a), chars(&b));
        let c = compare(&a, &b, &MatcherOptions::default()).unwrap();
        let (body, sentinel) = c.blocks.split_at(c.blocks.len() - 1);
        prop_assert_eq!(sentinel[0].a, a.len());
        prop_assert_eq!(sentinel[0].b, b.len());
        prop_assert_eq!(sentinel[0].size, 0);

        for m in body {
            prop_assert!(m.size > 0);
            prop_assert_eq!(&a[m.a..m.a_end()], &b[m.b..m.b_end()]);
        }
        for pair in c.blocks.windows(2) {
            prop_assert!(pair[0].a_end() <= pair[1].a);
            prop_assert!(pair[0].b_end() <= pair[1].b);
            if pair[1].size > 0 {
                prop_assert!(
                    pair[0].a_end() != pair[1].a || pair[0].b_end() != pair[1].b,
                    "blocks {:?} and {:?} could be merged", pair[0], pair[1]
                );
            }
        }
    }

    /// Perfect score exactly when the sequences are equal; zero exactly when
    /// they share no symbol (inputs stay below the popularity threshold).
    #[test]
    fn ratio_extremes(a in small_alphabet(), b in "[cdef]{0,40}") {
        let (a, b) = (chars(&a), chars(&b));
        let c = compare(&a, &b, &MatcherOptions::default()).unwrap();
        prop_assert_eq!(c.ratio == 1.0, a == b);
        let shares_symbol = a.iter().any(|x| b.contains(x));
        prop_assert_eq!(c.ratio == 0.0, !shares_symbol && !(a.is_empty() && b.is_empty()));
    }

    /// The rendering keeps every symbol exactly once and its rows aligned.
    #[test]
    fn render_rows_aligned(a in small_alphabet(), b in small_alphabet()) {
        let (a, b) = (chars(&a), chars(&b));
        let c = compare(&a, &b, &MatcherOptions::default()).unwrap();
        let r = render(&a, &b, &c.opcodes).unwrap();

        prop_assert_eq!(r.top.len(), r.bottom.len());
        prop_assert_eq!(r.connector.len(), r.classes.len());
        prop_assert_eq!(r.top.len(), r.classes.len());

        let top: Vec<char> = r.top.iter().filter_map(|c| match c {
            Cell::Symbol(x) => Some(*x),
            Cell::Gap => None,
        }).collect();
        let bottom: Vec<char> = r.bottom.iter().filter_map(|c| match c {
            Cell::Symbol(x) => Some(*x),
            Cell::Gap => None,
        }).collect();
        prop_assert_eq!(top, a);
        prop_assert_eq!(bottom, b);

        let summary = r.summary();
        prop_assert_eq!(summary.matching, c.matched_len());
        prop_assert_eq!(summary.total, summary.matching + summary.mismatched);

        let (t, m, bt) = r.rows(GAP);
        prop_assert_eq!(t.chars().count(), r.len());
        prop_assert_eq!(m.chars().count(), r.len());
        prop_assert_eq!(bt.chars().count(), r.len());
        for (k, class) in r.classes.iter().enumerate() {
            prop_assert_eq!(r.connector[k], if *class == Class::Match { '|' } else { '.' });
        }
    }

    /// Works the same for arbitrary byte tokens as for characters.
    #[test]
    fn generic_byte_sequences(a in proptest::collection::vec(0u8..6, 0..50),
                              b in proptest::collection::vec(0u8..6, 0..50)) {
        let c = compare(&a, &b, &MatcherOptions::default()).unwrap();
        let covered_a: usize = c.opcodes.iter().map(|op| op.a_end - op.a_start).sum();
        let covered_b: usize = c.opcodes.iter().map(|op| op.b_end - op.b_start).sum();
        prop_assert_eq!(covered_a, a.len());
        prop_assert_eq!(covered_b, b.len());
    }
}

//! Position index of the second ("target") sequence.
//!
//! Maps every indexed symbol of `b` to the ascending list of positions where
//! it occurs. Noise symbols (caller predicate) and, for long sequences,
//! popular symbols are left out so they can never seed a match.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use tracing::debug;

use crate::{MatcherOptions, NoisePredicate};

/// Symbol -> ascending positions in the target sequence.
#[derive(Debug, Clone)]
pub struct TokenIndex<'b, T> {
    positions: HashMap<&'b T, Vec<usize>>,
    noise: HashSet<&'b T>,
    popular: HashSet<&'b T>,
    options: MatcherOptions,
}

impl<'b, T: Eq + Hash> TokenIndex<'b, T> {
    /// Build the index for `b`.
    ///
    /// A symbol is popular when the filter is enabled, `b.len()` reaches
    /// `popular_min_len`, and its count exceeds
    /// `max(popular_floor, ceil(b.len() / 100))`.
    pub fn build(
        b: &'b [T],
        is_noise: Option<NoisePredicate<'_, T>>,
        options: &MatcherOptions,
    ) -> Self {
        let mut positions: HashMap<&'b T, Vec<usize>> = HashMap::new();
        for (j, symbol) in b.iter().enumerate() {
            positions.entry(symbol).or_default().push(j);
        }

        let mut noise = HashSet::new();
        if let Some(is_noise) = is_noise {
            positions.retain(|symbol, _| {
                if is_noise(*symbol) {
                    noise.insert(*symbol);
                    false
                } else {
                    true
                }
            });
        }

        let mut popular = HashSet::new();
        let n = b.len();
        if options.autojunk && n >= options.popular_min_len {
            let threshold = options.popular_floor.max(n.div_ceil(100));
            positions.retain(|symbol, idxs| {
                if idxs.len() > threshold {
                    popular.insert(*symbol);
                    false
                } else {
                    true
                }
            });
        }

        debug!(
            len = n,
            indexed = positions.len(),
            noise = noise.len(),
            popular = popular.len(),
            "built token index"
        );

        Self {
            positions,
            noise,
            popular,
            options: *options,
        }
    }

    /// Positions of `symbol` in the target sequence (empty if not indexed).
    pub fn positions(&self, symbol: &T) -> &[usize] {
        self.positions
            .get(symbol)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// True if `symbol` occurs in the target and was declared noise.
    pub fn is_noise(&self, symbol: &T) -> bool {
        self.noise.contains(symbol)
    }

    /// True if `symbol` was dropped by the popularity filter.
    pub fn is_popular(&self, symbol: &T) -> bool {
        self.popular.contains(symbol)
    }

    /// Whether any symbol of the target was declared noise.
    pub fn has_noise(&self) -> bool {
        !self.noise.is_empty()
    }

    /// Number of distinct indexed symbols.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Options the index was built with.
    pub fn options(&self) -> &MatcherOptions {
        &self.options
    }
}

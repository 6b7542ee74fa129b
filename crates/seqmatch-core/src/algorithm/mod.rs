//! Matching-block discovery: token index, longest-match finder, recursive partitioner.

pub mod blocks;
pub mod index;
pub mod longest;

pub use blocks::matching_blocks;
pub use index::TokenIndex;
pub use longest::find_longest_match;

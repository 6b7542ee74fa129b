//! Shared terminal utilities for the seqmatch workspace: ANSI color handling
//! and the global CLI options every subcommand accepts.

pub mod cli;
pub mod color;

pub use color::{ColorConfig, ColorMode, ColorSlot};

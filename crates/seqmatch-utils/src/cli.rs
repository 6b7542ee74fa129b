//! Shared CLI option types for the `seqmatch` binary, built on clap.
//!
//! - `--color=<when>` accepts auto/always/never
//! - `-q`/`-v` control how much of each report is printed
//! - `--` separates options from sequence arguments that start with a dash

use crate::color::ColorMode;

/// Global options shared by all seqmatch commands.
#[derive(Debug, Clone, clap::Parser)]
pub struct GlobalOptions {
    /// Colorize output.
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorWhen,

    /// Suppress all output except the exit status.
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Be more verbose.
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Color mode argument: `--color=<when>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorWhen {
    /// Auto-detect based on terminal.
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;
use seqmatch_core::color::{colorize_render, colorize_report};
use seqmatch_core::render::GAP;
use seqmatch_core::{
    compare, compare_with_noise, render, AlignmentRender, Comparison, Match, MatcherOptions,
    Opcode, Summary,
};
use seqmatch_utils::color::{ColorConfig, ColorSlot};

use super::{color_enabled, load_color_config};
use crate::Cli;

#[derive(Args)]
pub struct CompareArgs {
    /// First string
    #[arg(allow_hyphen_values = true)]
    a: String,

    /// Second string
    #[arg(allow_hyphen_values = true)]
    b: String,

    /// Characters of the second string to treat as noise
    #[arg(long, value_name = "CHARS")]
    junk: Option<String>,

    /// Keep frequent characters of long inputs in the index
    #[arg(long)]
    no_autojunk: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Symbol drawn opposite inserted or deleted characters
    #[arg(long, default_value_t = GAP)]
    placeholder: char,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct Rows {
    top: String,
    connector: String,
    bottom: String,
}

#[derive(Serialize)]
struct JsonReport<'c> {
    ratio: f64,
    percentage: f64,
    blocks: &'c [Match],
    opcodes: &'c [Opcode],
    rows: Rows,
    report: Vec<String>,
    summary: Summary,
}

pub fn run(args: &CompareArgs, cli: &Cli) -> Result<i32> {
    if args.a.is_empty() || args.b.is_empty() {
        eprintln!("Please enter both strings.");
        return Ok(1);
    }

    let options = MatcherOptions {
        autojunk: !args.no_autojunk,
        ..MatcherOptions::default()
    };
    let a: Vec<char> = args.a.chars().collect();
    let b: Vec<char> = args.b.chars().collect();

    let comparison = match &args.junk {
        Some(junk) => {
            let is_junk = |c: &char| junk.contains(*c);
            compare_with_noise(&a, &b, &is_junk, &options)
        }
        None => compare(&a, &b, &options),
    }
    .context("comparison failed")?;
    let rendered = render(&a, &b, &comparison.opcodes).context("rendering failed")?;

    if cli.global.quiet {
        return Ok(0);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Json => {
            write_json(&mut out, &comparison, &rendered, args.placeholder)?;
        }
        OutputFormat::Text => {
            let cc = load_color_config();
            let color = color_enabled(cli);
            write_text(&mut out, &comparison, &rendered, args.placeholder, &cc, color)?;
            if cli.global.verbose {
                write_opcodes(&mut out, &comparison.opcodes, &cc, color)?;
            }
        }
    }
    out.flush()?;

    Ok(0)
}

fn write_json(
    out: &mut impl Write,
    comparison: &Comparison,
    rendered: &AlignmentRender<char>,
    placeholder: char,
) -> Result<()> {
    let (top, connector, bottom) = rendered.rows(placeholder);
    let report = JsonReport {
        ratio: comparison.ratio,
        percentage: comparison.percentage(),
        blocks: &comparison.blocks,
        opcodes: &comparison.opcodes,
        rows: Rows {
            top,
            connector,
            bottom,
        },
        report: rendered.report_lines(),
        summary: rendered.summary(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

fn write_text(
    out: &mut impl Write,
    comparison: &Comparison,
    rendered: &AlignmentRender<char>,
    placeholder: char,
    cc: &ColorConfig,
    color: bool,
) -> Result<()> {
    let heading = |s: &str| cc.paint(s, ColorSlot::Heading, color);
    let value = |s: &str| cc.paint(s, ColorSlot::Value, color);

    writeln!(out, "{}", heading("Similarity Percentage:"))?;
    writeln!(out, "{}", value(&format!("{:.2}%", comparison.percentage())))?;
    writeln!(out)?;

    writeln!(out, "{}", heading("Visual Alignment:"))?;
    writeln!(out)?;
    writeln!(out, "{}", colorize_render(rendered, placeholder, cc, color))?;
    writeln!(out)?;

    writeln!(out, "{}", heading("Match Report:"))?;
    writeln!(out)?;
    for line in colorize_report(rendered, cc, color) {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;

    let summary = rendered.summary();
    writeln!(out, "{}", heading("Summary:"))?;
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        value(&format!("Total characters compared: {}", summary.total))
    )?;
    writeln!(
        out,
        "{}",
        value(&format!("Matching characters: {}", summary.matching))
    )?;
    writeln!(
        out,
        "{}",
        value(&format!("Mismatched characters: {}", summary.mismatched))
    )?;
    Ok(())
}

fn write_opcodes(
    out: &mut impl Write,
    opcodes: &[Opcode],
    cc: &ColorConfig,
    color: bool,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", cc.paint("Opcodes:", ColorSlot::Heading, color))?;
    writeln!(out)?;
    for op in opcodes {
        writeln!(
            out,
            "{:<7} a[{}:{}] b[{}:{}]",
            op.tag.as_str(),
            op.a_start,
            op.a_end,
            op.b_start,
            op.b_end
        )?;
    }
    Ok(())
}

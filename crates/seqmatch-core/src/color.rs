//! Colored alignment output.
//!
//! Wraps each rendered column in ANSI escape sequences using ColorConfig from
//! seqmatch-utils: matched columns in the match color, everything else in the
//! mismatch color.

use std::fmt::Display;

use seqmatch_utils::color::{ColorConfig, ColorSlot};

use crate::render::{AlignmentRender, Class};

fn slot_for(class: Class) -> ColorSlot {
    match class {
        Class::Match => ColorSlot::AlignMatch,
        Class::Mismatch => ColorSlot::AlignMismatch,
    }
}

/// Format the three alignment rows, one per line, with per-column color.
pub fn colorize_render<T: Display>(
    render: &AlignmentRender<T>,
    placeholder: char,
    config: &ColorConfig,
    enabled: bool,
) -> String {
    let columns = render.columns(placeholder);
    let mut lines = [String::new(), String::new(), String::new()];
    for column in &columns {
        let slot = slot_for(column.class);
        lines[0].push_str(&config.paint(&column.top, slot, enabled));
        lines[1].push_str(&config.paint(&column.connector, slot, enabled));
        lines[2].push_str(&config.paint(&column.bottom, slot, enabled));
    }
    lines.join("\n")
}

/// Format the textual report, one colored line per column.
pub fn colorize_report<T: Display>(
    render: &AlignmentRender<T>,
    config: &ColorConfig,
    enabled: bool,
) -> Vec<String> {
    render
        .report
        .iter()
        .zip(&render.classes)
        .map(|(line, class)| config.paint(&line.to_string(), slot_for(*class), enabled))
        .collect()
}

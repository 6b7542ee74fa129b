//! Three-row alignment rendering with per-column classification.
//!
//! ```text
//! AB12CD1234
//! ||||||....
//! AB12CD5678
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{AlignError, Opcode, Result, Tag};

/// Default symbol shown opposite an inserted or deleted symbol.
pub const GAP: char = '-';

/// One cell of an aligned row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell<T> {
    Symbol(T),
    /// No symbol on this side; rendered with a placeholder.
    Gap,
}

impl<T: fmt::Display> Cell<T> {
    fn display(&self, placeholder: char) -> String {
        match self {
            Cell::Symbol(s) => s.to_string(),
            Cell::Gap => placeholder.to_string(),
        }
    }
}

/// Classification of one displayed column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Class {
    Match,
    Mismatch,
}

impl Class {
    /// Connector symbol drawn between the two rows.
    pub fn connector(self) -> char {
        match self {
            Class::Match => '|',
            Class::Mismatch => '.',
        }
    }
}

/// One entry of the per-position textual report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine<T> {
    Match(T, T),
    Mismatch(T, T),
    Inserted(T),
    Deleted(T),
}

impl<T: fmt::Display> fmt::Display for ReportLine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Match(x, y) => write!(f, "Match: {x} == {y}"),
            ReportLine::Mismatch(x, y) => write!(f, "Mismatch: {x} != {y}"),
            ReportLine::Inserted(y) => write!(f, "Inserted in B: {y}"),
            ReportLine::Deleted(x) => write!(f, "Deleted from A: {x}"),
        }
    }
}

/// Column counts of a rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    /// Number of compared columns.
    pub total: usize,
    pub matching: usize,
    pub mismatched: usize,
}

/// A single displayed column, padded to a common width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub top: String,
    pub connector: String,
    pub bottom: String,
    pub class: Class,
}

/// Aligned rows, connector row, classifications and textual report.
///
/// `top`, `connector`, `bottom` and `classes` always have the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentRender<T> {
    pub top: Vec<Cell<T>>,
    pub connector: Vec<char>,
    pub bottom: Vec<Cell<T>>,
    pub classes: Vec<Class>,
    pub report: Vec<ReportLine<T>>,
}

impl<T> AlignmentRender<T> {
    fn with_capacity(columns: usize) -> Self {
        Self {
            top: Vec::with_capacity(columns),
            connector: Vec::with_capacity(columns),
            bottom: Vec::with_capacity(columns),
            classes: Vec::with_capacity(columns),
            report: Vec::with_capacity(columns),
        }
    }

    fn push(&mut self, top: Cell<T>, bottom: Cell<T>, class: Class, line: ReportLine<T>) {
        self.top.push(top);
        self.connector.push(class.connector());
        self.bottom.push(bottom);
        self.classes.push(class);
        self.report.push(line);
    }

    /// Number of displayed columns.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn summary(&self) -> Summary {
        let matching = self.classes.iter().filter(|c| **c == Class::Match).count();
        Summary {
            total: self.classes.len(),
            matching,
            mismatched: self.classes.len() - matching,
        }
    }
}

impl<T: fmt::Display> AlignmentRender<T> {
    /// Columns with every cell padded to the widest symbol in that column.
    ///
    /// Single-character symbols produce one-character columns.
    pub fn columns(&self, placeholder: char) -> Vec<Column> {
        let mut columns = Vec::with_capacity(self.len());
        for (k, class) in self.classes.iter().enumerate() {
            let top = self.top[k].display(placeholder);
            let bottom = self.bottom[k].display(placeholder);
            let width = top.chars().count().max(bottom.chars().count()).max(1);
            columns.push(Column {
                top: pad(top, width),
                connector: self.connector[k].to_string().repeat(width),
                bottom: pad(bottom, width),
                class: *class,
            });
        }
        columns
    }

    /// The three display rows as strings.
    pub fn rows(&self, placeholder: char) -> (String, String, String) {
        let mut top = String::new();
        let mut connector = String::new();
        let mut bottom = String::new();
        for column in self.columns(placeholder) {
            top.push_str(&column.top);
            connector.push_str(&column.connector);
            bottom.push_str(&column.bottom);
        }
        (top, connector, bottom)
    }

    /// The textual report, one line per column.
    pub fn report_lines(&self) -> Vec<String> {
        self.report.iter().map(ToString::to_string).collect()
    }
}

fn pad(mut s: String, width: usize) -> String {
    let len = s.chars().count();
    s.extend(std::iter::repeat(' ').take(width - len));
    s
}

/// Build the alignment rendering of `a` against `b` from their opcodes.
///
/// A `replace` whose two spans differ in length pairs symbols positionally
/// up to the shorter span; the surplus of the longer span is shown as
/// deleted (from `a`) or inserted (from `b`) so every symbol appears once.
///
/// Fails with [`AlignError::InvalidRange`] when an opcode does not fit
/// within `a` and `b`.
pub fn render<T: Clone>(a: &[T], b: &[T], opcodes: &[Opcode]) -> Result<AlignmentRender<T>> {
    let out_of_bounds = |op: &&Opcode| {
        op.a_start > op.a_end
            || op.a_end > a.len()
            || op.b_start > op.b_end
            || op.b_end > b.len()
    };
    if let Some(op) = opcodes.iter().find(out_of_bounds) {
        return Err(AlignError::InvalidRange {
            alo: op.a_start,
            ahi: op.a_end,
            blo: op.b_start,
            bhi: op.b_end,
            len_a: a.len(),
            len_b: b.len(),
        });
    }

    let columns = opcodes
        .iter()
        .map(|op| (op.a_end - op.a_start).max(op.b_end - op.b_start))
        .sum();
    let mut out = AlignmentRender::with_capacity(columns);

    for op in opcodes {
        let (xs, ys) = (&a[op.a_range()], &b[op.b_range()]);
        match op.tag {
            Tag::Equal => {
                for (x, y) in xs.iter().zip(ys) {
                    out.push(
                        Cell::Symbol(x.clone()),
                        Cell::Symbol(y.clone()),
                        Class::Match,
                        ReportLine::Match(x.clone(), y.clone()),
                    );
                }
            }
            Tag::Replace => {
                for (x, y) in xs.iter().zip(ys) {
                    out.push(
                        Cell::Symbol(x.clone()),
                        Cell::Symbol(y.clone()),
                        Class::Mismatch,
                        ReportLine::Mismatch(x.clone(), y.clone()),
                    );
                }
                let paired = xs.len().min(ys.len());
                push_deleted(&mut out, &xs[paired..]);
                push_inserted(&mut out, &ys[paired..]);
            }
            Tag::Delete => push_deleted(&mut out, xs),
            Tag::Insert => push_inserted(&mut out, ys),
        }
    }

    Ok(out)
}

fn push_deleted<T: Clone>(out: &mut AlignmentRender<T>, xs: &[T]) {
    for x in xs {
        out.push(
            Cell::Symbol(x.clone()),
            Cell::Gap,
            Class::Mismatch,
            ReportLine::Deleted(x.clone()),
        );
    }
}

fn push_inserted<T: Clone>(out: &mut AlignmentRender<T>, ys: &[T]) {
    for y in ys {
        out.push(
            Cell::Gap,
            Cell::Symbol(y.clone()),
            Class::Mismatch,
            ReportLine::Inserted(y.clone()),
        );
    }
}

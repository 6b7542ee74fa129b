use std::collections::HashMap;

/// Color configuration mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Auto-detect based on terminal and NO_COLOR env var.
    Auto,
    /// Always emit ANSI color codes.
    Always,
    /// Never emit ANSI color codes.
    Never,
}

/// Check if color should be used for the given mode and stream.
///
/// Respects:
/// - The `NO_COLOR` environment variable (<https://no-color.org/>)
/// - The `SEQMATCH_NO_COLOR` environment variable
/// - Whether the stream is a terminal (for Auto mode)
pub fn use_color(mode: ColorMode, is_terminal: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("SEQMATCH_NO_COLOR").is_some() {
                return false;
            }
            is_terminal
        }
    }
}

/// Semantic coloring points in comparison output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    /// A column where both sequences agree.
    AlignMatch,
    /// A column that was replaced, inserted or deleted.
    AlignMismatch,
    /// Section headings ("Similarity Percentage:", "Summary:").
    Heading,
    /// Highlighted values (the percentage, summary counts).
    Value,
    Reset,
}

impl ColorSlot {
    /// Return the default ANSI escape code for this slot.
    pub fn default_ansi(&self) -> &'static str {
        match self {
            ColorSlot::AlignMatch => "\x1b[1;32m",
            ColorSlot::AlignMismatch => "\x1b[1;31m",
            ColorSlot::Heading => "\x1b[1;36m",
            ColorSlot::Value => "\x1b[1;96m",
            ColorSlot::Reset => "\x1b[m",
        }
    }

    /// Configuration key for this slot (e.g. `color.match`).
    pub fn key(&self) -> &'static str {
        match self {
            ColorSlot::AlignMatch => "color.match",
            ColorSlot::AlignMismatch => "color.mismatch",
            ColorSlot::Heading => "color.heading",
            ColorSlot::Value => "color.value",
            ColorSlot::Reset => "color.reset",
        }
    }
}

/// Per-slot color overrides on top of the built-in defaults.
#[derive(Debug, Clone)]
pub struct ColorConfig {
    /// Per-slot custom ANSI escape codes.
    pub slots: HashMap<ColorSlot, String>,
}

impl ColorConfig {
    /// Create a new `ColorConfig` with default values.
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Build a `ColorConfig` by reading slot values through a lookup function.
    ///
    /// The `get_string` closure receives a slot key such as `"color.match"` and
    /// returns the configured color description (e.g. `"bold green"`), if any.
    pub fn from_config<F>(get_string: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cc = Self::new();
        for slot in [
            ColorSlot::AlignMatch,
            ColorSlot::AlignMismatch,
            ColorSlot::Heading,
            ColorSlot::Value,
        ] {
            if let Some(val) = get_string(slot.key()) {
                let code = parse_color_value(&val);
                if !code.is_empty() {
                    cc.slots.insert(slot, code);
                }
            }
        }
        cc
    }

    /// Get the ANSI escape code for a color slot.
    ///
    /// Returns the custom override if one has been configured, otherwise
    /// falls back to the slot's built-in default.
    pub fn get_color(&self, slot: ColorSlot) -> &str {
        if let Some(custom) = self.slots.get(&slot) {
            return custom;
        }
        slot.default_ansi()
    }

    /// Wrap `text` in the slot's color when `enabled`.
    pub fn paint(&self, text: &str, slot: ColorSlot, enabled: bool) -> String {
        let code = self.get_color(slot);
        if !enabled || code.is_empty() {
            return text.to_string();
        }
        format!("{}{}{}", code, text, self.get_color(ColorSlot::Reset))
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a color description into an ANSI escape sequence.
///
/// - Named colors: `normal`, `black`, `red`, `green`, `yellow`, `blue`,
///   `magenta`, `cyan`, `white`
/// - Attributes: `bold`, `dim`, `ul` (underline), `reverse`
/// - 24-bit color: `#RRGGBB`
/// - Combinations: `"bold red"`, `"ul green"`, etc.
///
/// Returns an empty string for `"normal"` or an empty input.
pub fn parse_color_value(s: &str) -> String {
    let mut codes: Vec<String> = Vec::new();
    for word in s.split_whitespace() {
        match word {
            "normal" => {}
            "black" => codes.push("30".to_string()),
            "red" => codes.push("31".to_string()),
            "green" => codes.push("32".to_string()),
            "yellow" => codes.push("33".to_string()),
            "blue" => codes.push("34".to_string()),
            "magenta" => codes.push("35".to_string()),
            "cyan" => codes.push("36".to_string()),
            "white" => codes.push("37".to_string()),
            "bold" => codes.push("1".to_string()),
            "dim" => codes.push("2".to_string()),
            "ul" => codes.push("4".to_string()),
            "reverse" => codes.push("7".to_string()),
            _ if word.starts_with('#') && word.len() == 7 && word.is_ascii() => {
                // #RRGGBB -> 38;2;R;G;B
                if let (Ok(r), Ok(g), Ok(b)) = (
                    u8::from_str_radix(&word[1..3], 16),
                    u8::from_str_radix(&word[3..5], 16),
                    u8::from_str_radix(&word[5..7], 16),
                ) {
                    codes.push(format!("38;2;{};{};{}", r, g, b));
                }
            }
            _ => {}
        }
    }
    if codes.is_empty() {
        String::new()
    } else {
        format!("\x1b[{}m", codes.join(";"))
    }
}

//! Formatting utilities used for terminal and export outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Derived metrics (pace, speed) are shown with one decimal.
pub fn fmt_metric(value: f64) -> String {
    format!("{value:.1}")
}

/// User-entered values are shown as entered: `5` rather than `5.0`.
pub fn fmt_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Right-pad to a display width, counting emoji and wide glyphs correctly.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

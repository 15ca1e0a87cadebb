//! Formatting utilities used for CLI output.

use unicode_width::UnicodeWidthStr;

/// Millisecond duration as HH:MM, optionally signed (the hour bank is
/// rendered with an explicit sign, worked time without).
pub fn ms_to_hhmm(ms: i64, want_sign: bool) -> String {
    let sign = if ms < 0 && want_sign {
        "-"
    } else if ms > 0 && want_sign {
        "+"
    } else {
        ""
    };
    let abs = ms.abs();
    let h = abs / 3_600_000;
    let m = (abs % 3_600_000) / 60_000;
    format!("{}{:02}:{:02}", sign, h, m)
}

/// Pad to a display width, counting wide/combining glyphs correctly
/// (punch addresses routinely carry accented street names).
pub fn pad_display(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

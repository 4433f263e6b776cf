use crossterm::style::Attribute;
use std::borrow::Cow;
use unicode_width::UnicodeWidthChar;
use vte::{Parser, Perform};

/// Collects the characters a terminal would actually draw, skipping escape
/// sequences and control bytes, and the columns they take up.
struct Printed {
    text: String,
    columns: usize,
}

impl Printed {
    fn new() -> Self {
        Self {
            text: String::new(),
            columns: 0,
        }
    }
}

impl Perform for Printed {
    fn print(&mut self, c: char) {
        self.text.push(c);
        self.columns += UnicodeWidthChar::width(c).unwrap_or(0);
    }
}

/// Replaces control characters other than ESC with spaces, so text that
/// contains newlines, carriage returns or tabs stays on one row.
pub fn flatten(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_layout_control) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| if is_layout_control(c) { ' ' } else { c })
            .collect(),
    )
}

fn is_layout_control(c: char) -> bool {
    c.is_control() && c != '\x1b'
}

fn scan(line: &str) -> Printed {
    let mut parser = Parser::new();
    let mut printed = Printed::new();
    for byte in line.bytes() {
        parser.advance(&mut printed, byte);
    }
    printed
}

/// Returns `line` with all escape sequences removed.
pub fn strip_escapes(line: &str) -> String {
    scan(line).text
}

/// Terminal columns taken by `line`. Wide characters count as two.
pub fn visible_width(line: &str) -> usize {
    scan(line).columns
}

/// Cuts `line` so it fits in `width` columns, dropping a wide character that
/// would straddle the edge. Escape sequences before the cut are kept and a
/// reset is appended so a clipped color does not leak into the next row.
pub fn clip(line: &str, width: usize) -> Cow<'_, str> {
    let mut parser = Parser::new();
    let mut printed = Printed::new();
    let mut fits = 0;
    for (offset, byte) in line.bytes().enumerate() {
        parser.advance(&mut printed, byte);
        if printed.columns > width {
            return Cow::Owned(format!("{}{}", &line[..fits], Attribute::Reset));
        }
        if line.is_char_boundary(offset + 1) {
            fits = offset + 1;
        }
    }
    Cow::Borrowed(line)
}

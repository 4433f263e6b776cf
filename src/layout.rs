use crate::visible;
use crossterm::style::{Color, Stylize};
use unicode_width::UnicodeWidthStr;

/// Columns a progress line needs besides its label and bar: the space and
/// brackets around the bar plus a space, three digits and `%`.
pub const RESERVED_COLUMNS: usize = 8;
/// The part of [RESERVED_COLUMNS] taken by ` [`, `] ` around the bar.
const FRAME_COLUMNS: usize = 4;
pub const FILL_GLYPH: char = '█';
pub const EMPTY_GLYPH: char = ' ';
pub const FILL_COLOR: Color = Color::Green;
pub const SEPARATOR_GLYPH: char = '-';

/// How many entries each buffer may hold for a terminal `height` rows tall.
pub fn capacity(height: u16) -> usize {
    usize::from(height) / 2
}

/// Row split of the screen: log panel on top, progress panel below, and a
/// separator between them when the height is odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panels {
    pub log_rows: usize,
    pub separator: bool,
    pub progress_rows: usize,
}

impl Panels {
    pub fn for_height(height: u16) -> Self {
        Self {
            log_rows: capacity(height),
            separator: height % 2 == 1,
            progress_rows: capacity(height),
        }
    }

    pub fn total_rows(&self) -> usize {
        self.log_rows + usize::from(self.separator) + self.progress_rows
    }
}

pub fn bar_width(width: u16, label: &str) -> usize {
    fit_bar(width, label, RESERVED_COLUMNS)
}

fn fit_bar(width: u16, label: &str, reserved: usize) -> usize {
    usize::from(width).saturating_sub(UnicodeWidthStr::width(label) + reserved)
}

/// Whole-number percent with a `%` sign, rounded down like the fill.
pub fn percent_text(percent: f64) -> String {
    let whole = percent.floor();
    // -0.0 prints as "-0"
    let whole = if whole == 0.0 { 0.0 } else { whole };
    format!("{whole}%")
}

/// Filled cells for `percent`, clamped into `[0, bar_width]`. Non-finite
/// percents fill nothing.
pub fn filled_len(bar_width: usize, percent: f64) -> usize {
    if !percent.is_finite() {
        return 0;
    }
    let filled = (bar_width as f64 * (percent / 100.0)).floor();
    filled.clamp(0.0, bar_width as f64) as usize
}

/// `<label> [<bar>] <percent>%`, with the bar sized to fit `width` columns.
/// A suffix longer than three digits and `%` shrinks the bar instead of
/// pushing the line past the edge.
pub fn progress_line(label: &str, percent: f64, width: u16) -> String {
    let label = visible::flatten(label);
    let suffix = percent_text(percent);
    let reserved = RESERVED_COLUMNS.max(FRAME_COLUMNS + suffix.len());
    let bar_width = fit_bar(width, &label, reserved);
    let filled = filled_len(bar_width, percent);
    let bar: String = std::iter::repeat(FILL_GLYPH)
        .take(filled)
        .chain(std::iter::repeat(EMPTY_GLYPH).take(bar_width - filled))
        .collect();
    format!("{label} [{}] {suffix}", bar.with(FILL_COLOR))
}

pub fn separator(width: u16) -> String {
    std::iter::repeat(SEPARATOR_GLYPH)
        .take(usize::from(width))
        .collect()
}

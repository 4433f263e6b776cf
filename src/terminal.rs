use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use std::io::{self, Stdout, Write};

/// Size used when no terminal is attached.
pub const FALLBACK_SIZE: TermSize = TermSize {
    width: 80,
    height: 24,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSize {
    pub width: u16,
    pub height: u16,
}

impl TermSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the current terminal dimensions come from. Queried on every
/// mutation, so implementations should be cheap.
pub trait SizeProvider {
    fn size(&self) -> TermSize;
}

/// A fixed size, for headless use.
impl SizeProvider for TermSize {
    fn size(&self) -> TermSize {
        *self
    }
}

impl<F: Fn() -> TermSize> SizeProvider for F {
    fn size(&self) -> TermSize {
        self()
    }
}

/// Asks the attached terminal for its size.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalSize;

impl SizeProvider for TerminalSize {
    fn size(&self) -> TermSize {
        match terminal::size() {
            Ok((width, height)) => TermSize { width, height },
            Err(err) => {
                log::debug!("terminal size unavailable ({err}), using {FALLBACK_SIZE:?}");
                FALLBACK_SIZE
            }
        }
    }
}

/// The output side of a repaint: wipe everything, then print rows top-down.
pub trait LineSink {
    fn clear(&mut self) -> Result<()>;
    fn print_line(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Captures the most recent frame, one string per row.
impl LineSink for Vec<String> {
    fn clear(&mut self) -> Result<()> {
        Vec::clear(self);
        Ok(())
    }

    fn print_line(&mut self, line: &str) -> Result<()> {
        self.push(line.to_owned());
        Ok(())
    }
}

/// Draws frames on a real terminal with crossterm commands. Rows are placed
/// with absolute cursor moves, so a full-height frame never scrolls.
pub struct TerminalSink<W: Write> {
    output: W,
    row: u16,
}

impl TerminalSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(output: W) -> Self {
        Self { output, row: 0 }
    }

    pub fn get_ref(&self) -> &W {
        &self.output
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> LineSink for TerminalSink<W> {
    fn clear(&mut self) -> Result<()> {
        queue!(
            self.output,
            Clear(ClearType::All),
            Clear(ClearType::Purge),
            MoveTo(0, 0)
        )
        .context("clearing terminal")?;
        self.row = 0;
        Ok(())
    }

    fn print_line(&mut self, line: &str) -> Result<()> {
        queue!(self.output, MoveTo(0, self.row), Print(line))
            .with_context(|| format!("printing row {}", self.row))?;
        self.row = self.row.saturating_add(1);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.output.flush().context("flushing terminal output")
    }
}

use crate::layout::{self, Panels};
use crate::severity::Severity;
use crate::state::{LogBuffer, ProgressEntry, ProgressRegistry};
use crate::terminal::{LineSink, SizeProvider, TermSize, TerminalSink, TerminalSize};
use crate::visible;
use anyhow::Result;
use std::io::Stdout;
use std::time::Duration;

#[cfg(test)]
use mock_instant::Instant;
#[cfg(not(test))]
use std::time::Instant;

/// When a mutation triggers a repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepaintPolicy {
    /// Every mutation repaints the whole screen.
    #[default]
    Immediate,
    /// Mutations within `window` of the last repaint only mark the screen
    /// dirty; call [SplitScreen::flush] to draw what was skipped.
    Coalesce(Duration),
}

/// A log panel stacked on top of a progress panel, redrawn in full whenever
/// either changes.
pub struct SplitScreen<P: SizeProvider, S: LineSink> {
    size: P,
    sink: S,
    logs: LogBuffer,
    progress: ProgressRegistry,
    policy: RepaintPolicy,
    last_repaint: Option<Instant>,
    dirty: bool,
}

impl SplitScreen<TerminalSize, TerminalSink<Stdout>> {
    /// A screen drawn on stdout, sized from the attached terminal.
    pub fn stdout() -> Self {
        Self::new(TerminalSize, TerminalSink::stdout())
    }
}

impl<P: SizeProvider, S: LineSink> SplitScreen<P, S> {
    pub fn new(size: P, sink: S) -> Self {
        Self {
            size,
            sink,
            logs: LogBuffer::new(),
            progress: ProgressRegistry::new(),
            policy: RepaintPolicy::Immediate,
            last_repaint: None,
            dirty: false,
        }
    }

    pub fn with_repaint_policy(mut self, policy: RepaintPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn log(&mut self, message: &str) {
        self.append(Severity::Log, message);
    }

    pub fn error(&mut self, message: &str) {
        self.append(Severity::Error, message);
    }

    pub fn warn(&mut self, message: &str) {
        self.append(Severity::Warn, message);
    }

    pub fn success(&mut self, message: &str) {
        self.append(Severity::Success, message);
    }

    /// Sets `task` to `percent`. Any value is accepted; the bar clamps it.
    pub fn progress(&mut self, task: &str, percent: f64) {
        let size = self.size.size();
        self.progress
            .upsert(task, percent, layout::capacity(size.height));
        self.changed(size);
    }

    /// Clears the terminal and draws both panels from the current state.
    pub fn repaint(&mut self) -> Result<()> {
        let size = self.size.size();
        self.paint(size)
    }

    /// Draws any changes a coalescing policy held back.
    pub fn flush(&mut self) -> Result<()> {
        if self.dirty {
            self.repaint()?;
        }
        Ok(())
    }

    pub fn log_lines(&self) -> impl Iterator<Item = &str> {
        self.logs.iter()
    }

    pub fn progress_entries(&self) -> impl Iterator<Item = &ProgressEntry> {
        self.progress.iter()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn append(&mut self, severity: Severity, message: &str) {
        let size = self.size.size();
        self.logs
            .append(severity.format(message), layout::capacity(size.height));
        self.changed(size);
    }

    fn changed(&mut self, size: TermSize) {
        self.dirty = true;
        let due = match self.policy {
            RepaintPolicy::Immediate => true,
            RepaintPolicy::Coalesce(window) => self
                .last_repaint
                .map_or(true, |at| at.elapsed() >= window),
        };
        if !due {
            return;
        }
        if let Err(err) = self.paint(size) {
            log::error!("repaint failed: {err:#}");
        }
    }

    fn paint(&mut self, size: TermSize) -> Result<()> {
        let panels = Panels::for_height(size.height);
        let width = usize::from(size.width);
        log::trace!("repainting {}x{} as {panels:?}", size.width, size.height);

        self.sink.clear()?;
        for row in 0..panels.log_rows {
            let line = self.logs.get(row).unwrap_or_default();
            self.sink.print_line(&visible::clip(line, width))?;
        }
        if panels.separator {
            self.sink.print_line(&layout::separator(size.width))?;
        }
        for row in 0..panels.progress_rows {
            let line = self
                .progress
                .get(row)
                .map(|entry| layout::progress_line(entry.task(), entry.percent(), size.width))
                .unwrap_or_default();
            self.sink.print_line(&visible::clip(&line, width))?;
        }
        self.sink.flush()?;

        self.last_repaint = Some(Instant::now());
        self.dirty = false;
        Ok(())
    }
}

/*!
A terminal split into two halves: recent log lines on top, one progress bar
per named task below. Every call updates the buffers and repaints the whole
screen.

```no_run
use split_screen::SplitScreen;

let mut screen = SplitScreen::stdout();
screen.log("fetching sources");
screen.progress("Build", 40.0);
screen.warn("cache miss");
screen.progress("Build", 100.0);
screen.success("build finished");
```

Each half holds `height / 2` entries. Older log lines fall off the top, and a
task that reached 100% is dropped on the next progress update. When the height
is odd, a dashed row separates the halves.

Size and output are behind [SizeProvider] and [LineSink], so a screen can be
driven headlessly with a fixed [TermSize] and a `Vec<String>` that captures the
last frame.
*/
pub mod layout;
pub mod logging;
mod screen;
pub mod severity;
pub mod state;
pub mod terminal;
pub mod visible;

pub use screen::{RepaintPolicy, SplitScreen};
pub use severity::Severity;
pub use state::ProgressEntry;
pub use terminal::{LineSink, SizeProvider, TermSize, TerminalSink, TerminalSize};

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use indicatif::{ProgressBar, ProgressStyle};

static SPINNER: Mutex<Option<ProgressBar>> = Mutex::new(None);

fn current() -> Option<ProgressBar> {
    SPINNER
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

fn new_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Shows the spinner with `msg`, creating it if none is running.
pub fn start(msg: String) {
    let mut slot = SPINNER.lock().unwrap_or_else(PoisonError::into_inner);
    slot.get_or_insert_with(new_spinner).set_message(msg);
}

pub fn stop() {
    let pb = SPINNER.lock().unwrap_or_else(PoisonError::into_inner).take();
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
}

/// Runs `f` with the spinner line hidden.
pub fn suspend<F: FnOnce() -> R, R>(f: F) -> R {
    match current() {
        Some(pb) => pb.suspend(f),
        None => f(),
    }
}

/// Log sink for raw mode.
///
/// Raw mode turns off the newline translation of the tty, so every `\n` is
/// written as `\r\n`. The current line is cleared first so output never lands
/// on top of an open settings form.
pub struct TerminalWriter;

impl Write for TerminalWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf).replace("\r\n", "\n").replace('\n', "\r\n");

        suspend(|| {
            let mut stderr = io::stderr().lock();
            queue!(stderr, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
            stderr.write_all(text.as_bytes())?;
            stderr.flush()
        })?;

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

use std::thread;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

/// What a key press asks for on the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Check,
    OpenSettings,
    Exit,
}

pub fn action_for(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Exit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('c') | KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Check),
        KeyCode::Char('s') => Some(Action::OpenSettings),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Exit),
        _ => None,
    }
}

/// Keeps the terminal in raw mode for as long as it lives.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enable() -> std::io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Forwards key presses to `tx` from a dedicated thread.
///
/// The thread ends when the receiver is dropped or the terminal stops
/// delivering events; in the latter case `closed` is sent last.
pub fn spawn_key_reader<T, F>(tx: UnboundedSender<T>, wrap: F, closed: T)
where
    T: Send + 'static,
    F: Fn(KeyEvent) -> T + Send + 'static,
{
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx.send(wrap(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("terminal input closed: {e}");
                    let _ = tx.send(closed);
                    break;
                }
            }
        }
    });
}

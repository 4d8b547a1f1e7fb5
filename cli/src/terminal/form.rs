//! Two-field settings form edited in place on a single terminal line.
//!
//! * `Tab`, arrow keys, or `Enter` on the host field move between fields.
//! * `Enter` on the port field submits, `Esc` cancels, `Ctrl-C` exits.
//! * The port field only takes digits.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pinger_common::target::{Target, TargetCandidate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Host,
    Port,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Editing,
    Submitted(TargetCandidate),
    Cancelled,
    Exit,
}

#[derive(Debug, Clone)]
pub struct SettingsForm {
    host: String,
    port: String,
    field: Field,
}

impl SettingsForm {
    pub fn new(target: &Target) -> Self {
        Self {
            host: target.host.clone(),
            port: target.port.to_string(),
            field: Field::Host,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> FormOutcome {
        let ctrl: bool = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => FormOutcome::Cancelled,
            KeyCode::Char('c') if ctrl => FormOutcome::Exit,
            KeyCode::Enter => match self.field {
                Field::Host => {
                    self.field = Field::Port;
                    FormOutcome::Editing
                }
                Field::Port => FormOutcome::Submitted(TargetCandidate::from_fields(&self.host, &self.port)),
            },
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.toggle_field();
                FormOutcome::Editing
            }
            KeyCode::Backspace => {
                self.active_mut().pop();
                FormOutcome::Editing
            }
            KeyCode::Char(c) if !ctrl => {
                self.insert(c);
                FormOutcome::Editing
            }
            _ => FormOutcome::Editing,
        }
    }

    fn toggle_field(&mut self) {
        self.field = match self.field {
            Field::Host => Field::Port,
            Field::Port => Field::Host,
        };
    }

    fn insert(&mut self, c: char) {
        match self.field {
            Field::Host if !c.is_whitespace() => self.host.push(c),
            Field::Port if c.is_ascii_digit() => self.port.push(c),
            _ => {}
        }
    }

    fn active_mut(&mut self) -> &mut String {
        match self.field {
            Field::Host => &mut self.host,
            Field::Port => &mut self.port,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

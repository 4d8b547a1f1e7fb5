use std::io;

use colored::*;
use crossterm::cursor::MoveToColumn;
use crossterm::execute;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use pinger_common::target::Target;
use pinger_common::{failure, success};
use pinger_core::indicator::IndicatorState;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;
use crate::terminal::form::{Field, SettingsForm};
use crate::terminal::logging::PRINT_TARGET;

pub const TOTAL_WIDTH: usize = 64;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn banner(q_level: u8) {
    if q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ PINGER v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.color(colors::PRIMARY).bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).color(colors::SEPARATOR);

    print(&format!("{sep}{text}{sep}"));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right)
    )
    .color(colors::SEPARATOR);

    print(&format!("{}", line));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}

pub fn key_help(q_level: u8) {
    if q_level > 0 {
        return;
    }

    let keys: String = [("c", "check"), ("s", "settings"), ("q", "exit")]
        .into_iter()
        .map(|(key, what)| format!("{} {}", key.color(colors::PRIMARY).bold(), what.color(colors::SEPARATOR)))
        .collect::<Vec<_>>()
        .join("   ");

    centerln(&keys);
}

/// The target label, colored by the indicator state.
pub fn target_line(target: &Target, state: IndicatorState) {
    let color: Color = match state {
        IndicatorState::Neutral => colors::NEUTRAL,
        IndicatorState::Reachable => colors::REACHABLE,
        IndicatorState::Unreachable => colors::UNREACHABLE,
    };
    let dot: ColoredString = "●".color(color);
    let label: ColoredString = format!(" {}: {} ", target.host, target.port)
        .color(color)
        .on_color(colors::ACCENT);

    print(&format!("{dot} {label}"));
}

pub fn probe_outcome(target: &Target, reachable: bool) {
    if reachable {
        success!("{target} is available");
    } else {
        failure!("{target} is not available");
    }
}

pub fn settings_saved(target: &Target) {
    success!("Saved {target}");
}

pub fn invalid_port(reason: impl std::fmt::Display) {
    failure!("Invalid port: {reason}");
}

/// Draws the settings form over the current line, leaving the cursor on it.
pub fn form(form: &SettingsForm) -> io::Result<()> {
    let field = |name: &str, value: &str, active: bool| -> String {
        let value: ColoredString = if active {
            format!("{value}_").white().bold().underline()
        } else {
            value.color(colors::SEPARATOR)
        };
        format!("{} {}", format!("{name}:").color(colors::PRIMARY), value)
    };

    let line: String = format!(
        "{} {}  {}  {}",
        "⚙".color(colors::PRIMARY),
        field("host", form.host(), form.field() == Field::Host),
        field("port", form.port(), form.field() == Field::Port),
        "(enter save, esc cancel)".color(colors::SEPARATOR),
    );

    execute!(
        io::stderr(),
        MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        Print(line)
    )
}

pub fn clear_line() -> io::Result<()> {
    execute!(io::stderr(), MoveToColumn(0), Clear(ClearType::CurrentLine))
}

//! Interactive event loop.
//!
//! Key presses (from the input thread) and finished probes (from runtime
//! tasks) arrive on one channel. Probes never run on the loop itself, so keys
//! are handled while a check is still waiting for its timeout.

use std::time::Instant;

use anyhow::Context;
use crossterm::event::KeyEvent;
use pinger_common::config::Config;
use pinger_core::Session;
use pinger_core::indicator::Indicator;
use pinger_core::prober::ProbeResult;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, warn};

use crate::terminal::form::{FormOutcome, SettingsForm};
use crate::terminal::input::{self, Action, RawModeGuard};
use crate::terminal::{print, spinner};

pub enum AppEvent {
    Key(KeyEvent),
    InputClosed,
    /// `None` when the probe task died before reporting.
    ProbeFinished(Option<ProbeResult>),
}

enum Mode {
    Normal,
    Editing(SettingsForm),
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

struct App {
    session: Session,
    indicator: Indicator,
    mode: Mode,
    in_flight: usize,
    tx: UnboundedSender<AppEvent>,
}

pub async fn run(session: Session, cfg: &Config) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    let raw_mode = RawModeGuard::enable().context("pinger needs an interactive terminal")?;
    input::spawn_key_reader(tx.clone(), AppEvent::Key, AppEvent::InputClosed);

    let mut app = App::new(session, cfg, tx);

    print::header("ready", cfg.quiet);
    print::key_help(cfg.quiet);
    app.show_target();

    loop {
        let deadline: Option<Instant> = app.indicator.deadline();

        let event: AppEvent = tokio::select! {
            event = rx.recv() => match event {
                Some(AppEvent::InputClosed) | None => break,
                Some(event) => event,
            },
            _ = wait_until(deadline) => {
                app.revert_indicator();
                continue;
            }
        };

        if let Flow::Exit = app.handle(event) {
            spinner::stop();
            drop(raw_mode);
            app.session.on_exit_requested();
        }
    }

    spinner::stop();
    Ok(())
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

impl App {
    fn new(session: Session, cfg: &Config, tx: UnboundedSender<AppEvent>) -> Self {
        Self {
            session,
            indicator: Indicator::new(cfg.indicator_reset),
            mode: Mode::Normal,
            in_flight: 0,
            tx,
        }
    }

    fn handle(&mut self, event: AppEvent) -> Flow {
        match event {
            AppEvent::Key(key) => self.handle_key(&key),
            AppEvent::InputClosed => Flow::Exit,
            AppEvent::ProbeFinished(result) => {
                self.finish_check(result);
                Flow::Continue
            }
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Flow {
        if let Mode::Editing(form) = &mut self.mode {
            let outcome: FormOutcome = form.handle_key(key);
            return self.handle_form(outcome);
        }

        match input::action_for(key) {
            Some(Action::Check) => self.start_check(),
            Some(Action::OpenSettings) => self.open_settings(),
            Some(Action::Exit) => return Flow::Exit,
            None => {}
        }
        Flow::Continue
    }

    fn handle_form(&mut self, outcome: FormOutcome) -> Flow {
        match outcome {
            FormOutcome::Exit => return Flow::Exit,
            FormOutcome::Editing => self.redraw_form(),
            FormOutcome::Cancelled => {
                debug!("settings edit cancelled");
                self.close_settings();
            }
            FormOutcome::Submitted(candidate) => match self.session.on_settings_saved(candidate) {
                Ok(target) => {
                    self.close_settings();
                    print::settings_saved(&target);
                    self.show_target();
                }
                Err(e) => {
                    print::invalid_port(e);
                    self.redraw_form();
                }
            },
        }

        Flow::Continue
    }

    fn start_check(&mut self) {
        self.in_flight += 1;
        spinner::start(format!("checking {}", self.session.target()));

        let handle = self.session.spawn_check();
        let tx: UnboundedSender<AppEvent> = self.tx.clone();

        tokio::spawn(async move {
            let result: Option<ProbeResult> = match handle.await {
                Ok(result) => Some(result),
                Err(e) => {
                    warn!("check task failed: {e}");
                    None
                }
            };
            let _ = tx.send(AppEvent::ProbeFinished(result));
        });
    }

    fn finish_check(&mut self, result: Option<ProbeResult>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.in_flight == 0 {
            spinner::stop();
        }

        if let Some(result) = result {
            print::probe_outcome(&result.target, result.reachable);

            let now: Instant = Instant::now();
            self.indicator.show(result.reachable, now);
            print::target_line(&result.target, self.indicator.state(now));
        }

        if let Mode::Editing(_) = self.mode {
            self.redraw_form();
        }
    }

    fn open_settings(&mut self) {
        spinner::stop();
        self.mode = Mode::Editing(SettingsForm::new(&self.session.target()));
        self.redraw_form();
    }

    fn close_settings(&mut self) {
        self.mode = Mode::Normal;
        if let Err(e) = print::clear_line() {
            debug!("could not clear form line: {e}");
        }
        if self.in_flight > 0 {
            spinner::start(format!("checking {}", self.session.target()));
        }
    }

    fn redraw_form(&self) {
        if let Mode::Editing(form) = &self.mode {
            if let Err(e) = print::form(form) {
                warn!("could not draw settings form: {e}");
            }
        }
    }

    fn revert_indicator(&mut self) {
        let now: Instant = Instant::now();
        if self.indicator.expire(now) {
            print::target_line(&self.session.target(), self.indicator.state(now));
            self.redraw_form();
        }
    }

    fn show_target(&self) {
        print::target_line(&self.session.target(), self.indicator.state(Instant::now()));
    }
}

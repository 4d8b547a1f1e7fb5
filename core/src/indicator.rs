//! Outcome indicator.
//!
//! Shows the result of the latest check for a fixed period, then falls back to
//! [`IndicatorState::Neutral`]. A new result restarts the period.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorState {
    Neutral,
    Reachable,
    Unreachable,
}

impl From<bool> for IndicatorState {
    fn from(reachable: bool) -> Self {
        if reachable {
            IndicatorState::Reachable
        } else {
            IndicatorState::Unreachable
        }
    }
}

#[derive(Debug, Clone)]
pub struct Indicator {
    reset_after: Duration,
    shown: Option<(IndicatorState, Instant)>,
}

impl Indicator {
    pub fn new(reset_after: Duration) -> Self {
        Self {
            reset_after,
            shown: None,
        }
    }

    pub fn show(&mut self, reachable: bool, now: Instant) {
        self.shown = Some((IndicatorState::from(reachable), now + self.reset_after));
    }

    pub fn state(&self, now: Instant) -> IndicatorState {
        match self.shown {
            Some((state, deadline)) if now < deadline => state,
            _ => IndicatorState::Neutral,
        }
    }

    /// When the current outcome is due to revert, if one is showing.
    pub fn deadline(&self) -> Option<Instant> {
        self.shown.map(|(_, deadline)| deadline)
    }

    /// Drops an outcome whose period has passed. Returns `true` if it did.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.shown {
            Some((_, deadline)) if now >= deadline => {
                self.shown = None;
                true
            }
            _ => false,
        }
    }
}

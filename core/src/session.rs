//! # Check Session
//!
//! The state object a front end drives.
//!
//! A [`Session`] owns the current [`Target`] and the collaborators needed to
//! act on it. Front ends translate user actions into its three entry points:
//!
//! 1. [`Session::on_check_requested`] / [`Session::spawn_check`] when the user
//!    asks for a reachability check.
//! 2. [`Session::on_settings_saved`] when an edited target is submitted.
//! 3. [`Session::on_exit_requested`] when the user wants out.
//!
//! Probes clone the target when they start, so an edit committed while a
//! probe is in flight never changes what that probe reports against.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use pinger_common::error::ValidationError;
use pinger_common::settings::SettingsRepository;
use pinger_common::target::{Target, TargetCandidate};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::prober::{self, ProbeResult, Prober};

pub struct Session {
    repo: Box<dyn SettingsRepository>,
    prober: Arc<dyn Prober>,
    target: RwLock<Target>,
    /// Serializes commits so storage and memory see edits in the same order.
    commit: Mutex<()>,
}

impl Session {
    /// Creates a session whose target is read once from `repo`.
    pub fn new(repo: Box<dyn SettingsRepository>, prober: Arc<dyn Prober>) -> Self {
        let target: Target = repo.load();
        debug!(%target, "session target loaded");

        Self {
            repo,
            prober,
            target: RwLock::new(target),
            commit: Mutex::new(()),
        }
    }

    /// Replaces the in-memory target without touching storage.
    pub fn override_target(&self, target: Target) {
        info!("using {target} for this session only");
        *self.target.write().unwrap_or_else(PoisonError::into_inner) = target;
    }

    /// Snapshot of the current target.
    pub fn target(&self) -> Target {
        self.target
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub async fn on_check_requested(&self) -> ProbeResult {
        let target: Target = self.target();
        prober::run_probe(self.prober.as_ref(), target).await
    }

    /// Starts a check on the runtime and returns immediately.
    ///
    /// Overlapping checks are independent; none is de-duplicated or cancelled.
    pub fn spawn_check(&self) -> JoinHandle<ProbeResult> {
        let target: Target = self.target();
        let prober: Arc<dyn Prober> = Arc::clone(&self.prober);

        tokio::spawn(async move { prober::run_probe(prober.as_ref(), target).await })
    }

    /// Validates and commits an edited target.
    ///
    /// On a validation error nothing changes, neither in memory nor in storage.
    /// A storage failure is logged but the new target stays in effect for the
    /// rest of the session.
    pub fn on_settings_saved(&self, candidate: TargetCandidate) -> Result<Target, ValidationError> {
        let target: Target = candidate.validate().inspect_err(|e| {
            debug!("rejected settings edit: {e}");
        })?;

        let _commit = self.commit.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = self.repo.save(&target) {
            warn!("settings were not persisted: {e}");
        }
        *self.target.write().unwrap_or_else(PoisonError::into_inner) = target.clone();

        debug!(%target, "settings committed");
        Ok(target)
    }

    /// Terminates the process with status 0 without any further shutdown work.
    ///
    /// Callers must restore whatever terminal state they changed beforehand.
    pub fn on_exit_requested(&self) -> ! {
        info!("exiting");
        std::process::exit(0)
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

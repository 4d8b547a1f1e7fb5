use std::path::PathBuf;
use std::time::Duration;

use crate::target::Target;

/// Connection-establishment bound for a single probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(1500);

/// How long the indicator keeps its outcome color before turning neutral.
pub const INDICATOR_RESET_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone)]
pub struct Config {
    /// Where the settings file lives. `None` falls back to the platform config dir.
    pub settings_path: Option<PathBuf>,
    /// Keeps the target in memory only; edits are lost on exit.
    pub ephemeral: bool,
    /// Target used for this session instead of the stored one. Never persisted.
    pub target_override: Option<Target>,
    pub probe_timeout: Duration,
    pub indicator_reset: Duration,
    pub quiet: u8,
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings_path: None,
            ephemeral: false,
            target_override: None,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            indicator_reset: INDICATOR_RESET_DELAY,
            quiet: 0,
            verbose: 0,
        }
    }
}

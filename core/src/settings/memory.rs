use std::sync::{Mutex, PoisonError};

use pinger_common::error::SettingsError;
use pinger_common::settings::SettingsRepository;
use pinger_common::target::Target;

/// Process-lifetime target storage. Nothing is written to disk.
#[derive(Debug, Default)]
pub struct MemorySettingsRepo {
    stored: Mutex<Option<Target>>,
}

impl MemorySettingsRepo {
    pub fn with_target(target: Target) -> Self {
        Self {
            stored: Mutex::new(Some(target)),
        }
    }
}

impl SettingsRepository for MemorySettingsRepo {
    fn load(&self) -> Target {
        self.stored
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .unwrap_or_default()
    }

    fn save(&self, target: &Target) -> Result<(), SettingsError> {
        *self.stored.lock().unwrap_or_else(PoisonError::into_inner) = Some(target.clone());
        Ok(())
    }
}

//! Storage contract for the current [`Target`].

use crate::error::SettingsError;
use crate::target::Target;

/// Durable holder of the current target.
///
/// Implementations must make `save` atomic for the host/port pair: a later
/// `load` sees either the old pair or the new one, never a mix.
pub trait SettingsRepository: Send + Sync {
    /// Returns the stored target, or [`Target::default`] when nothing usable
    /// has been stored. Absence is not an error.
    fn load(&self) -> Target;

    /// Replaces the stored target.
    fn save(&self, target: &Target) -> Result<(), SettingsError>;
}

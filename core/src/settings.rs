//! Storage adapters for [`SettingsRepository`].
//!
//! * [`FileSettingsRepo`] keeps the target in a TOML file and survives restarts.
//! * [`MemorySettingsRepo`] keeps it for the lifetime of the process only.

use pinger_common::config::Config;
use pinger_common::error::SettingsError;
use pinger_common::settings::SettingsRepository;

mod file;
mod memory;

pub use file::FileSettingsRepo;
pub use memory::MemorySettingsRepo;

/// Picks the storage adapter described by `cfg`.
pub fn open_repository(cfg: &Config) -> Result<Box<dyn SettingsRepository>, SettingsError> {
    if cfg.ephemeral {
        return Ok(Box::new(MemorySettingsRepo::default()));
    }

    let repo: FileSettingsRepo = match &cfg.settings_path {
        Some(path) => FileSettingsRepo::new(path.clone()),
        None => FileSettingsRepo::default_location()?,
    };

    Ok(Box::new(repo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinger_common::target::Target;

    #[test]
    fn ephemeral_config_uses_memory() {
        let cfg = Config {
            ephemeral: true,
            ..Config::default()
        };
        let repo = open_repository(&cfg).unwrap();

        repo.save(&Target::new("example.com", 22)).unwrap();
        assert_eq!(repo.load(), Target::new("example.com", 22));
    }

    #[test]
    fn explicit_path_uses_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pinger.toml");
        let cfg = Config {
            settings_path: Some(path.clone()),
            ..Config::default()
        };
        let repo = open_repository(&cfg).unwrap();

        repo.save(&Target::new("example.com", 22)).unwrap();
        assert!(path.exists());
    }
}

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use pinger_common::error::SettingsError;
use pinger_common::settings::SettingsRepository;
use pinger_common::target::{DEFAULT_HOST, DEFAULT_PORT, Target, validate_port};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const SETTINGS_FILE: &str = "settings.toml";

/// On-disk shape of the settings file.
///
/// Both keys are optional so a file missing one of them still yields the
/// other; the missing one takes its default.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    port: Option<i64>,
}

impl StoredSettings {
    fn into_target(self) -> Target {
        let host: String = self.host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port: u16 = match self.port {
            Some(raw) => validate_port(raw).unwrap_or_else(|e| {
                warn!("stored {e}, falling back to {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };
        Target { host, port }
    }
}

impl From<&Target> for StoredSettings {
    fn from(target: &Target) -> Self {
        Self {
            host: Some(target.host.clone()),
            port: Some(i64::from(target.port)),
        }
    }
}

/// TOML-file backed target storage.
///
/// Writes go to a sibling `*.tmp` file that is then renamed over the real one,
/// so a reader never sees a half-written pair.
#[derive(Debug, Clone)]
pub struct FileSettingsRepo {
    path: PathBuf,
}

impl FileSettingsRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `settings.toml` inside the platform configuration directory.
    pub fn default_location() -> Result<Self, SettingsError> {
        let dirs = ProjectDirs::from("com", "galeopsis", "pinger").ok_or(SettingsError::NoConfigDir)?;
        Ok(Self::new(dirs.config_dir().join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name: OsString = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from(SETTINGS_FILE));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read(&self) -> Result<Option<StoredSettings>, SettingsError> {
        let contents: String = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SettingsError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        Ok(Some(toml::from_str(&contents)?))
    }
}

impl SettingsRepository for FileSettingsRepo {
    fn load(&self) -> Target {
        match self.read() {
            Ok(Some(stored)) => stored.into_target(),
            Ok(None) => {
                debug!(path = %self.path.display(), "no stored settings, using defaults");
                Target::default()
            }
            Err(e) => {
                warn!("ignoring unusable settings at {}: {e}", self.path.display());
                Target::default()
            }
        }
    }

    fn save(&self, target: &Target) -> Result<(), SettingsError> {
        let contents: String = toml::to_string(&StoredSettings::from(target))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let tmp: PathBuf = self.tmp_path();
        fs::write(&tmp, contents).map_err(|source| SettingsError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(%target, path = %self.path.display(), "settings saved");
        Ok(())
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

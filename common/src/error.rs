use std::path::PathBuf;

use thiserror::Error;

/// Rejection of an edited target before it is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("port {0} is outside 1..=65535")]
    PortOutOfRange(i64),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not determine a configuration directory")]
    NoConfigDir,
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not encode settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

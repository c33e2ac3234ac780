//! Settings errors

use crate::persistence::PersistenceError;
use crate::SettingKey;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure applying or loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Unknown setting: {0}")]
    UnknownKey(SettingKey),

    #[error("Setting {key} expects {expected}, got {found}")]
    TypeMismatch {
        key: SettingKey,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Failed to access settings file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

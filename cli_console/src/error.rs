//! Host-level errors

use services_logger::UnknownLevel;
use services_settings::SettingsError;
use std::io;
use thiserror::Error;

/// Console host error types
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Invalid log level setting: {0}")]
    LogLevel(#[from] UnknownLevel),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

//! # Settings Registry Service
//!
//! Typed settings for the console host.
//!
//! ## Philosophy
//!
//! - **Typed settings**: All settings have explicit types, not stringly-typed
//! - **Layered**: Read-only defaults + overrides
//! - **Closed key set**: An override must name a registered key and match
//!   the type of its default
//! - **Deterministic**: Settings are serializable and reproducible
//!
//! ## Example
//!
//! ```
//! use services_settings::{create_default_registry, keys, SettingValue};
//!
//! let mut registry = create_default_registry();
//! registry
//!     .set_override(keys::CONSOLE_SCROLLBACK_LINES, SettingValue::Integer(50))
//!     .unwrap();
//! assert_eq!(registry.integer(keys::CONSOLE_SCROLLBACK_LINES), Some(50));
//! ```

pub mod error;
pub mod persistence;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub use error::{SettingsError, SettingsResult};

/// Setting key (path-like identifier)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SettingKey(String);

impl SettingKey {
    /// Creates a new setting key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks if this key starts with the given prefix
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SettingKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Setting value (strongly typed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingValue {
    /// Boolean value
    Boolean(bool),
    /// Integer value
    Integer(i64),
    /// String value
    String(String),
}

impl SettingValue {
    /// Name of the value's type
    pub fn type_name(&self) -> &'static str {
        match self {
            SettingValue::Boolean(_) => "boolean",
            SettingValue::Integer(_) => "integer",
            SettingValue::String(_) => "string",
        }
    }

    /// Tries to get as boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            SettingValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Tries to get as integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            SettingValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Tries to get as string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            SettingValue::String(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Boolean(v) => write!(f, "{}", v),
            SettingValue::Integer(v) => write!(f, "{}", v),
            SettingValue::String(v) => write!(f, "{}", v),
        }
    }
}

/// Settings registry
#[derive(Debug, Clone, Default)]
pub struct SettingsRegistry {
    /// Default settings (read-only)
    defaults: BTreeMap<SettingKey, SettingValue>,
    /// Overrides of registered defaults
    overrides: BTreeMap<SettingKey, SettingValue>,
}

impl SettingsRegistry {
    /// Creates an empty settings registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a default setting
    pub fn register_default(&mut self, key: impl Into<SettingKey>, value: SettingValue) {
        self.defaults.insert(key.into(), value);
    }

    /// Sets an override
    ///
    /// The key must have a registered default of the same type.
    pub fn set_override(
        &mut self,
        key: impl Into<SettingKey>,
        value: SettingValue,
    ) -> SettingsResult<()> {
        let key = key.into();
        let default = self
            .defaults
            .get(&key)
            .ok_or_else(|| SettingsError::UnknownKey(key.clone()))?;
        if default.type_name() != value.type_name() {
            return Err(SettingsError::TypeMismatch {
                expected: default.type_name(),
                found: value.type_name(),
                key,
            });
        }
        self.overrides.insert(key, value);
        Ok(())
    }

    /// Removes an override
    pub fn remove_override(&mut self, key: &SettingKey) -> bool {
        self.overrides.remove(key).is_some()
    }

    /// Gets the effective setting value (override or default)
    pub fn get(&self, key: impl Into<SettingKey>) -> Option<&SettingValue> {
        let key = key.into();
        self.overrides.get(&key).or_else(|| self.defaults.get(&key))
    }

    /// Effective value as a boolean
    pub fn boolean(&self, key: impl Into<SettingKey>) -> Option<bool> {
        self.get(key).and_then(SettingValue::as_boolean)
    }

    /// Effective value as an integer
    pub fn integer(&self, key: impl Into<SettingKey>) -> Option<i64> {
        self.get(key).and_then(SettingValue::as_integer)
    }

    /// Effective value as a string
    pub fn string(&self, key: impl Into<SettingKey>) -> Option<&str> {
        self.get(key).and_then(SettingValue::as_string)
    }

    /// Returns all overridden keys
    pub fn list_overrides(&self) -> Vec<SettingKey> {
        self.overrides.keys().cloned().collect()
    }

    /// Returns all effective settings with a given prefix
    pub fn list_with_prefix(&self, prefix: &str) -> Vec<(SettingKey, SettingValue)> {
        self.defaults
            .keys()
            .filter(|key| key.starts_with(prefix))
            .filter_map(|key| Some((key.clone(), self.get(key.clone())?.clone())))
            .collect()
    }

    /// Exports all overrides for persistence
    pub fn export_overrides(&self) -> BTreeMap<SettingKey, SettingValue> {
        self.overrides.clone()
    }

    /// Applies overrides (merges with existing)
    ///
    /// Stops at the first invalid entry; entries applied before it remain.
    pub fn apply_overrides(
        &mut self,
        overrides: BTreeMap<SettingKey, SettingValue>,
    ) -> SettingsResult<()> {
        for (key, value) in overrides {
            self.set_override(key, value)?;
        }
        Ok(())
    }
}

/// Setting keys
pub mod keys {
    pub const CONSOLE_SCROLLBACK_LINES: &str = "console.scrollback_lines";
    pub const CONSOLE_SHOW_RESULT: &str = "console.show_result";
    pub const CONSOLE_SHOW_BANNER: &str = "console.show_banner";
    pub const EDITOR_LOAD_SAMPLE: &str = "editor.load_sample";
    pub const LOG_LEVEL: &str = "log.level";
}

/// Creates a settings registry with default settings
pub fn create_default_registry() -> SettingsRegistry {
    let mut registry = SettingsRegistry::new();

    // Console settings
    registry.register_default(keys::CONSOLE_SCROLLBACK_LINES, SettingValue::Integer(1000));
    registry.register_default(keys::CONSOLE_SHOW_RESULT, SettingValue::Boolean(true));
    registry.register_default(keys::CONSOLE_SHOW_BANNER, SettingValue::Boolean(true));

    // Editor settings
    registry.register_default(keys::EDITOR_LOAD_SAMPLE, SettingValue::Boolean(true));

    // Logging
    registry.register_default(keys::LOG_LEVEL, SettingValue::String("info".to_string()));

    registry
}

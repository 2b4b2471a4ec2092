//! Local durable key-value storage for user preferences.
//!
//! A single well-known key records that onboarding has been shown at least
//! once. Writes are synchronous, single-key, last-writer-wins.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::config::prefs::prefs_path;
use crate::error::AppError;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Well-known key for the onboarding completion flag.
pub const WELCOME_COMPLETED: &str = "welcomeCompleted";

/// Durable boolean-flag storage.
pub trait PreferenceStore: Send {
    /// Persist `value` under `key`. Repeated writes of the same value are
    /// harmless.
    fn set_flag(&mut self, key: &str, value: bool) -> Result<(), DomainError>;

    /// Read the flag under `key`; missing keys read as false.
    fn flag(&self, key: &str) -> Result<bool, DomainError>;
}

/// File-backed preference store holding a flat JSON map of flags.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the file location from the environment.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::new(prefs_path()?))
    }

    fn load(&self) -> Result<BTreeMap<String, bool>, DomainError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => {
                return Err(DomainError::infra(
                    InfraErrorKind::Storage,
                    format!("read {}: {err}", self.path.display()),
                ))
            }
        };
        serde_json::from_str(&raw).map_err(|err| {
            DomainError::infra(
                InfraErrorKind::Storage,
                format!("parse {}: {err}", self.path.display()),
            )
        })
    }
}

impl PreferenceStore for FilePreferences {
    fn set_flag(&mut self, key: &str, value: bool) -> Result<(), DomainError> {
        let mut flags = self.load()?;
        flags.insert(key.to_string(), value);
        let raw = serde_json::to_string_pretty(&flags).map_err(|err| {
            DomainError::infra(InfraErrorKind::Storage, format!("serialize flags: {err}"))
        })?;
        fs::write(&self.path, raw).map_err(|err| {
            DomainError::infra(
                InfraErrorKind::Storage,
                format!("write {}: {err}", self.path.display()),
            )
        })
    }

    fn flag(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.load()?.get(key).copied().unwrap_or(false))
    }
}

/// In-memory store for hosts that keep preferences elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    flags: BTreeMap<String, bool>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn set_flag(&mut self, key: &str, value: bool) -> Result<(), DomainError> {
        self.flags.insert(key.to_string(), value);
        Ok(())
    }

    fn flag(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.flags.get(key).copied().unwrap_or(false))
    }
}

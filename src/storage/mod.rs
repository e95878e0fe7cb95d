//! Persistence of settings, statistics and the round in progress
//!
//! Values are stored as JSON under three keys. Loading never fails: unreadable
//! or corrupt data is logged and replaced by defaults through the sanitizer.

mod file;
mod sanitize;
mod snapshot;

pub use file::{FileStorage, MemoryStorage};
pub use sanitize::{sanitize_round, sanitize_settings, sanitize_stats};
pub use snapshot::{EvaluationRecord, RoundSnapshot};

use crate::game::{Rules, SessionStats};
use crate::session::Session;
use crate::settings::Settings;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub const SETTINGS_KEY: &str = "settings";
pub const STATS_KEY: &str = "stats";
pub const ROUND_KEY: &str = "round";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode stored value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Key-value store holding whole JSON documents
pub trait Storage {
    /// Stored value for `key`, `None` when missing or unreadable
    fn read(&self, key: &str) -> Option<String>;

    /// Replace the value stored under `key`
    ///
    /// # Errors
    /// Returns `StorageError` if the value cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`; deleting a missing key is not an error
    ///
    /// # Errors
    /// Returns `StorageError` if the value exists but cannot be removed.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

fn read_json(storage: &dyn Storage, key: &str) -> Value {
    let Some(raw) = storage.read(key) else {
        debug!(key, "nothing stored");
        return Value::Null;
    };
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        warn!(key, error = %e, "stored value is not valid JSON, using defaults");
        Value::Null
    })
}

fn write_json<T: Serialize>(
    storage: &mut dyn Storage,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)?;
    storage.write(key, &json)
}

#[must_use]
pub fn load_settings(storage: &dyn Storage) -> Settings {
    sanitize_settings(&read_json(storage, SETTINGS_KEY))
}

#[must_use]
pub fn load_stats(storage: &dyn Storage) -> SessionStats {
    sanitize_stats(&read_json(storage, STATS_KEY))
}

/// Stored round, `None` if missing or beyond repair
#[must_use]
pub fn load_round(storage: &dyn Storage, rules: &Rules) -> Option<RoundSnapshot> {
    let value = read_json(storage, ROUND_KEY);
    if value.is_null() {
        return None;
    }
    let snapshot = sanitize_round(&value, rules);
    if snapshot.is_none() {
        warn!("stored round is inconsistent, starting a fresh one");
    }
    snapshot
}

/// Write every part of the session
///
/// # Errors
/// Returns the first `StorageError` encountered.
pub fn save_session(storage: &mut dyn Storage, session: &Session) -> Result<(), StorageError> {
    write_json(storage, SETTINGS_KEY, &session.settings)?;
    write_json(storage, STATS_KEY, &session.stats)?;
    write_json(
        storage,
        ROUND_KEY,
        &RoundSnapshot::capture(&session.round, session.settings.language),
    )
}

/// Delete the stored round, and with `everything` the settings and statistics too
///
/// # Errors
/// Returns the first `StorageError` encountered.
pub fn clear(storage: &mut dyn Storage, everything: bool) -> Result<(), StorageError> {
    storage.remove(ROUND_KEY)?;
    if everything {
        storage.remove(STATS_KEY)?;
        storage.remove(SETTINGS_KEY)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{GameMode, RoundState, RoundStatus};
    use crate::i18n::Language;
    use crate::settings::Theme;

    fn session() -> Session {
        let round = RoundState::new(Word::new("crane").unwrap(), GameMode::Daily, "2026-10-19", false);
        let settings = Settings {
            theme: Theme::Light,
            language: Language::En,
            ..Settings::default()
        };
        Session::new(round, settings, SessionStats::default())
    }

    #[test]
    fn empty_storage_loads_defaults() {
        let storage = MemoryStorage::new();
        assert_eq!(load_settings(&storage), Settings::default());
        assert_eq!(load_stats(&storage), SessionStats::default());
        assert_eq!(load_round(&storage, &Rules::default()), None);
    }

    #[test]
    fn corrupt_json_loads_defaults() {
        let mut storage = MemoryStorage::new();
        storage.write(SETTINGS_KEY, "{not json").unwrap();
        storage.write(ROUND_KEY, "[]").unwrap();
        assert_eq!(load_settings(&storage), Settings::default());
        assert_eq!(load_round(&storage, &Rules::default()), None);
    }

    #[test]
    fn saved_session_loads_back() {
        let mut storage = MemoryStorage::new();
        let session = session();
        save_session(&mut storage, &session).unwrap();

        assert_eq!(load_settings(&storage), session.settings);
        assert_eq!(load_stats(&storage), session.stats);

        let snapshot = load_round(&storage, &Rules::default()).unwrap();
        assert_eq!(snapshot.language, Language::En);
        assert_eq!(snapshot.status, RoundStatus::Playing);
        assert_eq!(snapshot.restore(), Some(session.round));
    }

    #[test]
    fn clear_keeps_stats_unless_everything() {
        let mut storage = MemoryStorage::new();
        save_session(&mut storage, &session()).unwrap();

        clear(&mut storage, false).unwrap();
        assert!(storage.read(ROUND_KEY).is_none());
        assert!(storage.read(STATS_KEY).is_some());

        clear(&mut storage, true).unwrap();
        assert!(storage.read(STATS_KEY).is_none());
        assert!(storage.read(SETTINGS_KEY).is_none());
    }
}

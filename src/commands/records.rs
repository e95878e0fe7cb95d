//! Commands that read or clear stored state without playing

use crate::game::{Rules, SessionStats, build_share_text};
use crate::settings::Settings;
use crate::storage::{self, Storage, StorageError};
use tracing::info;

/// Stored settings and statistics
#[must_use]
pub fn stored_records(storage: &dyn Storage) -> (Settings, SessionStats) {
    (storage::load_settings(storage), storage::load_stats(storage))
}

/// Share text of the stored round, `None` if there is none or it is unfinished
#[must_use]
pub fn stored_share_text(storage: &dyn Storage, rules: &Rules) -> Option<String> {
    let settings = storage::load_settings(storage);
    let round = storage::load_round(storage, rules)?.restore()?;
    build_share_text(
        &round,
        rules,
        settings.color_blind_mode,
        settings.language.strings(),
    )
}

/// Delete the stored round, and with `all` the statistics and settings as well
///
/// # Errors
///
/// Returns `StorageError` if a stored file cannot be removed.
pub fn reset(storage: &mut dyn Storage, all: bool) -> Result<(), StorageError> {
    storage::clear(storage, all)?;
    info!(all, "cleared stored state");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{GameMode, RoundState};
    use crate::i18n::Language;
    use crate::session::Session;
    use crate::storage::MemoryStorage;

    fn stored(round: RoundState) -> MemoryStorage {
        let mut storage = MemoryStorage::new();
        let settings = Settings {
            language: Language::En,
            ..Settings::default()
        };
        storage::save_session(&mut storage, &Session::new(round, settings, SessionStats::default()))
            .unwrap();
        storage
    }

    #[test]
    fn unfinished_round_has_no_share_text() {
        let round = RoundState::new(Word::new("crane").unwrap(), GameMode::Practice, "", false);
        let storage = stored(round);
        assert_eq!(stored_share_text(&storage, &Rules::default()), None);
    }

    #[test]
    fn empty_storage_has_default_records() {
        let (settings, stats) = stored_records(&MemoryStorage::new());
        assert_eq!(settings, Settings::default());
        assert_eq!(stats, SessionStats::default());
    }

    #[test]
    fn reset_all_clears_records() {
        let round = RoundState::new(Word::new("crane").unwrap(), GameMode::Practice, "", false);
        let mut storage = stored(round);
        reset(&mut storage, true).unwrap();
        assert_eq!(stored_records(&storage).0, Settings::default());
        assert_eq!(stored_share_text(&storage, &Rules::default()), None);
    }
}

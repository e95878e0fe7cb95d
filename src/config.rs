//! Runtime configuration: data directory and word lists

use crate::i18n::Language;
use crate::wordlists::{EmbeddedWords, loader::load_from_file};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Directory name under the platform data directory
pub const APP_DIR: &str = "wordle_game";

/// Log file written inside the data directory
pub const LOG_FILE: &str = "wordle_game.log";

/// Platform data directory, or `.wordle_game` when the platform has none
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".wordle_game"), |dir| dir.join(APP_DIR))
}

/// Embedded corpora, with one language replaced by a word list file
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds no valid word.
pub fn load_words(word_list: Option<&Path>, language: Language) -> Result<EmbeddedWords> {
    let words = EmbeddedWords::new().context("embedded word lists are empty")?;
    let Some(path) = word_list else {
        return Ok(words);
    };

    let custom = load_from_file(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    info!(path = %path.display(), count = custom.len(), language = language.code(), "loaded word list");
    words
        .with_words(language, custom)
        .with_context(|| format!("word list {} has no five-letter words", path.display()))
}

//! Word lists for the game
//!
//! Provides embedded per-language word lists compiled into the binary, and the
//! [`WordProvider`] interface the round state machine draws solutions from.

mod embedded;
pub mod loader;
mod provider;

pub use embedded::{WORDS_EN, WORDS_EN_COUNT, WORDS_PT, WORDS_PT_COUNT};
pub use provider::{EmbeddedWords, WordListError, WordProvider, daily_index};

//! Core domain types for the game
//!
//! Words, letter states and the guess evaluator. Everything here is pure and
//! independent of the round state machine.

mod evaluation;
mod letter_state;
mod word;

pub use evaluation::GuessEvaluation;
pub use letter_state::LetterState;
pub use word::{WORD_LENGTH, Word, WordError, fold_letter, normalize};

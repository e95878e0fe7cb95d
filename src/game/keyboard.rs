//! Keyboard hints folded from the evaluation history

use crate::core::{GuessEvaluation, LetterState};
use rustc_hash::FxHashMap;

/// Best known state of every letter guessed so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<u8, LetterState>,
}

impl KeyboardState {
    /// Fold `evaluations` into a best-known state per letter
    ///
    /// A letter keeps the highest-ranked state it ever received, so the result
    /// does not depend on evaluation order. Blank slots are ignored.
    #[must_use]
    pub fn aggregate<'a>(evaluations: impl IntoIterator<Item = &'a GuessEvaluation>) -> Self {
        let mut letters: FxHashMap<u8, LetterState> = FxHashMap::default();
        for evaluation in evaluations {
            for (letter, state) in evaluation.iter() {
                let Some(letter) = letter else { continue };
                let entry = letters.entry(letter).or_default();
                *entry = entry.merge(state);
            }
        }
        Self { letters }
    }

    /// State of an upper-case letter, `Empty` if never guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> LetterState {
        self.letters
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or_default()
    }

    /// Number of distinct letters with a known state
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

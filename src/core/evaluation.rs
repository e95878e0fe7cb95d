//! Guess evaluation
//!
//! Scores one guess against the solution, letter by letter:
//! - `Correct` = letter in the solution at this position
//! - `Present` = letter in the solution at another position
//! - `Absent`  = letter not in the solution, or every occurrence already matched
//! - `Empty`   = blank slot (guess was shorter than five letters)

use super::letter_state::LetterState;
use super::word::{WORD_LENGTH, Word, normalize};

/// Feedback for one submitted guess
///
/// Letters are upper-case ASCII; `None` is the blank sentinel used to pad
/// guesses shorter than [`WORD_LENGTH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessEvaluation {
    letters: [Option<u8>; WORD_LENGTH],
    states: [LetterState; WORD_LENGTH],
}

impl GuessEvaluation {
    /// Build an evaluation from already-known parts
    #[must_use]
    pub const fn from_parts(
        letters: [Option<u8>; WORD_LENGTH],
        states: [LetterState; WORD_LENGTH],
    ) -> Self {
        Self { letters, states }
    }

    /// Score `guess` against `solution`
    ///
    /// The guess is normalized, padded with blanks up to five letters and
    /// truncated beyond it.
    ///
    /// # Algorithm
    /// 1. Count every letter of the solution
    /// 2. First pass: mark exact position matches `Correct` and remove them from the pool
    /// 3. Second pass: blanks are `Empty`; letters still in the pool are `Present`
    ///    (consuming one); the rest are `Absent`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{GuessEvaluation, LetterState::*, Word};
    ///
    /// let solution = Word::new("crane").unwrap();
    /// let evaluation = GuessEvaluation::evaluate("trace", &solution);
    ///
    /// assert_eq!(evaluation.states(), &[Absent, Correct, Correct, Present, Correct]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &str, solution: &Word) -> Self {
        let mut letters = [None; WORD_LENGTH];
        for (slot, letter) in letters.iter_mut().zip(normalize(guess).bytes()) {
            *slot = Some(letter);
        }

        let mut states = [LetterState::Absent; WORD_LENGTH];
        let mut available = solution.char_counts();

        // First pass: exact position matches
        for (i, letter) in letters.iter().enumerate() {
            if *letter == Some(solution.char_at(i)) {
                states[i] = LetterState::Correct;
                if let Some(count) = available.get_mut(&solution.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: blanks, then letters still left in the pool
        for (i, letter) in letters.iter().enumerate() {
            if states[i] == LetterState::Correct {
                continue;
            }
            let Some(letter) = letter else {
                states[i] = LetterState::Empty;
                continue;
            };
            if let Some(count) = available.get_mut(letter)
                && *count > 0
            {
                states[i] = LetterState::Present;
                *count -= 1;
            }
        }

        Self { letters, states }
    }

    /// Letters of the guess, `None` for blank slots
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.letters
    }

    /// State of each slot
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.states
    }

    /// Iterate over `(letter, state)` pairs in position order
    pub fn iter(&self) -> impl Iterator<Item = (Option<u8>, LetterState)> + '_ {
        self.letters.iter().copied().zip(self.states.iter().copied())
    }

    /// Check if every slot is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.states.iter().all(|&state| state == LetterState::Correct)
    }

    /// The guessed text, blanks rendered as spaces
    #[must_use]
    pub fn text(&self) -> String {
        self.letters
            .iter()
            .map(|letter| letter.map_or(' ', char::from))
            .collect()
    }
}

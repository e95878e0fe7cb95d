//! Hard mode constraint checking
//!
//! In hard mode every new guess must reuse what earlier guesses revealed:
//! letters shown `Correct` must stay in place, and every letter shown
//! `Correct` or `Present` must appear at least as often as it was revealed.

use crate::core::{GuessEvaluation, LetterState, WORD_LENGTH, normalize};
use crate::i18n::Strings;

/// First constraint a candidate guess breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardModeViolation {
    /// Letter required at a 0-based position
    Position { position: usize, letter: u8 },
    /// Minimum number of occurrences of a letter
    Include { count: usize, letter: u8 },
}

impl HardModeViolation {
    /// Render through the active string catalog
    #[must_use]
    pub fn message(&self, strings: &dyn Strings) -> String {
        match *self {
            Self::Position { position, letter } => {
                strings.hard_mode_position(position + 1, char::from(letter))
            }
            Self::Include { count, letter } => {
                strings.hard_mode_include(count, char::from(letter))
            }
        }
    }
}

/// Constraints derived from the evaluation history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HardModeConstraints {
    positions: [Option<u8>; WORD_LENGTH],
    /// Letter and minimum count, in the order letters were first revealed
    counts: Vec<(u8, usize)>,
}

impl HardModeConstraints {
    /// Scan every prior evaluation
    ///
    /// Later evaluations never erase an earlier `Correct` slot, and required
    /// counts take the maximum over guesses rather than the sum.
    #[must_use]
    pub fn from_history(history: &[GuessEvaluation]) -> Self {
        let mut constraints = Self::default();

        for evaluation in history {
            let mut this_guess: Vec<(u8, usize)> = Vec::new();

            for (i, (letter, state)) in evaluation.iter().enumerate() {
                let Some(letter) = letter else { continue };
                if state == LetterState::Correct {
                    constraints.positions[i] = Some(letter);
                }
                if state.is_hit() {
                    match this_guess.iter_mut().find(|(l, _)| *l == letter) {
                        Some((_, count)) => *count += 1,
                        None => this_guess.push((letter, 1)),
                    }
                }
            }

            for (letter, count) in this_guess {
                match constraints.counts.iter_mut().find(|(l, _)| *l == letter) {
                    Some((_, required)) => *required = (*required).max(count),
                    None => constraints.counts.push((letter, count)),
                }
            }
        }

        constraints
    }

    /// Letter required at each position
    #[must_use]
    pub const fn positions(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.positions
    }

    /// Minimum occurrences per letter
    #[must_use]
    pub fn counts(&self) -> &[(u8, usize)] {
        &self.counts
    }

    /// Check a candidate guess
    ///
    /// Positions are checked first (lowest index wins); counts only once every
    /// position is satisfied.
    #[must_use]
    pub fn check(&self, candidate: &str) -> Option<HardModeViolation> {
        let mut letters = [None; WORD_LENGTH];
        for (slot, letter) in letters.iter_mut().zip(normalize(candidate).bytes()) {
            *slot = Some(letter);
        }

        for (position, (&required, &actual)) in self.positions.iter().zip(&letters).enumerate() {
            if let Some(letter) = required
                && actual != Some(letter)
            {
                return Some(HardModeViolation::Position { position, letter });
            }
        }

        self.counts.iter().find_map(|&(letter, count)| {
            let present = letters.iter().filter(|&&l| l == Some(letter)).count();
            (present < count).then_some(HardModeViolation::Include { count, letter })
        })
    }
}

/// Check `candidate` against everything `history` revealed
///
/// # Examples
/// ```
/// use wordle_game::core::{GuessEvaluation, Word};
/// use wordle_game::game::{HardModeViolation, validate_hard_mode};
///
/// let solution = Word::new("crane").unwrap();
/// let history = [GuessEvaluation::evaluate("cloud", &solution)];
///
/// assert_eq!(
///     validate_hard_mode("brave", &history),
///     Some(HardModeViolation::Position { position: 0, letter: b'C' })
/// );
/// assert_eq!(validate_hard_mode("crate", &history), None);
/// ```
#[must_use]
pub fn validate_hard_mode(candidate: &str, history: &[GuessEvaluation]) -> Option<HardModeViolation> {
    if history.is_empty() {
        return None;
    }
    HardModeConstraints::from_history(history).check(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::i18n::Language;

    fn history(solution: &str, guesses: &[&str]) -> Vec<GuessEvaluation> {
        let solution = Word::new(solution).unwrap();
        guesses
            .iter()
            .map(|guess| GuessEvaluation::evaluate(guess, &solution))
            .collect()
    }

    #[test]
    fn no_history_allows_anything() {
        assert_eq!(validate_hard_mode("zzzzz", &[]), None);
    }

    #[test]
    fn correct_letter_must_stay_in_place() {
        // AUDIO vs ABBEY: A correct at position 0
        let history = history("abbey", &["audio"]);
        assert_eq!(
            validate_hard_mode("beach", &history),
            Some(HardModeViolation::Position {
                position: 0,
                letter: b'A'
            })
        );
        assert_eq!(validate_hard_mode("alarm", &history), None);
    }

    #[test]
    fn lowest_position_is_reported_first() {
        // CRANE vs CRATE: C, R, A, E correct
        let history = history("crate", &["crane"]);
        assert_eq!(
            validate_hard_mode("trace", &history),
            Some(HardModeViolation::Position {
                position: 0,
                letter: b'C'
            })
        );
    }

    #[test]
    fn count_violation_after_positions_pass() {
        // SPEED vs ERASE: S, E, E present; P, D absent
        let history = history("erase", &["speed"]);
        let constraints = HardModeConstraints::from_history(&history);
        assert_eq!(constraints.counts(), &[(b'S', 1), (b'E', 2)]);

        // Has an S but only one E
        assert_eq!(
            validate_hard_mode("stare", &history),
            Some(HardModeViolation::Include {
                count: 2,
                letter: b'E'
            })
        );
        assert_eq!(validate_hard_mode("geese", &history), None);
    }

    #[test]
    fn repeated_letter_omitted_reports_count_not_position() {
        // EERIE vs GEESE: E correct at 1 and 4, the leading E present
        let history = history("geese", &["eerie"]);
        let constraints = HardModeConstraints::from_history(&history);
        assert_eq!(constraints.counts(), &[(b'E', 3)]);

        // TEASE keeps both positions but has only two E's
        assert_eq!(
            validate_hard_mode("tease", &history),
            Some(HardModeViolation::Include {
                count: 3,
                letter: b'E'
            })
        );
        assert_eq!(validate_hard_mode("geese", &history), None);
    }

    #[test]
    fn required_counts_take_maximum_not_sum() {
        // Two guesses each revealing one E must not require two E's
        let history = history("crane", &["geese", "tease"]);
        let constraints = HardModeConstraints::from_history(&history);
        assert_eq!(constraints.counts().iter().find(|(l, _)| *l == b'E'), Some(&(b'E', 1)));
    }

    #[test]
    fn later_guesses_do_not_erase_correct_positions() {
        let history = history("crane", &["cloud", "brick"]);
        let constraints = HardModeConstraints::from_history(&history);
        assert_eq!(constraints.positions()[0], Some(b'C'));
    }

    #[test]
    fn violation_messages_use_catalog() {
        let strings = Language::En.strings();
        let position = HardModeViolation::Position {
            position: 0,
            letter: b'A',
        };
        assert_eq!(
            position.message(strings),
            "Hard mode: position 1 must be A"
        );
        let include = HardModeViolation::Include {
            count: 1,
            letter: b'R',
        };
        assert_eq!(
            include.message(strings),
            "Hard mode: include at least 1 'R'"
        );
    }
}

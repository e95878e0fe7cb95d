//! On-disk shape of a round

use crate::core::{GuessEvaluation, LetterState, WORD_LENGTH, Word};
use crate::game::{GameMode, RoundState, RoundStatus};
use crate::i18n::Language;
use serde::{Deserialize, Serialize};

/// Stored evaluation: five one-letter strings (empty for a blank) and five states
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub letters: Vec<String>,
    pub states: Vec<LetterState>,
}

impl From<&GuessEvaluation> for EvaluationRecord {
    fn from(evaluation: &GuessEvaluation) -> Self {
        Self {
            letters: evaluation
                .letters()
                .iter()
                .map(|letter| letter.map(char::from).map(String::from).unwrap_or_default())
                .collect(),
            states: evaluation.states().to_vec(),
        }
    }
}

impl EvaluationRecord {
    /// Rebuild the evaluation, `None` unless both lists are five wide
    #[must_use]
    pub fn to_evaluation(&self) -> Option<GuessEvaluation> {
        if self.letters.len() != WORD_LENGTH || self.states.len() != WORD_LENGTH {
            return None;
        }
        let mut letters = [None; WORD_LENGTH];
        for (slot, letter) in letters.iter_mut().zip(&self.letters) {
            *slot = letter.bytes().next();
        }
        let mut states = [LetterState::Empty; WORD_LENGTH];
        states.copy_from_slice(&self.states);
        Some(GuessEvaluation::from_parts(letters, states))
    }
}

/// Persisted round
///
/// Written with `serde_json`; read back only through
/// [`sanitize_round`](super::sanitize_round).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    pub solution: String,
    pub mode: GameMode,
    pub date_key: String,
    pub guesses: Vec<String>,
    pub evaluations: Vec<EvaluationRecord>,
    pub current_guess: String,
    pub status: RoundStatus,
    pub attempt_index: usize,
    pub hard_mode: bool,
    pub language: Language,
}

impl RoundSnapshot {
    /// Capture a round; the transient message is not stored
    #[must_use]
    pub fn capture(round: &RoundState, language: Language) -> Self {
        Self {
            solution: round.solution().text().to_string(),
            mode: round.mode(),
            date_key: round.date_key().to_string(),
            guesses: round.guesses().iter().map(|g| g.text().to_string()).collect(),
            evaluations: round.evaluations().iter().map(EvaluationRecord::from).collect(),
            current_guess: round.current_input().to_string(),
            status: round.status(),
            attempt_index: round.attempt_index(),
            hard_mode: round.hard_mode(),
            language,
        }
    }

    /// Rebuild the round, `None` if any stored word or evaluation is malformed
    #[must_use]
    pub fn restore(&self) -> Option<RoundState> {
        let solution = Word::new(&self.solution).ok()?;
        if self.guesses.len() != self.evaluations.len() {
            return None;
        }
        let history = self
            .guesses
            .iter()
            .zip(&self.evaluations)
            .map(|(guess, record)| Some((Word::new(guess).ok()?, record.to_evaluation()?)))
            .collect::<Option<Vec<_>>>()?;

        Some(RoundState::restore(
            solution,
            self.mode,
            self.date_key.clone(),
            history,
            self.current_guess.clone(),
            self.status,
            self.hard_mode,
        ))
    }
}

//! Score a single guess against a solution

use crate::core::{GuessEvaluation, Word, WordError};

/// Result of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: String,
    pub solution: Word,
    pub evaluation: GuessEvaluation,
}

/// Evaluate `guess` against `solution`
///
/// The guess may be shorter than five letters; missing slots come back empty.
///
/// # Errors
///
/// Returns `WordError` if the solution is not a valid five-letter word.
pub fn score_guess(guess: &str, solution: &str) -> Result<ScoreResult, WordError> {
    let solution = Word::new(solution)?;
    let evaluation = GuessEvaluation::evaluate(guess, &solution);
    Ok(ScoreResult {
        guess: evaluation.text(),
        solution,
        evaluation,
    })
}

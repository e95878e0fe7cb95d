//! Repair of externally loaded state
//!
//! Stored JSON is read as an untyped [`Value`] and rebuilt field by field, so a
//! hand-edited or truncated file can never put the game into an impossible state.
//! None of these functions fail: bad fields fall back to their defaults, and a
//! round that cannot be repaired is dropped.

use super::snapshot::{EvaluationRecord, RoundSnapshot};
use crate::core::{GuessEvaluation, LetterState, WORD_LENGTH, Word, normalize};
use crate::game::{GameMode, RoundIdentity, RoundStatus, Rules, STANDARD_ATTEMPTS, SessionStats};
use crate::i18n::Language;
use crate::settings::{Settings, Theme};
use serde_json::Value;

/// Finite, truncated, non-negative, saturating at `u32::MAX`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn non_negative(value: Option<&Value>) -> u32 {
    // Float to integer casts saturate, so negatives land on zero
    value
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite())
        .map_or(0, |n| n.trunc() as u32)
}

fn flag(value: &Value, key: &str) -> bool {
    value.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn text<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

fn theme(value: &Value) -> Theme {
    match text(value, "theme") {
        Some("light") => Theme::Light,
        _ => Theme::Dark,
    }
}

fn language(value: &Value) -> Language {
    text(value, "language")
        .and_then(Language::from_code)
        .unwrap_or_default()
}

/// Settings from stored JSON
#[must_use]
pub fn sanitize_settings(value: &Value) -> Settings {
    Settings {
        color_blind_mode: flag(value, "colorBlindMode"),
        hard_mode: flag(value, "hardMode"),
        theme: theme(value),
        language: language(value),
    }
}

fn distribution(value: Option<&Value>) -> [u32; STANDARD_ATTEMPTS] {
    let mut buckets = [0; STANDARD_ATTEMPTS];
    if let Some(items) = value.and_then(Value::as_array) {
        for (bucket, item) in buckets.iter_mut().zip(items) {
            *bucket = non_negative(Some(item));
        }
    }
    buckets
}

/// Statistics from stored JSON, with the cross-field invariants repaired
#[must_use]
pub fn sanitize_stats(value: &Value) -> SessionStats {
    let games_played = non_negative(value.get("gamesPlayed"));
    let current_streak = non_negative(value.get("currentStreak"));
    SessionStats {
        games_played,
        games_won: non_negative(value.get("gamesWon")).min(games_played),
        current_streak,
        max_streak: non_negative(value.get("maxStreak")).max(current_streak),
        guess_distribution: distribution(value.get("guessDistribution")),
        last_recorded: value
            .get("lastRecorded")
            .and_then(|v| serde_json::from_value::<RoundIdentity>(v.clone()).ok()),
        last_daily: text(value, "lastDaily").map(str::to_string),
    }
}

fn status(value: &Value) -> RoundStatus {
    match text(value, "status") {
        Some("won") => RoundStatus::Won,
        Some("lost") => RoundStatus::Lost,
        _ => RoundStatus::Playing,
    }
}

fn mode(value: &Value) -> GameMode {
    match text(value, "mode") {
        Some("daily") => GameMode::Daily,
        _ => GameMode::Practice,
    }
}

/// A stored word, `None` unless it is five letters once normalized
fn word(value: &Value) -> Option<Word> {
    Word::new(&normalize(value.as_str()?)).ok()
}

fn evaluation(value: &Value) -> Option<EvaluationRecord> {
    let letters = value.get("letters")?.as_array()?;
    let states = value.get("states")?.as_array()?;
    if letters.len() != WORD_LENGTH || states.len() != WORD_LENGTH {
        return None;
    }
    Some(EvaluationRecord {
        letters: letters
            .iter()
            .map(|letter| {
                letter
                    .as_str()
                    .map(normalize)
                    .map(|l| l.chars().take(1).collect::<String>())
                    .unwrap_or_default()
            })
            .collect(),
        states: states
            .iter()
            .map(|state| {
                state
                    .as_str()
                    .and_then(LetterState::from_name)
                    .unwrap_or_default()
            })
            .collect(),
    })
}

fn list<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Round from stored JSON, `None` when it cannot be trusted
///
/// Guesses and evaluations are cut to the shortest of the two lists and the
/// attempt cap; the attempt count is derived from what is left. Every stored
/// evaluation must match a fresh evaluation of its guess, and the status must
/// agree with the history: `won` ends on the solution, `lost` fills the cap.
#[must_use]
pub fn sanitize_round(value: &Value, rules: &Rules) -> Option<RoundSnapshot> {
    if !value.is_object() {
        return None;
    }
    let solution = word(value.get("solution")?)?;
    let guesses = list(value, "guesses")
        .iter()
        .map(word)
        .collect::<Option<Vec<_>>>()?;
    let evaluations = list(value, "evaluations")
        .iter()
        .map(evaluation)
        .collect::<Option<Vec<_>>>()?;

    let hard_mode = flag(value, "hardMode");
    let cap = rules.attempt_cap(hard_mode);
    let len = guesses.len().min(evaluations.len()).min(cap);
    let guesses: Vec<Word> = guesses.into_iter().take(len).collect();
    let evaluations: Vec<EvaluationRecord> = evaluations.into_iter().take(len).collect();

    let consistent = guesses.iter().zip(&evaluations).all(|(guess, record)| {
        *record == EvaluationRecord::from(&GuessEvaluation::evaluate(guess.text(), &solution))
    });
    if !consistent {
        return None;
    }

    // A round ends on its first correct guess, so the solution may only be last
    let solved_at = guesses.iter().position(|guess| *guess == solution);
    let solved_last = len > 0 && solved_at == Some(len - 1);
    let status = match status(value) {
        RoundStatus::Won if solved_last => RoundStatus::Won,
        RoundStatus::Playing | RoundStatus::Lost if solved_at.is_none() && len >= cap => {
            RoundStatus::Lost
        }
        RoundStatus::Playing if solved_at.is_none() => RoundStatus::Playing,
        _ => return None,
    };

    let current_guess = if status.is_terminal() {
        String::new()
    } else {
        text(value, "currentGuess")
            .map(normalize)
            .unwrap_or_default()
            .chars()
            .take(WORD_LENGTH)
            .collect()
    };

    Some(RoundSnapshot {
        solution: solution.text().to_string(),
        mode: mode(value),
        date_key: text(value, "dateKey").unwrap_or_default().to_string(),
        guesses: guesses.iter().map(|g| g.text().to_string()).collect(),
        evaluations,
        current_guess,
        status,
        attempt_index: len,
        hard_mode,
        language: language(value),
    })
}

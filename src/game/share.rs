//! Spoiler-free share text of a finished round

use super::round::{RoundState, RoundStatus};
use super::rules::Rules;
use crate::core::{GuessEvaluation, LetterState};
use crate::i18n::Strings;

/// Glyph of one letter state in the share grid
#[must_use]
pub const fn share_glyph(state: LetterState, color_blind: bool) -> char {
    match (state, color_blind) {
        (LetterState::Correct, false) => '🟩',
        (LetterState::Correct, true) => '🟧',
        (LetterState::Present, false) => '🟨',
        (LetterState::Present, true) => '🟦',
        (LetterState::Absent, _) => '⬛',
        (LetterState::Empty, _) => '⬜',
    }
}

/// One grid row for an evaluation
#[must_use]
pub fn share_row(evaluation: &GuessEvaluation, color_blind: bool) -> String {
    evaluation
        .states()
        .iter()
        .map(|&state| share_glyph(state, color_blind))
        .collect()
}

/// Share text of a terminal round, `None` while it is still playing
///
/// The first line reads `"<app> <mode> [<date>] <N|X>/<cap>"`, followed by one
/// glyph row per guess.
#[must_use]
pub fn build_share_text(
    round: &RoundState,
    rules: &Rules,
    color_blind: bool,
    strings: &dyn Strings,
) -> Option<String> {
    let score = match round.status() {
        RoundStatus::Playing => return None,
        RoundStatus::Won => round.attempt_index().to_string(),
        RoundStatus::Lost => "X".to_string(),
    };
    let cap = rules.attempt_cap(round.hard_mode());

    let mut header = vec![strings.app_name(), strings.mode_label(round.mode())];
    if !round.date_key().is_empty() {
        header.push(round.date_key());
    }
    let mut text = format!("{} {score}/{cap}", header.join(" "));

    for evaluation in round.evaluations() {
        text.push('\n');
        text.push_str(&share_row(evaluation, color_blind));
    }
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{GameMode, RoundAction, RoundContext};
    use crate::i18n::Language;
    use crate::wordlists::EmbeddedWords;

    fn finished(guesses: &[&str], mode: GameMode, date_key: &str) -> RoundState {
        let words = EmbeddedWords::from_lists(&["CRANE", "TRACE", "SLATE"], &["AMIGO"]);
        let ctx = RoundContext {
            rules: Rules::new(2, None),
            words: &words,
            language: Language::En,
        };
        let mut state = RoundState::new(Word::new("crane").unwrap(), mode, date_key, false);
        for guess in guesses {
            for c in guess.chars() {
                state = state.apply(RoundAction::AddLetter(c), &ctx);
            }
            state = state.apply(RoundAction::SubmitGuess, &ctx);
        }
        state
    }

    #[test]
    fn playing_round_has_no_share_text() {
        let state = finished(&["trace"], GameMode::Practice, "");
        let text = build_share_text(&state, &Rules::new(2, None), false, Language::En.strings());
        assert_eq!(text, None);
    }

    #[test]
    fn won_daily_round() {
        let state = finished(&["trace", "crane"], GameMode::Daily, "2026-10-19");
        let text =
            build_share_text(&state, &Rules::new(2, None), false, Language::En.strings()).unwrap();
        assert_eq!(text, "WordMint Daily 2026-10-19 2/2\n⬛🟩🟩🟨🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn lost_practice_round_uses_x() {
        let state = finished(&["trace", "slate"], GameMode::Practice, "");
        let text =
            build_share_text(&state, &Rules::new(2, None), false, Language::En.strings()).unwrap();
        assert!(text.starts_with("WordMint Random X/2\n"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn color_blind_palette() {
        let state = finished(&["trace", "crane"], GameMode::Practice, "");
        let text =
            build_share_text(&state, &Rules::new(2, None), true, Language::Pt.strings()).unwrap();
        assert!(text.starts_with("WordMint Aleatório 2/2\n"));
        assert!(text.ends_with("⬛🟧🟧🟦🟧\n🟧🟧🟧🟧🟧"));
    }

    #[test]
    fn blank_slots_render_empty() {
        let evaluation = GuessEvaluation::evaluate("CR", &Word::new("crane").unwrap());
        assert_eq!(share_row(&evaluation, false), "🟩🟩⬜⬜⬜");
    }
}

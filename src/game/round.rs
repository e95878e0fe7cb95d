//! Round state machine
//!
//! A round is driven by [`RoundAction`]s through [`RoundState::apply`], a pure
//! transition function: it reads the corpus and the string catalog through
//! [`RoundContext`] but performs no I/O.

use super::hard_mode::validate_hard_mode;
use super::keyboard::KeyboardState;
use super::rules::Rules;
use super::stats::RoundIdentity;
use crate::core::{GuessEvaluation, WORD_LENGTH, Word, fold_letter};
use crate::i18n::Language;
use crate::wordlists::WordProvider;
use serde::{Deserialize, Serialize};

/// Status of a round; `Won` and `Lost` are terminal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// How the solution was chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// One solution per calendar day
    Daily,
    /// Random solution, as many rounds as the player likes
    #[default]
    Practice,
}

/// Everything a player (or the settings panel) can do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundAction {
    AddLetter(char),
    RemoveLetter,
    ClearInput,
    SubmitGuess,
    ResetGame {
        solution: Word,
        mode: GameMode,
        date_key: String,
    },
    SetMessage(Option<String>),
    ToggleColorBlind,
    ToggleHardMode,
    ToggleTheme,
    SetLanguage(Language),
}

/// Read-only collaborators of a transition
pub struct RoundContext<'a> {
    pub rules: Rules,
    pub words: &'a dyn WordProvider,
    pub language: Language,
}

/// State of the round in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    solution: Word,
    mode: GameMode,
    date_key: String,
    guesses: Vec<Word>,
    evaluations: Vec<GuessEvaluation>,
    current_input: String,
    status: RoundStatus,
    hard_mode: bool,
    message: Option<String>,
}

impl RoundState {
    /// Start a fresh round
    #[must_use]
    pub fn new(solution: Word, mode: GameMode, date_key: impl Into<String>, hard_mode: bool) -> Self {
        Self {
            solution,
            mode,
            date_key: date_key.into(),
            guesses: Vec::new(),
            evaluations: Vec::new(),
            current_input: String::new(),
            status: RoundStatus::Playing,
            hard_mode,
            message: None,
        }
    }

    /// Rebuild a round from stored parts
    ///
    /// Callers must already have checked that `guesses` and `evaluations` have
    /// the same length and fit under the cap.
    #[must_use]
    pub(crate) fn restore(
        solution: Word,
        mode: GameMode,
        date_key: String,
        history: Vec<(Word, GuessEvaluation)>,
        current_input: String,
        status: RoundStatus,
        hard_mode: bool,
    ) -> Self {
        let (guesses, evaluations) = history.into_iter().unzip();
        Self {
            solution,
            mode,
            date_key,
            guesses,
            evaluations,
            current_input,
            status,
            hard_mode,
            message: None,
        }
    }

    /// Apply one action and return the next state
    #[must_use]
    pub fn apply(mut self, action: RoundAction, ctx: &RoundContext<'_>) -> Self {
        match action {
            RoundAction::AddLetter(c) => {
                if self.status == RoundStatus::Playing
                    && self.current_input.len() < WORD_LENGTH
                    && let Some(letter) = fold_letter(c)
                {
                    self.current_input.push(char::from(letter));
                }
                self
            }
            RoundAction::RemoveLetter => {
                if self.status == RoundStatus::Playing {
                    self.current_input.pop();
                }
                self
            }
            RoundAction::ClearInput => {
                if self.status == RoundStatus::Playing {
                    self.current_input.clear();
                }
                self
            }
            RoundAction::SubmitGuess => self.submit(ctx),
            RoundAction::ResetGame {
                solution,
                mode,
                date_key,
            } => Self::new(solution, mode, date_key, self.hard_mode),
            RoundAction::SetMessage(message) => {
                self.message = message;
                self
            }
            RoundAction::ToggleHardMode => {
                self.hard_mode = !self.hard_mode;
                self
            }
            RoundAction::ToggleColorBlind | RoundAction::ToggleTheme | RoundAction::SetLanguage(_) => {
                self
            }
        }
    }

    fn submit(mut self, ctx: &RoundContext<'_>) -> Self {
        let cap = ctx.rules.attempt_cap(self.hard_mode);
        if self.status.is_terminal() || self.attempt_index() >= cap {
            return self;
        }
        let strings = ctx.language.strings();

        let Ok(guess) = Word::new(&self.current_input) else {
            self.message = Some(strings.not_enough_letters().to_string());
            return self;
        };

        if self.hard_mode
            && let Some(violation) = validate_hard_mode(guess.text(), &self.evaluations)
        {
            self.message = Some(violation.message(strings));
            return self;
        }

        if !ctx.words.is_member(guess.text(), ctx.language) {
            self.message = Some(strings.not_in_word_list().to_string());
            return self;
        }

        let evaluation = GuessEvaluation::evaluate(guess.text(), &self.solution);
        let won = guess == self.solution;
        self.guesses.push(guess);
        self.evaluations.push(evaluation);
        self.current_input.clear();

        let attempts = self.attempt_index();
        if won {
            self.status = RoundStatus::Won;
            self.message = Some(strings.solved_in(attempts));
        } else if attempts >= cap {
            self.status = RoundStatus::Lost;
            self.message = Some(strings.word_was(self.solution.text()));
        } else {
            self.message = None;
        }
        self
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn date_key(&self) -> &str {
        &self.date_key
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn evaluations(&self) -> &[GuessEvaluation] {
        &self.evaluations
    }

    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    /// Number of submitted guesses
    #[must_use]
    pub fn attempt_index(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Attempts left before the round is lost
    #[must_use]
    pub fn remaining_attempts(&self, rules: &Rules) -> usize {
        rules
            .attempt_cap(self.hard_mode)
            .saturating_sub(self.attempt_index())
    }

    /// Best known state of each guessed letter
    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        KeyboardState::aggregate(&self.evaluations)
    }

    /// Key used by the statistics to count this round once
    #[must_use]
    pub fn identity(&self) -> RoundIdentity {
        match self.mode {
            GameMode::Daily => RoundIdentity::Daily {
                date: self.date_key.clone(),
            },
            GameMode::Practice => RoundIdentity::Practice {
                solution: self.solution.text().to_string(),
                guesses: self.attempt_index(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::EmbeddedWords;

    fn words() -> EmbeddedWords {
        EmbeddedWords::from_lists(
            &["CRANE", "TRACE", "SLATE", "AUDIO", "BRICK", "CLOUD", "GEESE", "TEASE", "EERIE"],
            &["AMIGO", "TERRA"],
        )
    }

    fn round(solution: &str) -> RoundState {
        RoundState::new(Word::new(solution).unwrap(), GameMode::Practice, "2026-10-19", false)
    }

    fn play(mut state: RoundState, ctx: &RoundContext<'_>, guesses: &[&str]) -> RoundState {
        for guess in guesses {
            for c in guess.chars() {
                state = state.apply(RoundAction::AddLetter(c), ctx);
            }
            state = state.apply(RoundAction::SubmitGuess, ctx);
        }
        state
    }

    fn ctx(words: &EmbeddedWords, rules: Rules) -> RoundContext<'_> {
        RoundContext {
            rules,
            words,
            language: Language::En,
        }
    }

    #[test]
    fn add_and_remove_letters() {
        let words = words();
        let ctx = ctx(&words, Rules::default());
        let mut state = round("crane");

        for c in "cranes".chars() {
            state = state.apply(RoundAction::AddLetter(c), &ctx);
        }
        assert_eq!(state.current_input(), "CRANE");

        state = state.apply(RoundAction::RemoveLetter, &ctx);
        assert_eq!(state.current_input(), "CRAN");

        state = state.apply(RoundAction::AddLetter('1'), &ctx);
        state = state.apply(RoundAction::AddLetter('é'), &ctx);
        assert_eq!(state.current_input(), "CRANE");

        state = state.apply(RoundAction::ClearInput, &ctx);
        assert_eq!(state.current_input(), "");
        state = state.apply(RoundAction::RemoveLetter, &ctx);
        assert_eq!(state.current_input(), "");
    }

    #[test]
    fn short_guess_is_rejected_without_attempt() {
        let words = words();
        let ctx = ctx(&words, Rules::default());
        let state = play(round("crane"), &ctx, &["cra"]);

        assert_eq!(state.attempt_index(), 0);
        assert_eq!(state.message(), Some("Not enough letters"));
        assert_eq!(state.current_input(), "CRA");
        assert_eq!(state.status(), RoundStatus::Playing);
    }

    #[test]
    fn unknown_word_is_rejected() {
        let words = words();
        let ctx = ctx(&words, Rules::default());
        let state = play(round("crane"), &ctx, &["zzzzz"]);

        assert_eq!(state.attempt_index(), 0);
        assert_eq!(state.message(), Some("Not in word list"));
        assert_eq!(state.current_input(), "ZZZZZ");
    }

    #[test]
    fn valid_guess_is_recorded() {
        let words = words();
        let ctx = ctx(&words, Rules::default());
        let state = play(round("crane"), &ctx, &["trace"]);

        assert_eq!(state.attempt_index(), 1);
        assert_eq!(state.guesses().len(), state.evaluations().len());
        assert_eq!(state.guesses()[0].text(), "TRACE");
        assert_eq!(state.current_input(), "");
        assert_eq!(state.status(), RoundStatus::Playing);
        assert_eq!(state.message(), None);
        assert_eq!(state.remaining_attempts(&ctx.rules), 5);
    }

    #[test]
    fn winning_guess_ends_round() {
        let words = words();
        let ctx = ctx(&words, Rules::default());
        let state = play(round("crane"), &ctx, &["trace", "crane"]);

        assert_eq!(state.status(), RoundStatus::Won);
        assert_eq!(state.message(), Some("Solved in 2 tries"));
    }

    #[test]
    fn cap_reached_loses_round() {
        let words = words();
        let ctx = ctx(&words, Rules::default());
        let state = play(
            round("crane"),
            &ctx,
            &["slate", "audio", "brick", "cloud", "geese", "tease"],
        );

        assert_eq!(state.status(), RoundStatus::Lost);
        assert_eq!(state.attempt_index(), 6);
        assert_eq!(state.message(), Some("The word was CRANE"));
    }

    #[test]
    fn terminal_round_ignores_input() {
        let words = words();
        let ctx = ctx(&words, Rules::default());
        let won = play(round("crane"), &ctx, &["crane"]);

        let after = play(won.clone(), &ctx, &["slate"]);
        assert_eq!(after, won);

        let after = won.clone().apply(RoundAction::RemoveLetter, &ctx);
        assert_eq!(after, won);
    }

    #[test]
    fn hard_mode_violation_checked_before_membership() {
        let words = words();
        let ctx = ctx(&words, Rules::default());
        let mut state = round("crane").apply(RoundAction::ToggleHardMode, &ctx);
        state = play(state, &ctx, &["cloud"]);

        // ZZZZZ is not a word either, but the hard mode message wins
        let state = play(state, &ctx, &["zzzzz"]);
        assert_eq!(state.attempt_index(), 1);
        assert_eq!(state.message(), Some("Hard mode: position 1 must be C"));
    }

    #[test]
    fn hard_mode_cap_is_enforced() {
        let words = words();
        let ctx = ctx(&words, Rules::new(6, Some(2)));
        let state = round("crane").apply(RoundAction::ToggleHardMode, &ctx);
        let state = play(state, &ctx, &["slate", "trace"]);

        assert_eq!(state.status(), RoundStatus::Lost);
        assert_eq!(state.attempt_index(), 2);
    }

    #[test]
    fn toggling_hard_mode_keeps_history() {
        let words = words();
        let ctx = ctx(&words, Rules::new(6, Some(1)));
        let state = play(round("crane"), &ctx, &["slate", "audio"]);
        let state = state.apply(RoundAction::ToggleHardMode, &ctx);

        assert_eq!(state.attempt_index(), 2);
        assert_eq!(state.status(), RoundStatus::Playing);

        // Already past the hard mode cap: further submissions are ignored
        let after = play(state.clone(), &ctx, &["crane"]);
        assert_eq!(after.attempt_index(), 2);
        assert_eq!(after.status(), RoundStatus::Playing);
    }

    #[test]
    fn reset_starts_fresh_round() {
        let words = words();
        let ctx = ctx(&words, Rules::default());
        let state = play(round("crane"), &ctx, &["crane"]);
        let state = state.apply(
            RoundAction::ResetGame {
                solution: Word::new("slate").unwrap(),
                mode: GameMode::Daily,
                date_key: "2026-10-20".to_string(),
            },
            &ctx,
        );

        assert_eq!(state.status(), RoundStatus::Playing);
        assert_eq!(state.attempt_index(), 0);
        assert!(state.guesses().is_empty());
        assert_eq!(state.solution().text(), "SLATE");
        assert_eq!(
            state.identity(),
            RoundIdentity::Daily {
                date: "2026-10-20".to_string()
            }
        );
    }

    #[test]
    fn practice_identity_tracks_guess_count() {
        let words = words();
        let ctx = ctx(&words, Rules::default());
        let state = play(round("crane"), &ctx, &["trace", "crane"]);
        assert_eq!(
            state.identity(),
            RoundIdentity::Practice {
                solution: "CRANE".to_string(),
                guesses: 2
            }
        );
    }

    #[test]
    fn keyboard_reflects_history() {
        let words = words();
        let ctx = ctx(&words, Rules::default());
        let state = play(round("crane"), &ctx, &["trace"]);
        let keyboard = state.keyboard();
        assert_eq!(keyboard.get(b'T'), crate::core::LetterState::Absent);
        assert_eq!(keyboard.get(b'R'), crate::core::LetterState::Correct);
    }
}

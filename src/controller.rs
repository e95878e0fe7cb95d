//! Game controller
//!
//! Owns the [`Session`] together with everything that performs I/O: storage,
//! the clipboard and the calendar. Every action goes through [`GameController::dispatch`],
//! which applies it and writes the session back.

use crate::clipboard::Clipboard;
use crate::core::Word;
use crate::game::{GameMode, RoundAction, RoundState, RoundStatus, Rules};
use crate::i18n::Language;
use crate::session::{GameEnv, Session};
use crate::storage::{self, Storage};
use crate::wordlists::WordProvider;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// `YYYY-MM-DD` key of a daily round
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today in the local time zone
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// How to start when no stored round can be resumed
#[derive(Debug, Clone, Copy)]
pub struct StartOptions {
    pub mode: GameMode,
    /// Overrides the stored language
    pub language: Option<Language>,
    pub today: NaiveDate,
}

pub struct GameController<S, C, W> {
    session: Session,
    storage: S,
    clipboard: C,
    words: W,
    rules: Rules,
    mode: GameMode,
    today: NaiveDate,
}

impl<S: Storage, C: Clipboard, W: WordProvider> GameController<S, C, W> {
    /// Load the stored session, resuming the stored round when it still applies
    ///
    /// A stored round is resumed when it was played in the same language and
    /// mode, and, for daily rounds, on the same day. Otherwise a fresh round
    /// starts.
    pub fn start(storage: S, clipboard: C, words: W, rules: Rules, options: StartOptions) -> Self {
        let mut settings = storage::load_settings(&storage);
        if let Some(language) = options.language {
            settings.language = language;
        }
        let stats = storage::load_stats(&storage);
        let today_key = date_key(options.today);

        let resumed = storage::load_round(&storage, &rules)
            .filter(|snapshot| {
                snapshot.language == settings.language
                    && snapshot.mode == options.mode
                    && (snapshot.mode == GameMode::Practice || snapshot.date_key == today_key)
            })
            .and_then(|snapshot| snapshot.restore());

        let round = if let Some(round) = resumed {
            info!(
                mode = ?round.mode(),
                attempts = round.attempt_index(),
                status = ?round.status(),
                "resumed stored round"
            );
            settings.hard_mode = round.hard_mode();
            round
        } else {
            let (solution, key) =
                pick_solution(&words, options.mode, settings.language, options.today);
            info!(mode = ?options.mode, language = settings.language.code(), "started new round");
            RoundState::new(solution, options.mode, key, settings.hard_mode)
        };

        let mut controller = Self {
            session: Session::new(round, settings, stats),
            storage,
            clipboard,
            words,
            rules,
            mode: options.mode,
            today: options.today,
        };
        controller.persist();
        controller
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub const fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Apply an action and persist the result
    pub fn dispatch(&mut self, action: RoundAction) {
        let env = GameEnv {
            rules: self.rules,
            words: &self.words,
        };
        let was_playing = self.session.round.status() == RoundStatus::Playing;
        let persisted = !matches!(action, RoundAction::SetMessage(_));
        debug!(?action, "dispatch");

        self.session = self.session.clone().apply(action, env);

        if was_playing && self.session.round.status().is_terminal() {
            info!(
                status = ?self.session.round.status(),
                attempts = self.session.round.attempt_index(),
                games_played = self.session.stats.games_played,
                "round finished"
            );
        }
        if persisted {
            self.persist();
        }
    }

    /// Type a whole word and submit it
    pub fn submit_word(&mut self, text: &str) {
        self.dispatch(RoundAction::ClearInput);
        for c in text.chars() {
            self.dispatch(RoundAction::AddLetter(c));
        }
        self.dispatch(RoundAction::SubmitGuess);
    }

    /// Start a new round in `mode`
    ///
    /// A daily round always uses today's word, so restarting it replays the same
    /// solution; its statistics are still only counted once.
    pub fn new_round(&mut self, mode: GameMode) {
        self.mode = mode;
        let language = self.session.settings.language;
        let (solution, date_key) = pick_solution(&self.words, mode, language, self.today);
        info!(?mode, language = language.code(), "started new round");
        self.dispatch(RoundAction::ResetGame {
            solution,
            mode,
            date_key,
        });
    }

    /// Switch language; the solution must come from the new corpus, so a new round starts
    pub fn set_language(&mut self, language: Language) {
        self.dispatch(RoundAction::SetLanguage(language));
        self.new_round(self.mode);
        let notice = self.session.strings().language_changed();
        self.dispatch(RoundAction::SetMessage(Some(notice)));
    }

    /// Copy the share text of a finished round to the clipboard
    ///
    /// Returns the text when the round is over, whether or not the copy worked.
    pub fn share(&mut self) -> Option<String> {
        let strings = self.session.strings();
        let Some(text) = self.session.share_text(&self.rules) else {
            self.dispatch(RoundAction::SetMessage(Some(
                strings.share_not_ready().to_string(),
            )));
            return None;
        };

        let notice = match self.clipboard.copy(&text) {
            Ok(()) => strings.copied_to_clipboard(),
            Err(e) => {
                warn!(error = %e, "clipboard write failed");
                strings.clipboard_unavailable()
            }
        };
        self.dispatch(RoundAction::SetMessage(Some(notice.to_string())));
        Some(text)
    }

    /// Clear the transient message
    pub fn dismiss_message(&mut self) {
        if self.session.round.message().is_some() {
            self.dispatch(RoundAction::SetMessage(None));
        }
    }

    fn persist(&mut self) {
        if let Err(e) = storage::save_session(&mut self.storage, &self.session) {
            warn!(error = %e, "failed to save session");
        }
    }
}

fn pick_solution(
    words: &dyn WordProvider,
    mode: GameMode,
    language: Language,
    today: NaiveDate,
) -> (Word, String) {
    match mode {
        GameMode::Daily => (words.daily_word(language, today), date_key(today)),
        GameMode::Practice => (words.random_word(language), String::new()),
    }
}

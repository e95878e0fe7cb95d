//! Session context: the round in progress plus the player's settings and statistics
//!
//! Settings and statistics travel with the round in one [`Session`] value that is
//! passed into and returned from every transition. Nothing here touches storage.

use crate::game::{RoundAction, RoundContext, RoundState, Rules, SessionStats, build_share_text};
use crate::i18n::Strings;
use crate::settings::Settings;
use crate::wordlists::WordProvider;

/// Collaborators shared by every transition of a session
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    pub rules: Rules,
    pub words: &'a dyn WordProvider,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub round: RoundState,
    pub settings: Settings,
    pub stats: SessionStats,
}

impl Session {
    /// Assemble a session; a round that is already over is recorded once
    #[must_use]
    pub fn new(round: RoundState, settings: Settings, stats: SessionStats) -> Self {
        Self {
            round,
            settings,
            stats,
        }
        .record_if_finished()
    }

    /// Strings in the session language
    #[must_use]
    pub fn strings(&self) -> &'static dyn Strings {
        self.settings.language.strings()
    }

    /// Apply one action to the round and the settings, then record a finished round
    #[must_use]
    pub fn apply(mut self, action: RoundAction, env: GameEnv<'_>) -> Self {
        let notice = match action {
            RoundAction::ToggleColorBlind => {
                self.settings.color_blind_mode = !self.settings.color_blind_mode;
                Some(self.strings().color_blind_toggle(self.settings.color_blind_mode))
            }
            RoundAction::ToggleTheme => {
                self.settings.theme = self.settings.theme.toggled();
                Some(self.strings().theme_toggle(self.settings.theme.is_light()))
            }
            RoundAction::SetLanguage(language) => {
                self.settings.language = language;
                Some(self.strings().language_changed())
            }
            _ => None,
        };

        let ctx = RoundContext {
            rules: env.rules,
            words: env.words,
            language: self.settings.language,
        };
        let hard_mode_toggle = matches!(action, RoundAction::ToggleHardMode);
        self.round = self.round.apply(action, &ctx);

        let notice = if hard_mode_toggle {
            self.settings.hard_mode = self.round.hard_mode();
            Some(self.strings().hard_mode_toggle(self.settings.hard_mode))
        } else {
            notice
        };
        if let Some(text) = notice {
            self.round = self.round.apply(RoundAction::SetMessage(Some(text)), &ctx);
        }

        self.record_if_finished()
    }

    /// Fold the round into the statistics if it is over
    ///
    /// Safe to call repeatedly: a round is only ever counted once.
    #[must_use]
    pub fn record_if_finished(mut self) -> Self {
        if self.round.status().is_terminal() {
            self.stats = self.stats.record_result(
                self.round.identity(),
                self.round.status(),
                self.round.attempt_index(),
            );
        }
        self
    }

    /// Share text of the round, `None` while it is still playing
    #[must_use]
    pub fn share_text(&self, rules: &Rules) -> Option<String> {
        build_share_text(
            &self.round,
            rules,
            self.settings.color_blind_mode,
            self.strings(),
        )
    }
}

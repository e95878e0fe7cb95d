//! Cumulative statistics across rounds

use super::round::RoundStatus;
use super::rules::STANDARD_ATTEMPTS;
use serde::{Deserialize, Serialize};

/// Identifies a finished round so it is only ever counted once
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RoundIdentity {
    /// Daily rounds are keyed by their date (`YYYY-MM-DD`)
    Daily { date: String },
    /// Practice rounds are keyed by solution and number of guesses
    Practice { solution: String, guesses: usize },
}

/// Session statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins by attempt count; index 0 = solved on the first try
    pub guess_distribution: [u32; STANDARD_ATTEMPTS],
    pub last_recorded: Option<RoundIdentity>,
    /// Date of the last recorded daily round, kept apart from practice rounds
    pub last_daily: Option<String>,
}

impl SessionStats {
    /// Fold a round result into the statistics
    ///
    /// Returns the statistics unchanged while the round is still playing or when
    /// `identity` was already recorded. Daily dates only move forward, so a daily
    /// round is recognized even after practice rounds were recorded in between.
    #[must_use]
    pub fn record_result(
        mut self,
        identity: RoundIdentity,
        status: RoundStatus,
        attempts_used: usize,
    ) -> Self {
        if !status.is_terminal() || self.already_recorded(&identity) {
            return self;
        }

        self.games_played = self.games_played.saturating_add(1);
        match status {
            RoundStatus::Won => {
                self.games_won = self.games_won.saturating_add(1);
                if let Some(bucket) = attempts_used
                    .checked_sub(1)
                    .and_then(|i| self.guess_distribution.get_mut(i))
                {
                    *bucket = bucket.saturating_add(1);
                }
                self.current_streak = self.current_streak.saturating_add(1);
                self.max_streak = self.max_streak.max(self.current_streak);
            }
            RoundStatus::Lost => self.current_streak = 0,
            RoundStatus::Playing => {}
        }
        if let RoundIdentity::Daily { date } = &identity {
            self.last_daily = Some(date.clone());
        }
        self.last_recorded = Some(identity);
        self
    }

    fn already_recorded(&self, identity: &RoundIdentity) -> bool {
        if self.last_recorded.as_ref() == Some(identity) {
            return true;
        }
        match identity {
            RoundIdentity::Daily { date } => self.last_daily.as_ref() == Some(date),
            RoundIdentity::Practice { .. } => false,
        }
    }

    /// Fraction of games won, 0.0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played)
        }
    }
}

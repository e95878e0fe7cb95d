//! Formatting utilities for terminal output

use crate::core::GuessEvaluation;
use crate::game::share_row;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format an evaluation as a glyph row
#[must_use]
pub fn evaluation_to_emoji(evaluation: &GuessEvaluation, color_blind: bool) -> String {
    share_row(evaluation, color_blind)
}

/// Share of wins for one bucket of the guess distribution, in percent
#[must_use]
pub fn bucket_percent(count: u32, games_won: u32) -> f64 {
    if games_won == 0 {
        0.0
    } else {
        f64::from(count) / f64::from(games_won) * 100.0
    }
}

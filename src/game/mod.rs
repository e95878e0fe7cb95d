//! Game rules: round state machine, hard mode, statistics and sharing

mod hard_mode;
mod keyboard;
mod round;
mod rules;
mod share;
mod stats;

pub use hard_mode::{HardModeConstraints, HardModeViolation, validate_hard_mode};
pub use keyboard::KeyboardState;
pub use round::{GameMode, RoundAction, RoundContext, RoundState, RoundStatus};
pub use rules::{Rules, STANDARD_ATTEMPTS};
pub use share::{build_share_text, share_glyph, share_row};
pub use stats::{RoundIdentity, SessionStats};

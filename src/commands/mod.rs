//! Command implementations

pub mod records;
pub mod score;
pub mod simple;

pub use records::{reset, stored_records, stored_share_text};
pub use score::{ScoreResult, score_guess};
pub use simple::run_simple;

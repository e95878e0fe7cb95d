//! Attempt cap configuration

/// Standard number of attempts per round, and the length of the guess distribution
pub const STANDARD_ATTEMPTS: usize = 6;

/// Round rules shared by every round of a session
///
/// There is one cap, `max_attempts`. Hard mode may only tighten it through
/// `hard_mode_cap`, never loosen it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    max_attempts: usize,
    hard_mode_cap: Option<usize>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_attempts: STANDARD_ATTEMPTS,
            hard_mode_cap: None,
        }
    }
}

impl Rules {
    /// Create rules, clamping every cap into `1..=6`
    #[must_use]
    pub fn new(max_attempts: usize, hard_mode_cap: Option<usize>) -> Self {
        let clamp = |cap: usize| cap.clamp(1, STANDARD_ATTEMPTS);
        Self {
            max_attempts: clamp(max_attempts),
            hard_mode_cap: hard_mode_cap.map(clamp),
        }
    }

    /// Maximum attempts for a round in the given mode
    #[must_use]
    pub fn attempt_cap(&self, hard_mode: bool) -> usize {
        match self.hard_mode_cap {
            Some(cap) if hard_mode => cap.min(self.max_attempts),
            _ => self.max_attempts,
        }
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

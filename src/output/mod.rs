//! Terminal output formatting
//!
//! Display utilities for the line-mode commands.

pub mod display;
pub mod formatters;

pub use display::{print_evaluation, print_round, print_stats};

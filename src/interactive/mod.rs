//! Interactive TUI built on ratatui and crossterm

mod app;
mod rendering;

pub use app::{App, MESSAGE_TTL, run_tui};

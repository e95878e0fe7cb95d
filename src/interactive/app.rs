//! TUI application state and logic

use crate::clipboard::Clipboard;
use crate::controller::GameController;
use crate::game::{GameMode, RoundAction};
use crate::storage::Storage;
use crate::wordlists::WordProvider;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long a message stays on screen
pub const MESSAGE_TTL: Duration = Duration::from_millis(2500);

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Application state
pub struct App<S, C, W> {
    pub controller: GameController<S, C, W>,
    pub should_quit: bool,
    shown_message: Option<String>,
    shown_at: Option<Instant>,
}

impl<S: Storage, C: Clipboard, W: WordProvider> App<S, C, W> {
    #[must_use]
    pub const fn new(controller: GameController<S, C, W>) -> Self {
        Self {
            controller,
            should_quit: false,
            shown_message: None,
            shown_at: None,
        }
    }

    /// Translate one key press into game actions
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c' | 'q') => self.should_quit = true,
                KeyCode::Char('n') => self.controller.new_round(GameMode::Practice),
                KeyCode::Char('h') => self.controller.dispatch(RoundAction::ToggleHardMode),
                KeyCode::Char('b') => self.controller.dispatch(RoundAction::ToggleColorBlind),
                KeyCode::Char('t') => self.controller.dispatch(RoundAction::ToggleTheme),
                KeyCode::Char('l') => {
                    let next = self.controller.session().settings.language.next();
                    self.controller.set_language(next);
                }
                KeyCode::Char('s') => {
                    self.controller.share();
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char(c) => self.controller.dispatch(RoundAction::AddLetter(c)),
            KeyCode::Backspace => self.controller.dispatch(RoundAction::RemoveLetter),
            KeyCode::Esc => self.controller.dispatch(RoundAction::ClearInput),
            KeyCode::Enter => self.controller.dispatch(RoundAction::SubmitGuess),
            _ => {}
        }
    }

    /// Dismiss the message once it has been visible for [`MESSAGE_TTL`]
    ///
    /// A message that changed since the last tick restarts the timer.
    pub fn tick(&mut self, now: Instant) {
        let current = self.controller.session().round.message().map(str::to_owned);
        if current != self.shown_message {
            self.shown_at = current.as_ref().map(|_| now);
            self.shown_message = current;
            return;
        }
        if let Some(shown_at) = self.shown_at
            && now.duration_since(shown_at) >= MESSAGE_TTL
        {
            self.controller.dismiss_message();
            self.shown_message = None;
            self.shown_at = None;
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: Storage, C: Clipboard, W: WordProvider>(app: App<S, C, W>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, S, C, W>(terminal: &mut Terminal<B>, mut app: App<S, C, W>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: Storage,
    C: Clipboard,
    W: WordProvider,
{
    loop {
        let controller = &app.controller;
        terminal.draw(|f| {
            super::rendering::ui(f, controller.session(), controller.rules(), controller.mode());
        })?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

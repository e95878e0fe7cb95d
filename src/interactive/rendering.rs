//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard, statistics and message banner.

use crate::core::{LetterState, WORD_LENGTH};
use crate::game::{GameMode, RoundState, RoundStatus, Rules, SessionStats};
use crate::i18n::Strings;
use crate::output::formatters::create_progress_bar;
use crate::session::Session;
use crate::settings::{Settings, Theme};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Colors for one frame, derived from the theme and the color-blind setting
struct Palette {
    base: Style,
    accent: Color,
    correct: Color,
    present: Color,
    absent: Color,
    muted: Color,
}

impl Palette {
    fn new(settings: &Settings) -> Self {
        let (correct, present) = if settings.color_blind_mode {
            (Color::Rgb(245, 121, 58), Color::Rgb(133, 192, 249))
        } else {
            (Color::Green, Color::Yellow)
        };
        match settings.theme {
            Theme::Dark => Self {
                base: Style::default().fg(Color::White).bg(Color::Black),
                accent: Color::Cyan,
                correct,
                present,
                absent: Color::DarkGray,
                muted: Color::Gray,
            },
            Theme::Light => Self {
                base: Style::default().fg(Color::Black).bg(Color::White),
                accent: Color::Blue,
                correct,
                present,
                absent: Color::Gray,
                muted: Color::DarkGray,
            },
        }
    }

    fn tile(&self, state: LetterState) -> Style {
        let bg = match state {
            LetterState::Correct => self.correct,
            LetterState::Present => self.present,
            LetterState::Absent => self.absent,
            LetterState::Empty => return self.base.add_modifier(Modifier::BOLD),
        };
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }

    fn block<'a>(&self, title: &'a str) -> Block<'a> {
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(self.base)
            .border_style(Style::default().fg(self.accent))
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, session: &Session, rules: &Rules, mode: GameMode) {
    let palette = Palette::new(&session.settings);
    let strings = session.strings();

    f.render_widget(Block::default().style(palette.base), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Message
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, session, mode, &palette, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    let play_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(5)])
        .split(main_chunks[0]);

    render_board(f, &session.round, rules, &palette, play_chunks[0]);
    render_keyboard(f, &session.round, &palette, play_chunks[1]);
    render_stats(f, &session.stats, strings, &palette, main_chunks[1]);
    render_message(f, session.round.message(), &palette, chunks[2]);
    render_status(f, session, rules, &palette, chunks[3]);
}

fn render_header(f: &mut Frame, session: &Session, mode: GameMode, palette: &Palette, area: Rect) {
    let strings = session.strings();
    let mut title = format!("{} · {}", strings.app_name(), strings.mode_label(mode));
    if !session.round.date_key().is_empty() {
        title.push_str(&format!(" · {}", session.round.date_key()));
    }
    if session.round.hard_mode() {
        title.push_str(" · HARD");
    }

    let header = Paragraph::new(title)
        .style(palette.base.fg(palette.accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(palette.block(""));
    f.render_widget(header, area);
}

fn tile_spans(letters: &[Option<char>; WORD_LENGTH], states: &[LetterState; WORD_LENGTH], palette: &Palette) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for (letter, &state) in letters.iter().zip(states) {
        let text = format!(" {} ", letter.unwrap_or('·'));
        spans.push(Span::styled(text, palette.tile(state)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, round: &RoundState, rules: &Rules, palette: &Palette, area: Rect) {
    let cap = rules.attempt_cap(round.hard_mode()).max(round.attempt_index());
    let mut lines = Vec::with_capacity(cap * 2);

    for evaluation in round.evaluations() {
        let letters = (*evaluation.letters()).map(|l| l.map(char::from));
        lines.push(tile_spans(&letters, evaluation.states(), palette));
        lines.push(Line::from(""));
    }

    let mut rows_left = cap.saturating_sub(round.attempt_index());
    if round.status() == RoundStatus::Playing && rows_left > 0 {
        let mut letters = [None; WORD_LENGTH];
        for (slot, c) in letters.iter_mut().zip(round.current_input().chars()) {
            *slot = Some(c);
        }
        lines.push(tile_spans(&letters, &[LetterState::Empty; WORD_LENGTH], palette));
        lines.push(Line::from(""));
        rows_left -= 1;
    }
    for _ in 0..rows_left {
        lines.push(tile_spans(&[None; WORD_LENGTH], &[LetterState::Empty; WORD_LENGTH], palette));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(palette.block(" Board "));
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, round: &RoundState, palette: &Palette, area: Rect) {
    let keyboard = round.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|key| {
                    [
                        Span::styled(format!(" {} ", char::from(key)), palette.tile(keyboard.get(key))),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(palette.block(""));
    f.render_widget(widget, area);
}

fn render_stats(f: &mut Frame, stats: &SessionStats, strings: &dyn Strings, palette: &Palette, area: Rect) {
    let max_bucket = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);

    let mut lines = vec![
        Line::from(format!("{:<16}{}", strings.games(), stats.games_played)),
        Line::from(format!(
            "{:<16}{:.0}%",
            strings.win_rate(),
            stats.win_rate() * 100.0
        )),
        Line::from(format!("{:<16}{}", strings.current_streak(), stats.current_streak)),
        Line::from(format!("{:<16}{}", strings.max_streak(), stats.max_streak)),
        Line::from(""),
        Line::from(Span::styled(
            strings.guess_distribution(),
            palette.base.add_modifier(Modifier::BOLD),
        )),
    ];

    for (attempt, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(max_bucket), 16);
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", attempt + 1)),
            Span::styled(bar, Style::default().fg(palette.correct)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let title = format!(" {} ", strings.statistics());
    let widget = Paragraph::new(lines).block(palette.block(&title));
    f.render_widget(widget, area);
}

fn render_message(f: &mut Frame, message: Option<&str>, palette: &Palette, area: Rect) {
    let widget = Paragraph::new(message.unwrap_or_default())
        .style(palette.base.fg(palette.accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(palette.block(""));
    f.render_widget(widget, area);
}

fn render_status(f: &mut Frame, session: &Session, rules: &Rules, palette: &Palette, area: Rect) {
    let strings = session.strings();
    let round = &session.round;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let status = match round.status() {
        RoundStatus::Playing => format!(
            "{} · {}",
            strings.status_playing(),
            strings.attempts_left(round.remaining_attempts(rules))
        ),
        RoundStatus::Won => strings.status_won().to_string(),
        RoundStatus::Lost => format!("{} · {}", strings.status_lost(), strings.word_was(round.solution().text())),
    };
    f.render_widget(
        Paragraph::new(status).alignment(Alignment::Center).style(palette.base),
        chunks[0],
    );

    let help = "^N new · ^H hard · ^B colors · ^T theme · ^L lang · ^S share · ^Q quit";
    f.render_widget(
        Paragraph::new(help)
            .alignment(Alignment::Center)
            .style(palette.base.fg(palette.muted)),
        chunks[1],
    );
}

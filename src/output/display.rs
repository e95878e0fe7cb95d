//! Display functions for command results

use super::formatters::{bucket_percent, create_progress_bar, evaluation_to_emoji};
use crate::core::{GuessEvaluation, LetterState};
use crate::game::{RoundState, RoundStatus, Rules, SessionStats};
use crate::i18n::Strings;
use colored::{ColoredString, Colorize};

fn colored_letter(letter: char, state: LetterState, color_blind: bool) -> ColoredString {
    let tile = format!(" {letter} ");
    match (state, color_blind) {
        (LetterState::Correct, false) => tile.black().on_green().bold(),
        (LetterState::Correct, true) => tile.black().on_truecolor(245, 121, 58).bold(),
        (LetterState::Present, false) => tile.black().on_yellow().bold(),
        (LetterState::Present, true) => tile.black().on_truecolor(133, 192, 249).bold(),
        (LetterState::Absent, _) => tile.white().on_bright_black().bold(),
        (LetterState::Empty, _) => tile.normal(),
    }
}

/// Print one evaluated guess as colored tiles followed by its glyph row
pub fn print_evaluation(evaluation: &GuessEvaluation, color_blind: bool) {
    let tiles: String = evaluation
        .iter()
        .map(|(letter, state)| {
            colored_letter(letter.map_or(' ', char::from), state, color_blind).to_string()
        })
        .collect::<Vec<_>>()
        .join(" ");
    println!("  {tiles}   {}", evaluation_to_emoji(evaluation, color_blind));
}

/// Print every guess of a round and its outcome
pub fn print_round(round: &RoundState, rules: &Rules, color_blind: bool, strings: &dyn Strings) {
    println!();
    for evaluation in round.evaluations() {
        print_evaluation(evaluation, color_blind);
    }
    println!();
    match round.status() {
        RoundStatus::Playing => println!(
            "{}",
            strings
                .attempts_left(round.remaining_attempts(rules))
                .bright_black()
        ),
        RoundStatus::Won => println!(
            "{}",
            strings.solved_in(round.attempt_index()).green().bold()
        ),
        RoundStatus::Lost => println!(
            "{}",
            strings.word_was(round.solution().text()).red().bold()
        ),
    }
}

/// Print the statistics with a distribution chart
pub fn print_stats(stats: &SessionStats, strings: &dyn Strings) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", strings.statistics().bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!("   {:<18}{}", strings.games(), stats.games_played);
    println!(
        "   {:<18}{}",
        strings.win_rate(),
        format!("{:.0}%", stats.win_rate() * 100.0).bright_yellow().bold()
    );
    println!("   {:<18}{}", strings.current_streak(), stats.current_streak);
    println!("   {:<18}{}", strings.max_streak(), stats.max_streak);

    println!("\n📈 {}", strings.guess_distribution().bright_cyan().bold());
    let max_bucket = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(max_bucket), 30);
        let pct = bucket_percent(count, stats.games_won);
        println!("   {}: {} {count:4} ({pct:5.1}%)", i + 1, bar.green());
    }
}

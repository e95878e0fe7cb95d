//! Simple interactive CLI mode
//!
//! Line-based play on stdin/stdout without the TUI

use crate::clipboard::Clipboard;
use crate::controller::GameController;
use crate::game::{GameMode, RoundAction};
use crate::output::{print_round, print_stats};
use crate::storage::Storage;
use crate::wordlists::WordProvider;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S, C, W>(controller: &mut GameController<S, C, W>) -> Result<(), String>
where
    S: Storage,
    C: Clipboard,
    W: WordProvider,
{
    let app_name = controller.session().strings().app_name();
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║{:^62}║", format!("{app_name} - Simple Mode"));
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Type a five-letter guess and press Enter.");
    println!("Commands: :new  :daily  :hard  :colors  :lang  :share  :stats  :quit\n");

    print_round(
        &controller.session().round,
        controller.rules(),
        controller.session().settings.color_blind_mode,
        controller.session().strings(),
    );

    loop {
        let Some(input) = get_user_input("Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "" => continue,
            ":quit" | ":q" | ":exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            ":new" | ":n" => controller.new_round(GameMode::Practice),
            ":daily" | ":d" => controller.new_round(GameMode::Daily),
            ":hard" => controller.dispatch(RoundAction::ToggleHardMode),
            ":colors" => controller.dispatch(RoundAction::ToggleColorBlind),
            ":lang" => {
                let next = controller.session().settings.language.next();
                controller.set_language(next);
            }
            ":share" => {
                if let Some(text) = controller.share() {
                    println!("\n{text}\n");
                }
            }
            ":stats" => {
                print_stats(&controller.session().stats, controller.session().strings());
                continue;
            }
            guess => controller.submit_word(guess),
        }

        let session = controller.session();
        if let Some(message) = session.round.message() {
            println!("{}", message.bright_yellow());
        }
        print_round(
            &session.round,
            controller.rules(),
            session.settings.color_blind_mode,
            session.strings(),
        );
        controller.dismiss_message();
    }
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}

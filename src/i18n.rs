//! User-facing strings
//!
//! Every message the game shows goes through the [`Strings`] trait so the rules
//! never hard-code a language. Two catalogs ship with the crate.

use crate::game::GameMode;
use serde::{Deserialize, Serialize};

/// Interface language
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pt,
    En,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::Pt, Self::En];

    /// Stored language code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::En => "en",
        }
    }

    /// Parse a stored language code
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Name of the language in itself
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pt => "Português",
            Self::En => "English",
        }
    }

    /// The language after this one, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Pt => Self::En,
            Self::En => Self::Pt,
        }
    }

    /// String catalog for this language
    #[must_use]
    pub fn strings(self) -> &'static dyn Strings {
        match self {
            Self::Pt => &Portuguese,
            Self::En => &English,
        }
    }
}

/// Catalog of user-facing text
pub trait Strings: Sync {
    fn app_name(&self) -> &'static str {
        "WordMint"
    }
    fn mode_label(&self, mode: GameMode) -> &'static str;
    fn not_enough_letters(&self) -> &'static str;
    fn not_in_word_list(&self) -> &'static str;
    /// `position` is 1-based
    fn hard_mode_position(&self, position: usize, letter: char) -> String;
    fn hard_mode_include(&self, count: usize, letter: char) -> String;
    fn solved_in(&self, attempts: usize) -> String;
    fn word_was(&self, solution: &str) -> String;
    fn copied_to_clipboard(&self) -> &'static str;
    fn clipboard_unavailable(&self) -> &'static str;
    fn share_not_ready(&self) -> &'static str;
    fn status_playing(&self) -> &'static str;
    fn status_won(&self) -> &'static str;
    fn status_lost(&self) -> &'static str;
    fn attempts_left(&self, remaining: usize) -> String;
    fn hard_mode_toggle(&self, on: bool) -> String;
    fn color_blind_toggle(&self, on: bool) -> String;
    fn theme_toggle(&self, light: bool) -> String;
    fn language_changed(&self) -> String;
    fn statistics(&self) -> &'static str;
    fn games(&self) -> &'static str;
    fn win_rate(&self) -> &'static str;
    fn current_streak(&self) -> &'static str;
    fn max_streak(&self) -> &'static str;
    fn guess_distribution(&self) -> &'static str;
}

pub struct English;

impl Strings for English {
    fn mode_label(&self, mode: GameMode) -> &'static str {
        match mode {
            GameMode::Daily => "Daily",
            GameMode::Practice => "Random",
        }
    }
    fn not_enough_letters(&self) -> &'static str {
        "Not enough letters"
    }
    fn not_in_word_list(&self) -> &'static str {
        "Not in word list"
    }
    fn hard_mode_position(&self, position: usize, letter: char) -> String {
        format!("Hard mode: position {position} must be {letter}")
    }
    fn hard_mode_include(&self, count: usize, letter: char) -> String {
        if count == 1 {
            format!("Hard mode: include at least {count} '{letter}'")
        } else {
            format!("Hard mode: include at least {count} '{letter}'s")
        }
    }
    fn solved_in(&self, attempts: usize) -> String {
        let noun = if attempts == 1 { "try" } else { "tries" };
        format!("Solved in {attempts} {noun}")
    }
    fn word_was(&self, solution: &str) -> String {
        format!("The word was {solution}")
    }
    fn copied_to_clipboard(&self) -> &'static str {
        "Copied to clipboard"
    }
    fn clipboard_unavailable(&self) -> &'static str {
        "Clipboard unavailable"
    }
    fn share_not_ready(&self) -> &'static str {
        "Finish the round to share it"
    }
    fn status_playing(&self) -> &'static str {
        "Make your next guess"
    }
    fn status_won(&self) -> &'static str {
        "Great work!"
    }
    fn status_lost(&self) -> &'static str {
        "Better luck next round"
    }
    fn attempts_left(&self, remaining: usize) -> String {
        if remaining == 1 {
            "1 attempt left".to_string()
        } else {
            format!("{remaining} attempts left")
        }
    }
    fn hard_mode_toggle(&self, on: bool) -> String {
        format!("Hard mode {}", if on { "on" } else { "off" })
    }
    fn color_blind_toggle(&self, on: bool) -> String {
        format!("Color-blind palette {}", if on { "on" } else { "off" })
    }
    fn theme_toggle(&self, light: bool) -> String {
        format!("Light theme {}", if light { "on" } else { "off" })
    }
    fn language_changed(&self) -> String {
        format!("Language {}", Language::En.label())
    }
    fn statistics(&self) -> &'static str {
        "Statistics"
    }
    fn games(&self) -> &'static str {
        "Games"
    }
    fn win_rate(&self) -> &'static str {
        "Win rate"
    }
    fn current_streak(&self) -> &'static str {
        "Current streak"
    }
    fn max_streak(&self) -> &'static str {
        "Max streak"
    }
    fn guess_distribution(&self) -> &'static str {
        "Guess distribution"
    }
}

pub struct Portuguese;

impl Strings for Portuguese {
    fn mode_label(&self, mode: GameMode) -> &'static str {
        match mode {
            GameMode::Daily => "Diário",
            GameMode::Practice => "Aleatório",
        }
    }
    fn not_enough_letters(&self) -> &'static str {
        "Faltam letras"
    }
    fn not_in_word_list(&self) -> &'static str {
        "Não está na lista de palavras"
    }
    fn hard_mode_position(&self, position: usize, letter: char) -> String {
        format!("Modo difícil: a posição {position} deve ser {letter}")
    }
    fn hard_mode_include(&self, count: usize, letter: char) -> String {
        let noun = if count == 1 { "letra" } else { "letras" };
        format!("Modo difícil: inclua pelo menos {count} {noun} '{letter}'")
    }
    fn solved_in(&self, attempts: usize) -> String {
        let noun = if attempts == 1 { "tentativa" } else { "tentativas" };
        format!("Resolvido em {attempts} {noun}")
    }
    fn word_was(&self, solution: &str) -> String {
        format!("A palavra era {solution}")
    }
    fn copied_to_clipboard(&self) -> &'static str {
        "Copiado para a área de transferência"
    }
    fn clipboard_unavailable(&self) -> &'static str {
        "Área de transferência indisponível"
    }
    fn share_not_ready(&self) -> &'static str {
        "Termine a rodada para compartilhar"
    }
    fn status_playing(&self) -> &'static str {
        "Faça sua próxima tentativa"
    }
    fn status_won(&self) -> &'static str {
        "Muito bem!"
    }
    fn status_lost(&self) -> &'static str {
        "Boa sorte na próxima rodada"
    }
    fn attempts_left(&self, remaining: usize) -> String {
        if remaining == 1 {
            "1 tentativa restante".to_string()
        } else {
            format!("{remaining} tentativas restantes")
        }
    }
    fn hard_mode_toggle(&self, on: bool) -> String {
        format!("Modo difícil {}", if on { "ligado" } else { "desligado" })
    }
    fn color_blind_toggle(&self, on: bool) -> String {
        format!("Paleta daltônica {}", if on { "ligada" } else { "desligada" })
    }
    fn theme_toggle(&self, light: bool) -> String {
        format!("Tema claro {}", if light { "ligado" } else { "desligado" })
    }
    fn language_changed(&self) -> String {
        format!("Idioma {}", Language::Pt.label())
    }
    fn statistics(&self) -> &'static str {
        "Estatísticas"
    }
    fn games(&self) -> &'static str {
        "Jogos"
    }
    fn win_rate(&self) -> &'static str {
        "Taxa de vitória"
    }
    fn current_streak(&self) -> &'static str {
        "Sequência atual"
    }
    fn max_streak(&self) -> &'static str {
        "Maior sequência"
    }
    fn guess_distribution(&self) -> &'static str {
        "Distribuição de tentativas"
    }
}

//! Word representation and text normalization
//!
//! A `Word` stores a five-letter word as upper-case ASCII bytes. Raw text from the
//! keyboard, word files or storage goes through [`normalize`] first, which folds
//! Latin diacritics to their base letter so that `"MAÇÃS"` and `"MACAS"` compare equal.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Number of letters in every word of the game
pub const WORD_LENGTH: usize = 5;

/// A five-letter word made of `A`-`Z`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// Fold a single character to an upper-case ASCII letter
///
/// Latin letters whose canonical decomposition is a base letter plus marks
/// (Latin-1 and Latin Extended-A, e.g. `ã`, `ā`, `ő`) map to that base letter.
/// Letters without such a decomposition (`œ`, `ø`, `ł`) and anything else that
/// is not a letter return `None`.
#[must_use]
pub fn fold_letter(c: char) -> Option<u8> {
    let base = match c {
        'À'..='Å' | 'à'..='å' | 'Ā'..='ą' => 'A',
        'Ç' | 'ç' | 'Ć'..='č' => 'C',
        'Ď'..='ď' => 'D',
        'È'..='Ë' | 'è'..='ë' | 'Ē'..='ě' => 'E',
        'Ĝ'..='ģ' => 'G',
        'Ĥ'..='ĥ' => 'H',
        'Ì'..='Ï' | 'ì'..='ï' | 'Ĩ'..='İ' => 'I',
        'Ĵ'..='ĵ' => 'J',
        'Ķ'..='ķ' => 'K',
        'Ĺ'..='ľ' => 'L',
        'Ñ' | 'ñ' | 'Ń'..='ň' => 'N',
        'Ò'..='Ö' | 'ò'..='ö' | 'Ō'..='ő' => 'O',
        'Ŕ'..='ř' => 'R',
        'Ś'..='š' => 'S',
        'Ţ'..='ť' => 'T',
        'Ù'..='Ü' | 'ù'..='ü' | 'Ũ'..='ų' => 'U',
        'Ŵ'..='ŵ' => 'W',
        'Ý' | 'ý' | 'ÿ' | 'Ŷ'..='Ÿ' => 'Y',
        'Ź'..='ž' => 'Z',
        c if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        _ => return None,
    };
    Some(base as u8)
}

/// Normalize raw text: fold diacritics, upper-case, drop every non-letter
///
/// # Examples
/// ```
/// use wordle_game::core::normalize;
///
/// assert_eq!(normalize("  Pão-de-ló "), "PAODELO");
/// assert_eq!(normalize("crane"), "CRANE");
/// ```
#[must_use]
pub fn normalize(value: &str) -> String {
    value
        .chars()
        .filter_map(fold_letter)
        .map(char::from)
        .collect()
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Case and diacritics are folded, but any character that is not a letter is
    /// rejected rather than silently dropped.
    ///
    /// # Errors
    /// Returns `WordError` if the text contains a non-letter or does not have
    /// exactly [`WORD_LENGTH`] letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let mut chars = [0u8; WORD_LENGTH];
        let mut len = 0;

        for c in text.chars() {
            let letter = fold_letter(c).ok_or(WordError::InvalidCharacter(c))?;
            if len < WORD_LENGTH {
                chars[len] = letter;
            }
            len += 1;
        }

        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        let text = chars.iter().copied().map(char::from).collect();
        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Get the count of each letter in the word
    ///
    /// Used by the evaluator for duplicate-letter accounting.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }

    /// Check whether raw guess text spells this word
    ///
    /// Comparison is case and diacritic insensitive.
    #[must_use]
    pub fn matches(&self, raw: &str) -> bool {
        normalize(raw) == self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.chars(), b"CRANE");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        assert_eq!(Word::new("crane").unwrap().text(), "CRANE");
        assert_eq!(Word::new("CrAnE").unwrap().text(), "CRANE");
    }

    #[test]
    fn word_creation_folds_diacritics() {
        let word = Word::new("Ávião").unwrap();
        assert_eq!(word.text(), "AVIAO");
        assert_eq!(word, Word::new("aviao").unwrap());
    }

    #[test]
    fn fold_letter_covers_extended_latin() {
        assert_eq!(fold_letter('ā'), Some(b'A'));
        assert_eq!(fold_letter('ő'), Some(b'O'));
        assert_eq!(fold_letter('Ž'), Some(b'Z'));
        assert_eq!(fold_letter('ş'), Some(b'S'));
        assert_eq!(fold_letter('œ'), None);
        assert_eq!(fold_letter('ł'), None);
        assert_eq!(Word::new("Łódźy"), Err(WordError::InvalidCharacter('Ł')));
        assert_eq!(Word::new("kőrte").unwrap().text(), "KORTE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("toolong"), Err(WordError::InvalidLength(7)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacter('3')));
        assert!(Word::new("cran ").is_err());
        assert!(Word::new("cran!").is_err());
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), b'C');
        assert_eq!(word.char_at(4), b'E');
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b'S'), Some(&1));
        assert_eq!(counts.get(&b'E'), Some(&2));
        assert_eq!(counts.get(&b'Z'), None);
    }

    #[test]
    fn word_char_counts_all_same() {
        let counts = Word::new("aaaaa").unwrap().char_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&b'A'), Some(&5));
    }

    #[test]
    fn word_matches_raw_text() {
        let word = Word::new("macas").unwrap();
        assert!(word.matches("maçãs"));
        assert!(word.matches(" M-A-C-A-S "));
        assert!(!word.matches("massa"));
    }

    #[test]
    fn normalize_strips_non_letters() {
        assert_eq!(normalize("a1b2c3"), "ABC");
        assert_eq!(normalize("ÇÉÑÜÝ"), "CENUY");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_drops_combining_marks() {
        // "e" followed by U+0301 COMBINING ACUTE ACCENT
        assert_eq!(normalize("cafe\u{301}"), "CAFE");
    }

    #[test]
    fn fold_letter_rejects_symbols() {
        assert_eq!(fold_letter('é'), Some(b'E'));
        assert_eq!(fold_letter('z'), Some(b'Z'));
        assert_eq!(fold_letter(' '), None);
        assert_eq!(fold_letter('7'), None);
        assert_eq!(fold_letter('ß'), None);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }
}

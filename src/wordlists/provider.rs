//! Word source consumed by the round state machine

use super::embedded::{WORDS_EN, WORDS_PT};
use super::loader::words_from_slice;
use crate::core::{Word, normalize};
use crate::i18n::Language;
use chrono::NaiveDate;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Source of solutions and the membership test for guesses
pub trait WordProvider {
    /// A random solution for a practice round
    fn random_word(&self, language: Language) -> Word;

    /// The solution of the daily round for `date`, identical for every player
    fn daily_word(&self, language: Language, date: NaiveDate) -> Word;

    /// Whether `candidate` is an accepted guess
    fn is_member(&self, candidate: &str, language: Language) -> bool;
}

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("word list for {0:?} has no valid five-letter words")]
    Empty(Language),
}

/// Day number of `date` counted from the first daily round
#[must_use]
pub fn daily_index(date: NaiveDate, len: usize) -> usize {
    let epoch = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap_or(NaiveDate::MIN);
    let days = date.signed_duration_since(epoch).num_days();
    days.rem_euclid(len.max(1) as i64) as usize
}

#[derive(Debug, Clone)]
struct Corpus {
    list: Vec<Word>,
    members: FxHashSet<String>,
}

impl Corpus {
    fn new(language: Language, list: Vec<Word>) -> Result<Self, WordListError> {
        if list.is_empty() {
            return Err(WordListError::Empty(language));
        }
        let members = list.iter().map(|w| w.text().to_string()).collect();
        Ok(Self { list, members })
    }

    fn first(&self) -> &Word {
        &self.list[0]
    }
}

/// Per-language corpora held in memory
#[derive(Debug, Clone)]
pub struct EmbeddedWords {
    en: Corpus,
    pt: Corpus,
}

impl EmbeddedWords {
    /// Corpora compiled into the binary
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if an embedded list has no valid word.
    pub fn new() -> Result<Self, WordListError> {
        Self::try_from_lists(WORDS_EN, WORDS_PT)
    }

    /// Build from explicit lists
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if either list has no valid word.
    pub fn try_from_lists(en: &[&str], pt: &[&str]) -> Result<Self, WordListError> {
        Ok(Self {
            en: Corpus::new(Language::En, words_from_slice(en))?,
            pt: Corpus::new(Language::Pt, words_from_slice(pt))?,
        })
    }

    /// Build from explicit lists, for tests
    ///
    /// # Panics
    /// Panics if either list has no valid word.
    #[cfg(test)]
    #[must_use]
    pub fn from_lists(en: &[&str], pt: &[&str]) -> Self {
        Self::try_from_lists(en, pt).expect("test word lists must not be empty")
    }

    /// Replace the corpus of one language
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn with_words(mut self, language: Language, words: Vec<Word>) -> Result<Self, WordListError> {
        let corpus = Corpus::new(language, words)?;
        match language {
            Language::En => self.en = corpus,
            Language::Pt => self.pt = corpus,
        }
        Ok(self)
    }

    /// Number of words for a language
    #[must_use]
    pub fn len(&self, language: Language) -> usize {
        self.corpus(language).list.len()
    }

    const fn corpus(&self, language: Language) -> &Corpus {
        match language {
            Language::En => &self.en,
            Language::Pt => &self.pt,
        }
    }
}

impl WordProvider for EmbeddedWords {
    fn random_word(&self, language: Language) -> Word {
        let corpus = self.corpus(language);
        corpus
            .list
            .choose(&mut rand::rng())
            .unwrap_or_else(|| corpus.first())
            .clone()
    }

    fn daily_word(&self, language: Language, date: NaiveDate) -> Word {
        let corpus = self.corpus(language);
        corpus.list[daily_index(date, corpus.list.len())].clone()
    }

    fn is_member(&self, candidate: &str, language: Language) -> bool {
        self.corpus(language).members.contains(&normalize(candidate))
    }
}

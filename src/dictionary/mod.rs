//! Spell checking
//!
//! The `SpellChecker` trait is the boundary to whatever decides whether a
//! word is real. `Dictionary` is the built-in implementation: a set of known
//! words for a single language.

use crate::wordlists::{DICTIONARY, WordListError, loader};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Language code of the embedded dictionary
pub const DEFAULT_LANGUAGE: &str = "en";

/// Decides whether a word is spelled correctly
pub trait SpellChecker {
    /// True if `word` is a recognized entry in `language`
    fn is_recognized(&self, word: &str, language: &str) -> bool;
}

/// Word set for one language
#[derive(Debug, Clone)]
pub struct Dictionary {
    language: String,
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from any list of words
    ///
    /// Words are trimmed and lowercased; blanks are dropped.
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// The English dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(DEFAULT_LANGUAGE, DICTIONARY)
    }

    /// Load dictionary from a file, one word per line
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Io` if the file cannot be read and
    /// `WordListError::Empty` if it holds no words.
    pub fn load<P: AsRef<Path>>(path: P, language: impl Into<String>) -> Result<Self, WordListError> {
        let words = loader::load_from_file(&path)?;
        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        let dictionary = Self::new(language, words);
        tracing::info!(
            path = %path.as_ref().display(),
            language = %dictionary.language,
            "Loaded {} words into dictionary",
            dictionary.len()
        );

        Ok(dictionary)
    }

    /// Check if a word exists in the dictionary
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Get the number of words in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for Dictionary {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        if !self.language.eq_ignore_ascii_case(language) {
            tracing::warn!(
                requested = language,
                available = %self.language,
                "No dictionary for requested language"
            );
            return false;
        }

        self.contains(word)
    }
}

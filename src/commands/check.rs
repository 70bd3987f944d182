//! One-shot word check
//!
//! Runs the guards for a single word against a given root word with an
//! empty used-word list. Useful for scripting and for settling arguments.

use crate::core::{Candidate, Rejection};
use crate::dictionary::SpellChecker;
use crate::validator::{Guards, validate};

/// Result of checking a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub root_word: String,
    pub word: String,
    pub rejection: Option<Rejection>,
}

impl CheckResult {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Check whether `word` would be accepted in a fresh round on `root_word`
///
/// # Errors
///
/// Returns an error if either the root word or the word is blank.
pub fn check_word<C: SpellChecker + ?Sized>(
    root_word: &str,
    word: &str,
    checker: &C,
    language: &str,
) -> Result<CheckResult, String> {
    let root = Candidate::new(root_word).ok_or("Root word is blank")?;
    let candidate = Candidate::new(word).ok_or("Nothing to check: word is blank")?;

    let used_words: Vec<String> = Vec::new();
    let guards = Guards {
        root_word: root.text(),
        used_words: &used_words,
        checker,
        language,
    };

    Ok(CheckResult {
        root_word: root.text().to_string(),
        word: candidate.text().to_string(),
        rejection: validate(candidate.text(), &guards).err(),
    })
}

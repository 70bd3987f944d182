//! Submission guards
//!
//! Three independent predicates decide whether a candidate may be scored.
//! `validate` runs them in a fixed order and stops at the first failure:
//!
//! 1. `is_original` - not already in the used-word list
//! 2. `contains_only_root_letters` - buildable from the root word's letters
//! 3. `is_real_word` - known to the spell checker
//!
//! The order matters: a word that cannot be spelled from the root is reported
//! as such even when the dictionary would also reject it.

use crate::core::{LetterPool, Rejection};
use crate::dictionary::SpellChecker;

/// False iff `word` is already in `used_words`
///
/// Comparison is exact; callers normalize before storing and checking.
#[must_use]
pub fn is_original<S: AsRef<str>>(word: &str, used_words: &[S]) -> bool {
    !used_words.iter().any(|used| used.as_ref() == word)
}

/// True iff every letter of `word` can be taken from `root_word`
///
/// Each root letter can be used at most once. The empty word is trivially
/// buildable.
///
/// # Examples
/// ```
/// use word_scramble::validator::contains_only_root_letters;
///
/// assert!(contains_only_root_letters("cat", "tacos"));
/// assert!(contains_only_root_letters("cats", "tacos"));
/// assert!(!contains_only_root_letters("toss", "tacos"));
/// ```
#[must_use]
pub fn contains_only_root_letters(word: &str, root_word: &str) -> bool {
    let mut pool = LetterPool::from_word(root_word);
    word.chars().all(|letter| pool.take(letter))
}

/// True iff the spell checker has no complaint about the whole of `word`
#[must_use]
pub fn is_real_word<C: SpellChecker + ?Sized>(word: &str, checker: &C, language: &str) -> bool {
    checker.is_recognized(word, language)
}

/// Everything a candidate is checked against
pub struct Guards<'a, C: SpellChecker + ?Sized> {
    pub root_word: &'a str,
    pub used_words: &'a [String],
    pub checker: &'a C,
    pub language: &'a str,
}

/// Run all guards in order, returning the first failure
///
/// `word` must already be normalized.
///
/// # Errors
///
/// Returns the `Rejection` of the first guard that fails.
pub fn validate<C: SpellChecker + ?Sized>(word: &str, guards: &Guards<'_, C>) -> Result<(), Rejection> {
    if !is_original(word, guards.used_words) {
        return Err(Rejection::Unoriginal);
    }

    if !contains_only_root_letters(word, guards.root_word) {
        return Err(Rejection::NotPossible {
            root_word: guards.root_word.to_string(),
        });
    }

    if !is_real_word(word, guards.checker, guards.language) {
        return Err(Rejection::NotRecognized);
    }

    Ok(())
}

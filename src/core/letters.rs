//! Letter multiset for availability checks
//!
//! A `LetterPool` counts how many of each letter a root word offers.
//! Letters are consumed one at a time; once a letter's count reaches zero
//! further requests for it fail.

use rustc_hash::FxHashMap;

/// Remaining letters of a root word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build a pool holding every letter of `word`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let mut pool = LetterPool::from_word("tacos");
    /// assert!(pool.take('s'));
    /// assert!(!pool.take('s'));
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Remove one occurrence of `letter`
    ///
    /// Returns false, leaving the pool unchanged, if none is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }
}

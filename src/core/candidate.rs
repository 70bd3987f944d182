//! Submitted word representation
//!
//! A Candidate keeps both the text exactly as the player typed it and the
//! normalized form (lowercased, surrounding whitespace trimmed) the guards run on.

use std::fmt;

/// A player submission pending validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    raw: String,
    normalized: String,
}

impl Candidate {
    /// Normalize a submission
    ///
    /// Returns `None` when nothing is left after trimming; such submissions
    /// are dropped without any feedback to the player.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Candidate;
    ///
    /// let candidate = Candidate::new("  Worm ").unwrap();
    /// assert_eq!(candidate.text(), "worm");
    /// assert_eq!(candidate.raw(), "  Worm ");
    ///
    /// assert!(Candidate::new(" \t\n").is_none());
    /// ```
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw: String = raw.into();
        let normalized = raw.to_lowercase().trim().to_string();

        if normalized.is_empty() {
            return None;
        }

        Some(Self { raw, normalized })
    }

    /// Get the normalized text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.normalized
    }

    /// Get the text as originally submitted
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

//! Guard failures
//!
//! Each guard that can turn a submission down has exactly one `Rejection`
//! variant, which carries the title and message shown to the player.

use std::fmt;

/// Why a submission was turned down
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The word is already in the used-word list
    Unoriginal,
    /// The root word does not have enough of the word's letters
    NotPossible { root_word: String },
    /// The spell checker does not know the word
    NotRecognized,
}

impl Rejection {
    /// Alert title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Unoriginal => "Word used already",
            Self::NotPossible { .. } => "Word not possible",
            Self::NotRecognized => "Word not recognized",
        }
    }

    /// Alert message
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Rejection;
    ///
    /// let rejection = Rejection::NotPossible { root_word: "silkworm".to_string() };
    /// assert_eq!(rejection.message(), "You can't spell that word from 'silkworm'!");
    /// ```
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Unoriginal => "Be more original".to_string(),
            Self::NotPossible { root_word } => {
                format!("You can't spell that word from '{root_word}'!")
            }
            Self::NotRecognized => "You can't just make them up, you know!".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

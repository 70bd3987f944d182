//! Word lists for the word scramble game
//!
//! Provides the embedded start-word list, loading from custom files, and
//! random root word selection.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};

use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Startup failure while reading a word list
///
/// Without a root word there is no game, so these are fatal to the caller.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("could not read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list contains no words")]
    Empty,
}

/// Where root words come from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WordSource {
    /// The list compiled into the binary
    #[default]
    Embedded,
    /// A line-delimited text file, re-read on every restart
    File(PathBuf),
}

impl WordSource {
    /// Load the full list of root words
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Io` if a file source cannot be read.
    pub fn load(&self) -> Result<Vec<String>, WordListError> {
        match self {
            Self::Embedded => Ok(loader::words_from_slice(START_WORDS)),
            Self::File(path) => loader::load_from_file(path),
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded list"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Pick a root word uniformly at random
///
/// # Errors
///
/// Returns `WordListError::Empty` if `words` is empty.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use word_scramble::wordlists::select_root_word;
///
/// let words = vec!["silkworm".to_string(), "airplane".to_string()];
/// let mut rng = StdRng::seed_from_u64(7);
/// let root = select_root_word(&words, &mut rng).unwrap();
/// assert!(words.iter().any(|w| w == root));
/// ```
pub fn select_root_word<'w, S, R>(words: &'w [S], rng: &mut R) -> Result<&'w str, WordListError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    words
        .choose(rng)
        .map(AsRef::as_ref)
        .ok_or(WordListError::Empty)
}

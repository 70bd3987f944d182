//! Word list loading utilities
//!
//! Provides functions to load line-delimited word lists from files or to use
//! the embedded constants.

use super::WordListError;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Surrounding whitespace is stripped, words are lowercased
/// and blank lines are skipped.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(words_from_str(&content))
}

/// Split newline-separated text into words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_str;
///
/// let words = words_from_str("silkworm\r\n\n  Tacos \n");
/// assert_eq!(words, vec!["silkworm", "tacos"]);
/// ```
#[must_use]
pub fn words_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect()
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_str_skips_blank_lines() {
        let words = words_from_str("silkworm\n\n   \nairplane\n");

        assert_eq!(words.len(), 2);
        assert_eq!(words[0], "silkworm");
        assert_eq!(words[1], "airplane");
    }

    #[test]
    fn words_from_str_handles_crlf_and_case() {
        let words = words_from_str("Silkworm\r\nAIRPLANE\r\n");
        assert_eq!(words, vec!["silkworm", "airplane"]);
    }

    #[test]
    fn words_from_str_empty() {
        assert!(words_from_str("").is_empty());
        assert!(words_from_str("\n\n").is_empty());
    }

    #[test]
    fn words_from_slice_converts_all() {
        let input = &["silkworm", "Tacos"];
        let words = words_from_slice(input);
        assert_eq!(words, vec!["silkworm", "tacos"]);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_from_file("definitely/not/here/start.txt");
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }

    #[test]
    fn load_from_temp_file() {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_loader_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "alphabet\nbirthday\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["alphabet", "birthday"]);
    }
}

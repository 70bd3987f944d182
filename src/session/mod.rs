//! Game session state
//!
//! A `GameSession` owns everything a round needs: the root word, the
//! used-word list (newest first) and the score. It is mutated in exactly two
//! places: `start_game`, which begins a fresh round, and `submit`, which
//! scores a word once every guard has passed.

use crate::core::{Candidate, Rejection};
use crate::dictionary::{DEFAULT_LANGUAGE, SpellChecker};
use crate::validator::{Guards, validate};
use crate::wordlists::{WordListError, WordSource, select_root_word};
use rand::Rng;
use rand::rngs::ThreadRng;

/// What goes into the used-word list on an accepted submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HistoryPolicy {
    /// Store the lowercased, trimmed word. Case and whitespace variants of a
    /// used word are then rejected as unoriginal.
    #[default]
    Normalized,
    /// Store the text exactly as typed. Originality is judged on the
    /// normalized form of each entry, so "cat" cannot follow "Cat" either.
    Raw,
}

/// Session settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub language: String,
    pub history: HistoryPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            history: HistoryPolicy::default(),
        }
    }
}

/// Result of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Nothing but whitespace was submitted; no feedback is due
    Ignored,
    /// The word was scored and added to the front of the used-word list
    Accepted { word: String, score: u32 },
    /// A guard failed; session state is unchanged
    Rejected(Rejection),
}

/// Single-player word scramble round
pub struct GameSession<C: SpellChecker, R: Rng = ThreadRng> {
    source: WordSource,
    checker: C,
    config: SessionConfig,
    rng: R,
    root_word: String,
    used_words: Vec<String>,
    score: u32,
}

impl<C: SpellChecker> GameSession<C> {
    /// Create a session and start its first round
    ///
    /// # Errors
    ///
    /// Returns `WordListError` if the word source cannot be read or is empty.
    pub fn new(source: WordSource, checker: C, config: SessionConfig) -> Result<Self, WordListError> {
        Self::with_rng(source, checker, config, rand::rng())
    }
}

impl<C: SpellChecker, R: Rng> GameSession<C, R> {
    /// Create a session with a caller-supplied random number generator
    ///
    /// # Errors
    ///
    /// Returns `WordListError` if the word source cannot be read or is empty.
    pub fn with_rng(
        source: WordSource,
        checker: C,
        config: SessionConfig,
        rng: R,
    ) -> Result<Self, WordListError> {
        let mut session = Self {
            source,
            checker,
            config,
            rng,
            root_word: String::new(),
            used_words: Vec::new(),
            score: 0,
        };
        session.start_game()?;
        Ok(session)
    }

    /// Begin a new round
    ///
    /// Reloads the word source, picks a new root word, clears the used-word
    /// list and resets the score. On error the current round is kept as is.
    ///
    /// # Errors
    ///
    /// Returns `WordListError` if the word source cannot be read or is empty.
    pub fn start_game(&mut self) -> Result<(), WordListError> {
        let words = self.source.load()?;
        let root_word = select_root_word(&words, &mut self.rng)?.to_string();

        tracing::info!(
            source = %self.source,
            candidates = words.len(),
            root_word = %root_word,
            "Started new round"
        );

        self.root_word = root_word;
        self.used_words.clear();
        self.score = 0;
        Ok(())
    }

    /// Validate and, if every guard passes, score a submission
    pub fn submit(&mut self, text: &str) -> SubmissionOutcome {
        let Some(candidate) = Candidate::new(text) else {
            tracing::debug!("Ignored blank submission");
            return SubmissionOutcome::Ignored;
        };

        let normalized_history: Vec<String>;
        let used_words = match self.config.history {
            HistoryPolicy::Normalized => self.used_words.as_slice(),
            HistoryPolicy::Raw => {
                normalized_history = self
                    .used_words
                    .iter()
                    .filter_map(|used| Candidate::new(used.as_str()))
                    .map(|used| used.text().to_string())
                    .collect();
                normalized_history.as_slice()
            }
        };

        let guards = Guards {
            root_word: &self.root_word,
            used_words,
            checker: &self.checker,
            language: &self.config.language,
        };

        if let Err(rejection) = validate(candidate.text(), &guards) {
            tracing::debug!(word = candidate.text(), reason = rejection.title(), "Rejected");
            return SubmissionOutcome::Rejected(rejection);
        }

        let word = match self.config.history {
            HistoryPolicy::Normalized => candidate.text().to_string(),
            HistoryPolicy::Raw => candidate.raw().to_string(),
        };

        self.score += 1;
        self.used_words.insert(0, word.clone());
        tracing::debug!(word = %word, score = self.score, "Accepted");

        SubmissionOutcome::Accepted {
            word,
            score: self.score,
        }
    }

    /// Word whose letters bound this round
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, newest first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Number of accepted words this round
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::path::PathBuf;

    fn temp_word_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_session_{name}_{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    fn tacos_session(
        name: &str,
        history: HistoryPolicy,
    ) -> (GameSession<Dictionary, StdRng>, PathBuf) {
        let path = temp_word_file(name, "tacos\n");
        let dictionary = Dictionary::new(
            "en",
            ["cat", "act", "taco", "tacos", "cats", "oats", "coat", "toss"],
        );
        let config = SessionConfig {
            history,
            ..SessionConfig::default()
        };
        let session = GameSession::with_rng(
            WordSource::File(path.clone()),
            dictionary,
            config,
            StdRng::seed_from_u64(9),
        )
        .unwrap();
        (session, path)
    }

    #[test]
    fn new_session_starts_round() {
        let session = GameSession::with_rng(
            WordSource::Embedded,
            Dictionary::embedded(),
            SessionConfig::default(),
            StdRng::seed_from_u64(1),
        )
        .unwrap();

        assert!(
            crate::wordlists::START_WORDS
                .iter()
                .any(|&word| word == session.root_word())
        );
        assert_eq!(session.score(), 0);
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn accepted_word_scores_and_prepends() {
        let (mut session, path) = tacos_session("accepted", HistoryPolicy::Normalized);

        assert_eq!(
            session.submit("cat"),
            SubmissionOutcome::Accepted {
                word: "cat".to_string(),
                score: 1
            }
        );
        assert_eq!(
            session.submit("oats"),
            SubmissionOutcome::Accepted {
                word: "oats".to_string(),
                score: 2
            }
        );

        assert_eq!(session.score(), 2);
        assert_eq!(session.used_words(), ["oats", "cat"]);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn duplicate_word_rejected() {
        let (mut session, path) = tacos_session("duplicate", HistoryPolicy::Normalized);

        assert!(matches!(session.submit("cat"), SubmissionOutcome::Accepted { .. }));
        assert_eq!(
            session.submit("cat"),
            SubmissionOutcome::Rejected(Rejection::Unoriginal)
        );
        assert_eq!(session.score(), 1);
        assert_eq!(session.used_words(), ["cat"]);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn normalized_history_rejects_case_variant() {
        let (mut session, path) = tacos_session("normalized_variant", HistoryPolicy::Normalized);

        assert!(matches!(session.submit(" Cat "), SubmissionOutcome::Accepted { .. }));
        assert_eq!(session.used_words(), ["cat"]);
        assert_eq!(
            session.submit("CAT"),
            SubmissionOutcome::Rejected(Rejection::Unoriginal)
        );
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn raw_history_keeps_submitted_text() {
        let (mut session, path) = tacos_session("raw_history", HistoryPolicy::Raw);

        assert_eq!(
            session.submit(" Cat "),
            SubmissionOutcome::Accepted {
                word: " Cat ".to_string(),
                score: 1
            }
        );
        assert_eq!(
            session.submit("cat"),
            SubmissionOutcome::Rejected(Rejection::Unoriginal)
        );
        assert_eq!(session.used_words(), [" Cat "]);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn raw_history_rejects_exact_repeat() {
        let (mut session, path) = tacos_session("raw_repeat", HistoryPolicy::Raw);

        assert!(matches!(session.submit("Cat"), SubmissionOutcome::Accepted { .. }));
        assert_eq!(
            session.submit("Cat"),
            SubmissionOutcome::Rejected(Rejection::Unoriginal)
        );
        assert_eq!(session.score(), 1);
        assert_eq!(session.used_words(), ["Cat"]);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn impossible_word_rejected_even_if_real() {
        let (mut session, path) = tacos_session("impossible", HistoryPolicy::Normalized);

        // "toss" needs two of the root's single 's'
        assert_eq!(
            session.submit("toss"),
            SubmissionOutcome::Rejected(Rejection::NotPossible {
                root_word: "tacos".to_string()
            })
        );
        assert_eq!(session.score(), 0);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn each_root_letter_usable_once() {
        let (mut session, path) = tacos_session("letters_once", HistoryPolicy::Normalized);

        assert_eq!(
            session.submit("cats"),
            SubmissionOutcome::Accepted {
                word: "cats".to_string(),
                score: 1
            }
        );
        assert_eq!(
            session.submit("tacos"),
            SubmissionOutcome::Accepted {
                word: "tacos".to_string(),
                score: 2
            }
        );
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn unknown_word_rejected() {
        let (mut session, path) = tacos_session("unknown", HistoryPolicy::Normalized);

        assert_eq!(
            session.submit("cota"),
            SubmissionOutcome::Rejected(Rejection::NotRecognized)
        );
        assert!(session.used_words().is_empty());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn blank_submission_ignored() {
        let (mut session, path) = tacos_session("blank", HistoryPolicy::Normalized);

        assert_eq!(session.submit(""), SubmissionOutcome::Ignored);
        assert_eq!(session.submit("   \t"), SubmissionOutcome::Ignored);
        assert_eq!(session.score(), 0);
        assert!(session.used_words().is_empty());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn start_game_resets_round() {
        let (mut session, path) = tacos_session("reset", HistoryPolicy::Normalized);
        session.submit("cat");
        session.submit("coat");
        assert_eq!(session.score(), 2);

        session.start_game().unwrap();

        assert_eq!(session.score(), 0);
        assert!(session.used_words().is_empty());
        assert_eq!(session.root_word(), "tacos");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn start_game_rereads_source() {
        let (mut session, path) = tacos_session("reread", HistoryPolicy::Normalized);
        std::fs::write(&path, "silkworm\n").unwrap();

        session.start_game().unwrap();

        assert_eq!(session.root_word(), "silkworm");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn failed_restart_keeps_round() {
        let (mut session, path) = tacos_session("failed_restart", HistoryPolicy::Normalized);
        session.submit("cat");
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(session.start_game(), Err(WordListError::Io { .. })));
        assert_eq!(session.root_word(), "tacos");
        assert_eq!(session.score(), 1);
        assert_eq!(session.used_words(), ["cat"]);
    }

    #[test]
    fn empty_source_is_fatal() {
        let path = temp_word_file("empty", "\n  \n");
        let result = GameSession::with_rng(
            WordSource::File(path.clone()),
            Dictionary::embedded(),
            SessionConfig::default(),
            StdRng::seed_from_u64(0),
        );
        std::fs::remove_file(path).unwrap();

        assert!(matches!(result, Err(WordListError::Empty)));
    }

    #[test]
    fn missing_source_is_fatal() {
        let result = GameSession::new(
            WordSource::File(PathBuf::from("no/such/start.txt")),
            Dictionary::embedded(),
            SessionConfig::default(),
        );
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }
}

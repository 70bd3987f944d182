//! Full-round tests through the public API

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use word_scramble::core::Rejection;
use word_scramble::dictionary::{Dictionary, SpellChecker};
use word_scramble::session::{GameSession, SessionConfig, SubmissionOutcome};
use word_scramble::wordlists::{START_WORDS, WordListError, WordSource};

/// Spell checker that knows every word, so only the other guards matter
struct AcceptAll;

impl SpellChecker for AcceptAll {
    fn is_recognized(&self, _word: &str, _language: &str) -> bool {
        true
    }
}

fn word_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "word_scramble_flow_{name}_{}.txt",
        std::process::id()
    ));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn silkworm_round() {
    let path = word_file("silkworm", "silkworm\n");
    let mut session = GameSession::with_rng(
        WordSource::File(path.clone()),
        Dictionary::embedded(),
        SessionConfig::default(),
        StdRng::seed_from_u64(2),
    )
    .unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(session.root_word(), "silkworm");

    assert!(matches!(session.submit("silk"), SubmissionOutcome::Accepted { score: 1, .. }));
    assert!(matches!(session.submit("Worm"), SubmissionOutcome::Accepted { score: 2, .. }));
    assert_eq!(
        session.submit("silk"),
        SubmissionOutcome::Rejected(Rejection::Unoriginal)
    );
    assert_eq!(
        session.submit("milk"),
        SubmissionOutcome::Accepted {
            word: "milk".to_string(),
            score: 3
        }
    );
    assert_eq!(
        session.submit("silks"),
        SubmissionOutcome::Rejected(Rejection::NotPossible {
            root_word: "silkworm".to_string()
        })
    );
    assert_eq!(
        session.submit("wilk"),
        SubmissionOutcome::Rejected(Rejection::NotRecognized)
    );
    assert_eq!(session.submit("  "), SubmissionOutcome::Ignored);

    assert_eq!(session.score(), 3);
    assert_eq!(session.used_words(), ["milk", "worm", "silk"]);
}

#[test]
fn custom_spell_checker_plugs_in() {
    let path = word_file("custom_checker", "tacos\n");
    let mut session = GameSession::with_rng(
        WordSource::File(path.clone()),
        AcceptAll,
        SessionConfig::default(),
        StdRng::seed_from_u64(3),
    )
    .unwrap();
    std::fs::remove_file(&path).unwrap();

    // Not a word, but the checker accepts everything
    assert!(matches!(session.submit("tsoc"), SubmissionOutcome::Accepted { .. }));
    // Letter guard still applies
    assert!(matches!(
        session.submit("ttt"),
        SubmissionOutcome::Rejected(Rejection::NotPossible { .. })
    ));
}

#[test]
fn restart_always_resets() {
    let mut session = GameSession::with_rng(
        WordSource::Embedded,
        AcceptAll,
        SessionConfig::default(),
        StdRng::seed_from_u64(4),
    )
    .unwrap();

    for _ in 0..20 {
        let first = session.root_word().chars().next().unwrap().to_string();
        assert!(matches!(session.submit(&first), SubmissionOutcome::Accepted { .. }));

        session.start_game().unwrap();

        assert_eq!(session.score(), 0);
        assert!(session.used_words().is_empty());
        assert!(START_WORDS.iter().any(|&word| word == session.root_word()));
    }
}

#[test]
fn missing_word_list_is_a_startup_error() {
    let result = GameSession::new(
        WordSource::File(PathBuf::from("missing/start.txt")),
        Dictionary::embedded(),
        SessionConfig::default(),
    );

    let Err(error) = result else {
        panic!("expected a startup error");
    };
    assert!(matches!(error, WordListError::Io { .. }));
    assert!(error.to_string().contains("missing/start.txt"));
}

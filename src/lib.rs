//! Word Scramble
//!
//! A word game: a root word is picked at random and the player spells as many
//! words as they can from its letters. Each submission must be new, buildable
//! from the root word's letters, and a real word.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use word_scramble::dictionary::Dictionary;
//! use word_scramble::session::{GameSession, SessionConfig, SubmissionOutcome};
//! use word_scramble::wordlists::WordSource;
//!
//! let mut session =
//!     GameSession::new(WordSource::Embedded, Dictionary::embedded(), SessionConfig::default())
//!         .unwrap();
//! println!("Root word: {}", session.root_word());
//!
//! match session.submit("worm") {
//!     SubmissionOutcome::Accepted { score, .. } => println!("Score: {score}"),
//!     SubmissionOutcome::Rejected(rejection) => println!("{rejection}"),
//!     SubmissionOutcome::Ignored => {}
//! }
//! ```

// Core domain types
pub mod core;

// Submission guards
pub mod validator;

// Spell checking
pub mod dictionary;

// Word lists
pub mod wordlists;

// Round state
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

//! Core domain types for the word scramble game
//!
//! This module contains the fundamental domain types with zero I/O.
//! Everything here is pure and deterministic.

mod candidate;
mod letters;
mod rejection;

pub use candidate::Candidate;
pub use letters::LetterPool;
pub use rejection::Rejection;

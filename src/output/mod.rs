//! Terminal output formatting
//!
//! Display utilities for the line-based modes.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_result, print_outcome, print_rejection, print_round_header, print_used_words,
};

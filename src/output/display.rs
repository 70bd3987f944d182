//! Display functions for game and command results

use super::formatters::{create_progress_bar, letter_badge, spaced_letters};
use crate::commands::CheckResult;
use crate::core::Rejection;
use crate::session::SubmissionOutcome;
use colored::Colorize;

/// Print the root word and score at the start of a round
pub fn print_round_header(root_word: &str, score: u32) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        "  Root word: {}",
        spaced_letters(root_word).bright_yellow().bold()
    );
    println!("  Score:     {}", score.to_string().bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print the feedback for one submission
///
/// Blank submissions print nothing.
pub fn print_outcome(outcome: &SubmissionOutcome) {
    match outcome {
        SubmissionOutcome::Ignored => {}
        SubmissionOutcome::Accepted { word, score } => {
            println!(
                "{} {} {}",
                "✓".green().bold(),
                word.trim().bright_white().bold(),
                format!("(score: {score})").bright_black()
            );
        }
        SubmissionOutcome::Rejected(rejection) => print_rejection(rejection),
    }
}

/// Print a guard failure as an alert
pub fn print_rejection(rejection: &Rejection) {
    println!("\n  {} {}", "✗".red().bold(), rejection.title().red().bold());
    println!("    {}\n", rejection.message().bright_white());
}

/// Print the used-word list, newest first, each with its letter count
pub fn print_used_words(used_words: &[String], root_word: &str) {
    if used_words.is_empty() {
        println!("{}", "  No words yet.".bright_black());
        return;
    }

    let root_len = root_word.chars().count();
    for word in used_words {
        let len = word.trim().chars().count();
        println!(
            "  {} {:<12} {}",
            letter_badge(len).bright_cyan(),
            word.trim(),
            create_progress_bar(len, root_len, root_len).green()
        );
    }
}

/// Print the result of a one-shot check
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\nChecking {} against {}",
        result.word.to_uppercase().bright_white().bold(),
        result.root_word.to_uppercase().bright_yellow().bold()
    );

    match &result.rejection {
        None => println!("{}", "✅ Accepted".green().bold()),
        Some(rejection) => print_rejection(rejection),
    }
}

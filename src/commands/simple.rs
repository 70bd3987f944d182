//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::dictionary::SpellChecker;
use crate::output::{print_outcome, print_round_header, print_used_words};
use crate::session::{GameSession, SubmissionOutcome};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode
///
/// Reads one word per line from stdin until `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<C: SpellChecker, R: Rng>(session: &mut GameSession<C, R>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Scramble - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make as many words as you can from the letters of the root word.");
    println!("Each root letter can be used once per word.\n");
    println!("Commands: ':restart' for a new word, ':words' to list your words, ':quit' to exit\n");

    print_round_header(session.root_word(), session.score());

    let stdin = io::stdin();
    let mut lines = stdin.lock();

    loop {
        let Some(input) = get_user_input(&mut lines, "Enter your word")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.trim() {
            ":quit" | ":q" | ":exit" => {
                println!("\n👋 Final score: {}\n", session.score());
                return Ok(());
            }
            ":restart" | ":r" | ":new" => match session.start_game() {
                Ok(()) => {
                    println!("\n🔄 New round started!");
                    print_round_header(session.root_word(), session.score());
                }
                Err(e) => {
                    tracing::error!(error = %e, "Restart failed");
                    println!("{}", format!("❌ Could not restart: {e}").red());
                }
            },
            ":words" | ":w" => {
                print_used_words(session.used_words(), session.root_word());
            }
            _ => {
                let outcome = session.submit(&input);
                print_outcome(&outcome);

                if matches!(outcome, SubmissionOutcome::Accepted { .. }) {
                    print_used_words(session.used_words(), session.root_word());
                }
            }
        }
    }
}

/// Get user input with a prompt
///
/// Returns `None` at end of input. The line is returned untrimmed apart from
/// its line terminator, since submissions are normalized downstream.
fn get_user_input<B: BufRead>(reader: &mut B, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = reader.read_line(&mut input).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }

    let line = input.trim_end_matches(['\n', '\r']).to_string();
    Ok(Some(line))
}

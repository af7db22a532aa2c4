//! Terminal interaction: credential prompts and deletion confirmation

use anyhow::{Context, Result};
use hedns_core::ConfirmDeletion;
use std::io::{self, BufRead, Write};

/// Read the account name from stdin
pub fn read_username() -> Result<String> {
    print!("Username: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read username")?;
    Ok(line.trim().to_string())
}

/// Read the password without echoing it
pub fn read_password() -> Result<String> {
    rpassword::prompt_password("Password: ").context("Failed to read password")
}

/// Asks on the terminal before every deletion
#[derive(Debug, Default)]
pub struct TerminalConfirmation;

impl ConfirmDeletion for TerminalConfirmation {
    fn confirm(&self, record_id: &str) -> bool {
        print!(
            "Are you sure you want to delete record ID {}? (y/N): ",
            record_id
        );
        if io::stdout().flush().is_err() {
            return false;
        }

        // Blocking read; the CLI runtime is single-threaded with nothing else to drive
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_affirmative(&answer),
            // Unreadable stdin counts as "no"
            Err(_) => false,
        }
    }
}

/// Only `y` / `Y` confirms
fn is_affirmative(answer: &str) -> bool {
    answer.trim_end_matches(['\r', '\n']).eq_ignore_ascii_case("y")
}

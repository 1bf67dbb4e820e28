//! Console report shared by both tools.
use owo_colors::OwoColorize;
use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Action {
    Ok,
    Skipped(String),
}

/// Counts of per-file outcomes in one batch.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Tally {
    pub ok: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Tally {
    /// Prints one status line for `description` and counts the result.
    pub fn record<T: Display, E: Display>(&mut self, description: T, result: &Result<Action, E>) {
        match result {
            Ok(Action::Ok) => {
                println!("[{}] {}", " ok ".green(), description);
                self.ok += 1;
            }
            Ok(Action::Skipped(reason)) => {
                println!("[{}] {}: {}", "skip".cyan(), description, reason);
                self.skipped += 1;
            }
            Err(error) => {
                println!("[{}] {}: {}", "fail".red(), description, error);
                self.failed += 1;
            }
        }
    }
}

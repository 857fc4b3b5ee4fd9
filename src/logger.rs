//! Leveled console logging.

use chrono::Local;
use colored::Colorize;

/// Console logger with three levels and an optional timestamp prefix.
///
/// Info goes to stdout, warnings and errors to stderr. The `date` flag on
/// each method prepends a local timestamp; the engine suppresses it for the
/// report-style lines it prints mid-run.
#[derive(Debug, Default, Clone)]
pub struct Logger;

impl Logger {
    pub fn new() -> Self {
        Logger
    }

    fn stamp() -> String {
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn info(&self, message: &str, date: bool) {
        if date {
            println!("{} {}", Self::stamp().dimmed(), message);
        } else {
            println!("{}", message);
        }
    }

    pub fn warning(&self, message: &str, date: bool) {
        if date {
            eprintln!("{} {}", Self::stamp().dimmed(), message.yellow());
        } else {
            eprintln!("{}", message.yellow());
        }
    }

    pub fn error(&self, message: &str, date: bool) {
        if date {
            eprintln!("{} {}", Self::stamp().dimmed(), message.red());
        } else {
            eprintln!("{}", message.red());
        }
    }
}

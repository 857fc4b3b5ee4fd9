use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use patsweep::{Action, Cleaner, Logger, Strategy, TerminalPrompt};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Recursively find files and folders by pattern, then delete them or normalize their line endings",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Delete files and folders matching the patterns
    Del {
        /// Patterns to match (quote each one)
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Working directory
        #[arg(short, long)]
        path: PathBuf,

        /// Clean everything except the specified patterns
        #[arg(short, long)]
        negate: bool,

        /// Interpret the patterns as shell globs instead of suffixes
        #[arg(short, long)]
        glob: bool,
    },
    /// Edit matching files in place
    Edit {
        /// Convert Windows line endings into Unix line endings
        #[arg(short, long)]
        line_endings: bool,

        /// Patterns to match (quote each one)
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Working directory
        #[arg(short, long)]
        path: PathBuf,

        /// Edit everything except the specified patterns
        #[arg(short, long)]
        negate: bool,

        /// Accepted for symmetry with `del`; line-ending cleaning always
        /// matches by suffix
        #[arg(short, long)]
        glob: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let logger = Logger::new();
    let mut prompt = TerminalPrompt::new();

    match cli.command {
        Command::Del {
            patterns,
            path,
            negate,
            glob,
        } => {
            logger.info("Deleting files...", true);
            let strategy = if glob { Strategy::Glob } else { Strategy::Suffix };
            let mut cleaner = Cleaner::new(path, patterns, negate, logger.clone());
            cleaner.run(Action::Delete(strategy), &mut prompt)?;
        }
        Command::Edit {
            line_endings,
            patterns,
            path,
            negate,
            glob: _,
        } => {
            if !line_endings {
                bail!("`edit` requires --line-endings");
            }
            logger.info("Cleaning files...", true);
            let mut cleaner = Cleaner::new(path, patterns, negate, logger.clone());
            cleaner.run(Action::NormalizeEndings, &mut prompt)?;
        }
    }

    Ok(())
}

//! The walk, match, confirm and apply engine.

use crate::action::Action;
use crate::logger::Logger;
use crate::matcher::Strategy;
use crate::ops::{self, OpError};
use crate::prompt::PromptReader;

use anyhow::{bail, Result};
use colored::Colorize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// A failed operation on one target, reported after the batch completes.
/// Bulk mode records the bare message; per-item mode records which action
/// failed on which target.
#[derive(Debug)]
enum ErrorRecord {
    Plain(String),
    Item {
        action: &'static str,
        path: PathBuf,
        message: String,
    },
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorRecord::Plain(message) => write!(f, "{}", message),
            ErrorRecord::Item {
                action,
                path,
                message,
            } => write!(f, "{} '{}': {}", action, path.display(), message),
        }
    }
}

/// Recursively cleans patterns of files/directories under a root.
///
/// One `run` call walks the tree, collects matching paths with their sizes,
/// asks for confirmation once (with an opt-in per-item confirmation mode),
/// then applies the action to every confirmed target, aggregating failures
/// for a final report. Targets and the size total are reset each run;
/// concurrent runs on one instance are not supported.
#[derive(Debug)]
pub struct Cleaner {
    root: PathBuf,
    patterns: Vec<String>,
    negate: bool,
    logger: Logger,
    targets: Vec<PathBuf>,
    cum_size: u64,
}

impl Cleaner {
    pub fn new(root: impl Into<PathBuf>, patterns: Vec<String>, negate: bool, logger: Logger) -> Self {
        Cleaner {
            root: root.into(),
            patterns,
            negate,
            logger,
            targets: Vec::new(),
            cum_size: 0,
        }
    }

    /// Paths collected by the most recent discovery phase, in walk order.
    pub fn targets(&self) -> &[PathBuf] {
        &self.targets
    }

    /// Find targets for `action`, then confirm and apply it.
    ///
    /// The bulk prompt accepts `y` (apply to all), `c` (apply with per-item
    /// confirmation) and anything else (including an unreadable prompt)
    /// cancels without touching a single target.
    pub fn run(&mut self, action: Action, prompt: &mut dyn PromptReader) -> Result<()> {
        if !self.root.is_dir() {
            bail!("not a directory: {}", self.root.display());
        }

        self.logger.info(
            &format!("Working inside directory:\n{}", self.root.display()),
            false,
        );

        self.targets.clear();
        self.cum_size = 0;
        let root = self.root.clone();
        self.walk_dir(&root, action.strategy());

        if self.targets.is_empty() {
            self.logger.info("No results.", false);
            return Ok(());
        }

        let question = format!(
            "{} item(s) found. {} {}",
            self.targets.len(),
            action.prompt_verb(),
            "(Yes/No/Confirm)?".yellow()
        );

        match prompt.read_char(&question) {
            Some('y') | Some('Y') => self.apply(action, false, prompt),
            Some('c') | Some('C') => self.apply(action, true, prompt),
            _ => self.logger.warning("Action cancelled.", false),
        }

        Ok(())
    }

    /// Visit one directory: evaluate its subdirectory entries, then its file
    /// entries (both in listing order), then recurse into each subdirectory.
    /// Matched directories are still descended into, so a parent and its
    /// children can all be recorded as separate targets.
    fn walk_dir(&mut self, dir: &Path, strategy: Strategy) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                self.logger.warning(
                    &format!("Failed to read directory {}: {}", dir.display(), err),
                    false,
                );
                return;
            }
        };

        let mut subdirs = Vec::new();
        let mut files = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    self.logger.warning(
                        &format!("Failed to read entry in {}: {}", dir.display(), err),
                        false,
                    );
                    continue;
                }
            };

            // Symlinks are evaluated as plain entries and never followed.
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir {
                subdirs.push(entry.path());
            } else {
                files.push(entry.path());
            }
        }

        for path in &subdirs {
            self.consider(path, strategy, true);
        }
        for path in &files {
            self.consider(path, strategy, false);
        }
        for path in &subdirs {
            self.walk_dir(path, strategy);
        }
    }

    /// Test one entry against the pattern set; on a match, record it, add its
    /// on-disk size to the running total and print a discovery line.
    fn consider(&mut self, path: &Path, strategy: Strategy, is_dir: bool) {
        let path_str = path.to_string_lossy();
        if !strategy.effective_match(&path_str, &self.patterns, self.negate) {
            return;
        }

        // Directory targets count their inode size, not their contents.
        let size = match fs::symlink_metadata(path) {
            Ok(metadata) => metadata.len(),
            Err(err) => {
                self.logger.warning(
                    &format!("Could not stat {}: {}", path.display(), err),
                    false,
                );
                0
            }
        };
        self.cum_size += size;

        let marker = if is_dir { "+-->" } else { "|-->" };
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        self.logger.info(
            &format!("{} {}", marker.cyan(), relative.display()),
            false,
        );

        self.targets.push(path.to_path_buf());
    }

    /// Apply `action` to every target in discovery order.
    ///
    /// In per-item mode each target gets its own Yes/No/Abort prompt; Abort
    /// stops the loop immediately without reverting anything already applied.
    /// A target's failure is recorded and never interrupts the batch.
    fn apply(&self, action: Action, confirm: bool, prompt: &mut dyn PromptReader) {
        let func: fn(&Path) -> Result<(), OpError> = match action {
            Action::Delete(_) => ops::delete,
            Action::NormalizeEndings => ops::normalize_endings,
        };

        let mut applied = 0usize;
        let mut errors: Vec<ErrorRecord> = Vec::new();

        for target in &self.targets {
            if confirm {
                let question = format!(
                    "\n{} '{}' \n{} ",
                    action.prompt_verb(),
                    target.display(),
                    "(Yes/No/Abort)?".yellow()
                );
                match prompt.read_char(&question) {
                    Some('y') | Some('Y') => match func(target) {
                        Ok(()) => applied += 1,
                        Err(err) => errors.push(ErrorRecord::Item {
                            action: action.name(),
                            path: target.clone(),
                            message: err.to_string(),
                        }),
                    },
                    Some('a') | Some('A') => break,
                    _ => continue,
                }
            } else {
                match func(target) {
                    Ok(()) => applied += 1,
                    Err(err) => errors.push(ErrorRecord::Plain(err.to_string())),
                }
            }
        }

        if applied > 0 {
            // Kilobytes of everything discovered, not just what was applied.
            let kilobytes = (self.cum_size as f64 / 1024.0).round() as u64;
            self.logger.info(
                &format!("{} {} items ({}K)", action.done_verb(), applied, kilobytes),
                false,
            );
        } else {
            self.logger.info("No action taken", false);
        }

        if !errors.is_empty() {
            self.logger.error("The following errors were found:", false);
            for record in &errors {
                self.logger.error(&record.to_string(), false);
            }
        }
    }
}

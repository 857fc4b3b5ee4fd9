//! patsweep - Pattern-Driven File Sweeper
//!
//! patsweep recursively walks a directory, matches every entry against a set
//! of patterns (literal suffixes or shell globs, optionally negated), reports
//! what it found, and after interactive confirmation either deletes the
//! matches or normalizes their line endings.
//!
//! ## Architecture
//!
//! - `matcher` decides match/no-match for a path string (pure, total)
//! - `action` is the closed set of operations with their matching strategies
//! - `cleaner` walks, collects targets with sizes, runs the two-stage
//!   confirmation protocol and applies the action with error aggregation
//! - `ops` holds the terminal operations (delete with permission-repair
//!   retry, windows-1252 to UTF-8 line-ending normalization)
//! - `prompt` reads one raw keystroke with scoped terminal-mode restoration
//!   and is substitutable with a scripted source in tests

pub mod action;
pub mod cleaner;
pub mod logger;
pub mod matcher;
pub mod ops;
pub mod prompt;

// Re-export commonly used items
pub use action::Action;
pub use cleaner::Cleaner;
pub use logger::Logger;
pub use matcher::Strategy;
pub use ops::{delete, normalize_endings, OpError};
pub use prompt::{PromptReader, ScriptedPrompt, TerminalPrompt};

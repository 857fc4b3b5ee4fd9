//! The actions the cleaner can apply to its targets.

use crate::matcher::Strategy;

/// A terminal operation together with the matching strategy that selects its
/// targets. This is a closed set: `del` uses suffix matching unless glob
/// matching was requested, line-ending normalization always uses suffix
/// matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Remove matching files and directory trees.
    Delete(Strategy),
    /// Rewrite matching files with Unix line endings.
    NormalizeEndings,
}

impl Action {
    pub fn strategy(self) -> Strategy {
        match self {
            Action::Delete(strategy) => strategy,
            Action::NormalizeEndings => Strategy::Suffix,
        }
    }

    /// Verb shown in the confirmation prompts.
    pub fn prompt_verb(self) -> &'static str {
        match self {
            Action::Delete(_) => "Delete files/folders",
            Action::NormalizeEndings => "Convert all Windows endings into Unix endings",
        }
    }

    /// Verb shown in the completion summary.
    pub fn done_verb(self) -> &'static str {
        match self {
            Action::Delete(_) => "Deleted",
            Action::NormalizeEndings => "Line endings cleaned for",
        }
    }

    /// Short name used when reporting a failed operation on a target.
    pub fn name(self) -> &'static str {
        match self {
            Action::Delete(_) => "delete",
            Action::NormalizeEndings => "clean_endings",
        }
    }
}

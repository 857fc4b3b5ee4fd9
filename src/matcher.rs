//! Pattern matching strategies for walked paths.

use glob::Pattern;

/// How a path string is tested against the pattern set.
///
/// Both strategies operate on the full joined path string as produced by the
/// walker, never the bare filename. A glob like `*.tmp` therefore matches
/// `some/dir/file.tmp` because `*` crosses separators, but anchored patterns
/// like `build?` only match when the whole path fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Literal, case-sensitive suffix comparison.
    Suffix,
    /// Shell-glob semantics: `*`, `?`, `[...]`.
    Glob,
}

impl Strategy {
    /// True iff `path` matches at least one pattern under this strategy.
    ///
    /// Matching is total: an invalid glob pattern simply never matches.
    pub fn matches(self, path: &str, patterns: &[String]) -> bool {
        match self {
            Strategy::Suffix => patterns.iter().any(|p| path.ends_with(p.as_str())),
            Strategy::Glob => patterns
                .iter()
                .any(|p| Pattern::new(p).map(|pat| pat.matches(path)).unwrap_or(false)),
        }
    }

    /// Applies the negate flag on top of the raw predicate:
    /// `negate XOR matches(path)`.
    pub fn effective_match(self, path: &str, patterns: &[String], negate: bool) -> bool {
        negate != self.matches(path, patterns)
    }
}

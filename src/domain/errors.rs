//! Error taxonomy for the diff/patch core
//!
//! Every failure the core can produce is surfaced synchronously as a [`DiffrError`].
//! Matcher misuse is reported rather than panicking, so callers that drive a matcher
//! by hand get a typed failure they can propagate with `?`.

/// Errors produced by the suffix tree matcher, the instruction codec and the patch applier.
#[derive(Debug, thiserror::Error)]
pub enum DiffrError {
    /// `match_next` was called on a matcher that already reported a mismatch.
    #[error("matcher is finished and cannot consume further elements")]
    MatcherFinished,

    /// `range` or `last_index` was called before the matcher entered an edge.
    #[error("matcher has not matched any element yet")]
    MatcherNotStarted,

    /// A patch line is neither a copy (`<from>,<to>`) nor an insert (`> <text>`).
    #[error("malformed instruction at line {line}: {text:?}")]
    MalformedInstruction { line: usize, text: String },

    /// A copy instruction whose range ends before it starts.
    #[error("copy {from},{to} ends before it starts")]
    ReversedCopy { from: usize, to: usize },

    /// A copy instruction refers to lines that the original does not have.
    #[error("copy {from},{to} is out of range for an original of {len} lines")]
    CopyOutOfRange { from: usize, to: usize, len: usize },

    /// The instruction grammar failed to compile.
    #[error("invalid instruction pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Convenience alias for core results.
pub type Result<T> = std::result::Result<T, DiffrError>;

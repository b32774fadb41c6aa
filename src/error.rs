//! Error types shared by the puzzle model and the search engine.

use thiserror::Error;

/// Failure to build a [`Board`](crate::engine::Board) from a digit string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The input did not contain exactly nine characters.
    #[error("expected {expected} digits, found {found}")]
    InvalidLength { expected: usize, found: usize },

    /// A character other than `0`..`8` was found.
    #[error("unrecognized character '{ch}' at position {index}")]
    InvalidCharacter { ch: char, index: usize },

    /// A digit appeared more than once, so the input is not a permutation.
    #[error("digit '{digit}' appears more than once")]
    DuplicateDigit { digit: char },
}

/// Failure to construct a [`Searcher`](crate::solver::Searcher).
///
/// These are returned before any node is tested. Exhaustion and cancellation
/// are not errors; they are reported through
/// [`SearchOutcome`](crate::solver::SearchOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The algorithm selector names no known strategy.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The parameter kind does not fit the algorithm (a heuristic for BFS,
    /// a depth limit for A*, ...).
    #[error("algorithm {algorithm} expects {expected}")]
    MismatchedParameter {
        algorithm: &'static str,
        expected: &'static str,
    },

    /// A heuristic name could not be resolved.
    #[error("unknown heuristic: {0}")]
    UnknownHeuristic(String),

    /// A depth limit was neither `-1` nor a non-negative integer.
    #[error("invalid depth limit: {0}")]
    InvalidDepthLimit(String),
}

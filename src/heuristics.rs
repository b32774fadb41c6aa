//! Heuristic estimates of the number of moves left to reach the goal.
//!
//! Each heuristic is a pure function of a puzzle state. They never see the
//! search engine, so any of them can be handed to a Greedy or A* searcher.
use crate::error::SearchError;
use crate::state::PuzzleState;
use std::fmt;
use std::str::FromStr;

/// Always `0`. Turns Greedy and A* into uninformed searches.
pub fn h0<S: PuzzleState>(_state: &S) -> u32 {
    0
}

/// Number of misplaced tiles. Admissible, since every misplaced tile needs
/// at least one move.
pub fn h1<S: PuzzleState>(state: &S) -> u32 {
    state.misplaced_count()
}

/// Sum of the Manhattan distances of the tiles to their goal cells.
/// Admissible, and never smaller than [`h1`].
pub fn h2<S: PuzzleState>(state: &S) -> u32 {
    state.tile_distance_sum()
}

/// Selectable heuristic for informed searchers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// See [`h0`].
    Zero,
    /// See [`h1`].
    Misplaced,
    /// See [`h2`].
    Manhattan,
}

impl Heuristic {
    /// Every heuristic, weakest first.
    pub const ALL: [Heuristic; 3] = [Heuristic::Zero, Heuristic::Misplaced, Heuristic::Manhattan];

    /// Estimates the moves left from `state`.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// use eight_puzzle_solver::heuristics::Heuristic;
    ///
    /// let board = Board::from_digits("142358607").unwrap();
    /// assert_eq!(Heuristic::Zero.evaluate(&board), 0);
    /// assert_eq!(Heuristic::Misplaced.evaluate(&board), 5);
    /// assert_eq!(Heuristic::Manhattan.evaluate(&board), 5);
    /// ```
    pub fn evaluate<S: PuzzleState>(&self, state: &S) -> u32 {
        match self {
            Heuristic::Zero => h0(state),
            Heuristic::Misplaced => h1(state),
            Heuristic::Manhattan => h2(state),
        }
    }

    /// Short name used in status lines.
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Zero => "h0",
            Heuristic::Misplaced => "h1",
            Heuristic::Manhattan => "h2",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Accepts the short names (`h0`, `h1`, `h2`) and the long ones
/// (`zero`, `misplaced`, `manhattan`), case-insensitively.
impl FromStr for Heuristic {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "h0" | "zero" => Ok(Heuristic::Zero),
            "h1" | "misplaced" => Ok(Heuristic::Misplaced),
            "h2" | "manhattan" => Ok(Heuristic::Manhattan),
            _ => Err(SearchError::UnknownHeuristic(s.to_string())),
        }
    }
}

//! Batch solving of many configurations with one search strategy.
//!
//! Every configuration gets a fresh searcher, so node counts are per puzzle.
//! The summary keeps the aggregate numbers reported at the end of a run:
//! how many puzzles were solved, and the average moves and tested nodes over
//! the solved ones.
use crate::engine::Board;
use crate::error::{BoardError, SearchError};
use crate::solver::{Algorithm, CancelFlag, SearchOutcome, SearchParam, Searcher};
use crate::utils::puzzle_lines;
use log::{info, warn};
use std::fmt;

/// Result of one line of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryResult {
    Solved { moves: u32, tested: u64 },
    NoSolution { tested: u64 },
    /// The search was cancelled; the batch carries on with the next line.
    Cancelled { tested: u64 },
    /// The line was not a valid configuration.
    Invalid(BoardError),
}

/// One processed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub line: usize,
    pub digits: String,
    pub result: EntryResult,
}

/// `<digits>: <n> moves, <m> states tested` and friends.
impl fmt::Display for BatchEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.digits)?;
        match &self.result {
            EntryResult::Solved { moves, tested } => {
                write!(f, "{} moves, {} states tested", moves, tested)
            }
            EntryResult::NoSolution { tested } => {
                write!(f, "no solution, {} states tested", tested)
            }
            EntryResult::Cancelled { .. } => write!(f, "search terminated, no solution"),
            EntryResult::Invalid(err) => write!(f, "invalid puzzle ({})", err),
        }
    }
}

/// Aggregate statistics of a batch run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub num_puzzles: usize,
    pub num_solved: usize,
    pub total_moves: u64,
    pub total_tested: u64,
}

impl BatchSummary {
    fn record(&mut self, result: &EntryResult) {
        self.num_puzzles += 1;
        if let EntryResult::Solved { moves, tested } = result {
            self.num_solved += 1;
            self.total_moves += u64::from(*moves);
            self.total_tested += tested;
        }
    }

    /// Average solution length over solved puzzles, `None` if none was solved.
    pub fn average_moves(&self) -> Option<f64> {
        (self.num_solved > 0).then(|| self.total_moves as f64 / self.num_solved as f64)
    }

    /// Average tested nodes over solved puzzles, `None` if none was solved.
    pub fn average_tested(&self) -> Option<f64> {
        (self.num_solved > 0).then(|| self.total_tested as f64 / self.num_solved as f64)
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "solved {} puzzles", self.num_solved)?;
        if let (Some(moves), Some(tested)) = (self.average_moves(), self.average_tested()) {
            write!(f, "\naverages: {} moves, {} states tested", moves, tested)?;
        }
        Ok(())
    }
}

/// Solves every non-empty line of `content` with `algorithm`.
///
/// `on_entry` is called after each line, so callers can print progress as
/// they go. A raised `cancel` flag stops only the puzzle being searched; the
/// flag is cleared and the next line is processed.
///
/// # Errors
/// Fails before any search if `param` does not fit `algorithm`.
pub fn process_lines<F>(
    content: &str,
    algorithm: Algorithm,
    param: SearchParam,
    cancel: &CancelFlag,
    mut on_entry: F,
) -> Result<BatchSummary, SearchError>
where
    F: FnMut(&BatchEntry),
{
    // Surface parameter errors once, up front.
    Searcher::<Board>::new(algorithm, param)?;

    let mut summary = BatchSummary::default();
    for (line, digits) in puzzle_lines(content) {
        let result = match Board::from_digits(digits) {
            Ok(board) => solve_one(board, algorithm, param, cancel)?,
            Err(err) => {
                warn!("line {}: {}", line, err);
                EntryResult::Invalid(err)
            }
        };
        summary.record(&result);

        let entry = BatchEntry {
            line,
            digits: digits.to_string(),
            result,
        };
        on_entry(&entry);
    }

    info!(
        "{} batch: {} of {} solved",
        algorithm, summary.num_solved, summary.num_puzzles
    );
    Ok(summary)
}

fn solve_one(
    board: Board,
    algorithm: Algorithm,
    param: SearchParam,
    cancel: &CancelFlag,
) -> Result<EntryResult, SearchError> {
    let mut searcher = Searcher::new(algorithm, param)?.with_cancel_flag(cancel.clone());
    let result = match searcher.find_solution(board) {
        SearchOutcome::Solved(node) => EntryResult::Solved {
            moves: node.depth(),
            tested: searcher.num_tested(),
        },
        SearchOutcome::Exhausted => EntryResult::NoSolution {
            tested: searcher.num_tested(),
        },
        SearchOutcome::Cancelled => {
            cancel.reset();
            EntryResult::Cancelled {
                tested: searcher.num_tested(),
            }
        }
    };
    Ok(result)
}

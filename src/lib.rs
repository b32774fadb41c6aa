//! # Eight Puzzle Solver Library
//!
//! This library explores the state space of the sliding Eight Puzzle to find
//! a sequence of blank moves from an initial configuration to the solved one.
//!
//! It is used by three binaries:
//! - `eight_puzzle`: Solves one configuration with a chosen algorithm and
//!   optionally prints the move-by-move transcript.
//! - `process_file`: Solves every configuration in a text file and reports
//!   aggregate statistics.
//! - `heuristic_evaluator`: Compares the heuristics under A* on seeded
//!   scrambled boards.
//!
//! ## Modules
//! - `engine`: The puzzle model (`Board`, `Direction`): parsing, blank moves,
//!   goal test, misplaced-tile count and Manhattan distance.
//! - `state`: The `PuzzleState` capabilities the engine relies on, and
//!   `SearchNode`, the immutable search-tree node with parent links.
//! - `frontier`: Interchangeable frontier policies (random, FIFO, LIFO,
//!   priority).
//! - `heuristics`: Zero, misplaced-tile and Manhattan-distance estimates.
//! - `solver`: The `Searcher` loop, algorithm selection and cancellation.
//! - `batch`: Solving many configurations and aggregating the results.
//! - `utils`: Parsing helpers for command-line and file input.
//! - `error`: Error types.

pub mod batch;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod heuristics;
pub mod solver;
pub mod state;
pub mod utils;

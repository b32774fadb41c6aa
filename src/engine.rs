//! Puzzle model for the Eight Puzzle.
//!
//! This module defines the concrete board the search engine works on:
//! - `Direction`: The four ways the blank cell can travel.
//! - `Board`: A 3x3 grid of tiles `0`..`8`, where `0` is the blank. It handles
//!   parsing from and serializing to a compact digit string, blank moves,
//!   the goal test, and the measurements the heuristics are built from.
//!
//! The search engine never touches the grid directly; it only relies on the
//! capabilities exposed through [`crate::state::PuzzleState`].
use crate::error::BoardError;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

/// Side length of the board. The board is always square.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board, blank included.
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Digit string of the solved configuration: blank in the top-left corner,
/// tiles ascending in row-major order.
pub const GOAL_DIGITS: &str = "012345678";

/// A direction in which the blank cell can be moved.
///
/// Moving the blank `Up` swaps it with the tile directly above it, and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order successors are generated.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row and column offset applied to the blank position.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction that undoes this one.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Lowercase name, as used in move transcripts.
    ///
    /// # Examples
    ///
    /// ```
    /// use eight_puzzle_solver::engine::Direction;
    /// assert_eq!(Direction::Left.as_str(), "left");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// An Eight Puzzle board.
///
/// Tiles are stored as digits `0`..`8`, `0` being the blank. The blank
/// position is cached so that moves do not need to search for it. Every
/// `Board` holds a permutation of `0`..`8`; the constructors enforce this.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [[u8; BOARD_SIZE]; BOARD_SIZE],
    blank_r: usize,
    blank_c: usize,
}

impl Board {
    /// Creates the solved board.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// let board = Board::goal();
    /// assert!(board.is_goal());
    /// assert_eq!(board.digit_string(), "012345678");
    /// ```
    pub fn goal() -> Self {
        let mut tiles = [[0u8; BOARD_SIZE]; BOARD_SIZE];
        for (i, cell) in tiles.iter_mut().flatten().enumerate() {
            *cell = i as u8;
        }
        Board {
            tiles,
            blank_r: 0,
            blank_c: 0,
        }
    }

    /// Parses a board from a digit string such as `"142358607"`.
    ///
    /// The string is read row by row. It must contain each digit `0`..`8`
    /// exactly once.
    ///
    /// # Arguments
    /// * `digits`: The nine-character configuration.
    ///
    /// # Returns
    /// * `Ok(Board)` on success.
    /// * `Err(BoardError)` if the length is wrong, a character is not a digit
    ///   in `0`..`8`, or a digit is repeated.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// let board = Board::from_digits("142358607").unwrap();
    /// assert_eq!(board.get_tile(0, 0), 1);
    /// assert_eq!(board.blank_position(), (2, 1));
    ///
    /// assert!(Board::from_digits("1423").is_err());
    /// assert!(Board::from_digits("112358607").is_err());
    /// ```
    pub fn from_digits(digits: &str) -> Result<Self, BoardError> {
        let found = digits.chars().count();
        if found != NUM_CELLS {
            return Err(BoardError::InvalidLength {
                expected: NUM_CELLS,
                found,
            });
        }

        let mut tiles = [[0u8; BOARD_SIZE]; BOARD_SIZE];
        let mut seen = [false; NUM_CELLS];
        let mut blank = (0, 0);

        for (index, ch) in digits.chars().enumerate() {
            let value = match ch.to_digit(10) {
                Some(d) if (d as usize) < NUM_CELLS => d as usize,
                _ => return Err(BoardError::InvalidCharacter { ch, index }),
            };
            if seen[value] {
                return Err(BoardError::DuplicateDigit { digit: ch });
            }
            seen[value] = true;

            let (r, c) = (index / BOARD_SIZE, index % BOARD_SIZE);
            tiles[r][c] = value as u8;
            if value == 0 {
                blank = (r, c);
            }
        }

        Ok(Board {
            tiles,
            blank_r: blank.0,
            blank_c: blank.1,
        })
    }

    /// Creates a board by applying `num_moves` random blank moves to the goal.
    ///
    /// The same seed always yields the same board. A move that would undo the
    /// previous one is never chosen, so short scrambles do not collapse back
    /// to the goal immediately. The result is always solvable.
    ///
    /// # Arguments
    /// * `seed`: Seed for the `SmallRng` driving the scramble.
    /// * `num_moves`: Number of legal blank moves to apply.
    pub fn new_scrambled_with_seed(seed: u64, num_moves: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::goal();
        let mut last: Option<Direction> = None;

        let mut applied = 0;
        while applied < num_moves {
            let dir = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
            if last.map_or(false, |l| l.opposite() == dir) {
                continue;
            }
            if board.move_blank(dir) {
                last = Some(dir);
                applied += 1;
            }
        }
        board
    }

    /// Returns the tile at row `r`, column `c`. `0` is the blank.
    ///
    /// # Panics
    /// Panics if `r` or `c` is not below `BOARD_SIZE`.
    pub fn get_tile(&self, r: usize, c: usize) -> u8 {
        self.tiles[r][c]
    }

    /// Row and column of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank_r, self.blank_c)
    }

    /// Moves the blank one cell in `direction`.
    ///
    /// # Returns
    /// `true` if the move was legal and has been applied, `false` if it would
    /// take the blank off the board. An illegal move leaves the board as is.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::{Board, Direction};
    /// let mut board = Board::goal();
    /// assert!(!board.move_blank(Direction::Up));
    /// assert!(board.move_blank(Direction::Right));
    /// assert_eq!(board.digit_string(), "102345678");
    /// ```
    pub fn move_blank(&mut self, direction: Direction) -> bool {
        let (dr, dc) = direction.as_offset();
        let new_r = self.blank_r as isize + dr;
        let new_c = self.blank_c as isize + dc;

        if new_r < 0 || new_r >= BOARD_SIZE as isize || new_c < 0 || new_c >= BOARD_SIZE as isize
        {
            return false;
        }

        let (new_r, new_c) = (new_r as usize, new_c as usize);
        self.tiles[self.blank_r][self.blank_c] = self.tiles[new_r][new_c];
        self.tiles[new_r][new_c] = 0;
        self.blank_r = new_r;
        self.blank_c = new_c;
        true
    }

    /// Serializes the board row by row into its canonical digit string.
    pub fn digit_string(&self) -> String {
        self.tiles
            .iter()
            .flatten()
            .map(|&t| char::from(b'0' + t))
            .collect()
    }

    /// Whether every tile is in its goal position.
    pub fn is_goal(&self) -> bool {
        self.num_misplaced() == 0
    }

    /// Number of non-blank tiles that are not in their goal position.
    pub fn num_misplaced(&self) -> u32 {
        self.tiles
            .iter()
            .flatten()
            .enumerate()
            .filter(|&(i, &t)| t != 0 && t as usize != i)
            .count() as u32
    }

    /// Sum over the non-blank tiles of the row plus column distance between
    /// the tile's current cell and its goal cell.
    pub fn manhattan_distance(&self) -> u32 {
        let mut distance = 0;
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let tile = self.tiles[r][c] as usize;
                if tile == 0 {
                    continue;
                }
                let (goal_r, goal_c) = (tile / BOARD_SIZE, tile % BOARD_SIZE);
                distance += r.abs_diff(goal_r) + c.abs_diff(goal_c);
            }
        }
        distance as u32
    }

    /// Whether the goal can be reached from this board at all.
    ///
    /// On an odd-width board a configuration is solvable exactly when the
    /// number of inversions among the non-blank tiles is even.
    pub fn is_solvable(&self) -> bool {
        let flat: Vec<u8> = self.tiles.iter().flatten().copied().filter(|&t| t != 0).collect();
        let inversions: usize = flat
            .iter()
            .enumerate()
            .map(|(i, &t)| flat[i + 1..].iter().filter(|&&next| next < t).count())
            .sum();
        inversions % 2 == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::goal()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_digits(s)
    }
}

/// Renders the board as three lines, `_` standing for the blank.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.tiles {
            for &tile in row {
                if tile == 0 {
                    write!(f, "_ ")?;
                } else {
                    write!(f, "{} ", tile)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

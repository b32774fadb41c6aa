use crate::engine::Board;
use crate::error::{BoardError, SearchError};
use crate::heuristics::Heuristic;
use crate::solver::{Algorithm, DepthLimit, SearchParam};

/// Interprets a textual searcher parameter for `algorithm`.
///
/// Informed algorithms (Greedy, A*) take a heuristic name such as `h2` or
/// `manhattan`. The others take a depth limit, `-1` meaning unlimited.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::heuristics::Heuristic;
/// use eight_puzzle_solver::solver::{Algorithm, DepthLimit, SearchParam};
/// use eight_puzzle_solver::utils::parse_search_param;
///
/// assert_eq!(
///     parse_search_param(Algorithm::Bfs, "-1"),
///     Ok(SearchParam::Depth(DepthLimit::UNLIMITED))
/// );
/// assert_eq!(
///     parse_search_param(Algorithm::AStar, "h2"),
///     Ok(SearchParam::Heuristic(Heuristic::Manhattan))
/// );
/// assert!(parse_search_param(Algorithm::Dfs, "h2").is_err());
/// ```
pub fn parse_search_param(algorithm: Algorithm, param: &str) -> Result<SearchParam, SearchError> {
    if algorithm.is_informed() {
        param.parse::<Heuristic>().map(SearchParam::Heuristic)
    } else {
        param.parse::<DepthLimit>().map(SearchParam::Depth)
    }
}

/// Yields the non-empty, trimmed lines of `content` with their 1-based line
/// numbers.
pub fn puzzle_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

/// Parses every non-empty line of `content` as a board.
///
/// # Returns
/// * `Ok(Vec<Board>)` when every line is a valid digit string.
/// * `Err((line, BoardError))` for the first line that is not.
pub fn boards_from_lines(content: &str) -> Result<Vec<Board>, (usize, BoardError)> {
    puzzle_lines(content)
        .map(|(n, line)| Board::from_digits(line).map_err(|e| (n, e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_param_depth() {
        assert_eq!(
            parse_search_param(Algorithm::Random, "12"),
            Ok(SearchParam::Depth(DepthLimit::new(12)))
        );
        assert_eq!(
            parse_search_param(Algorithm::Dfs, "-3"),
            Err(SearchError::InvalidDepthLimit("-3".to_string()))
        );
    }

    #[test]
    fn test_parse_search_param_heuristic() {
        assert_eq!(
            parse_search_param(Algorithm::Greedy, "misplaced"),
            Ok(SearchParam::Heuristic(Heuristic::Misplaced))
        );
        assert_eq!(
            parse_search_param(Algorithm::AStar, "-1"),
            Err(SearchError::UnknownHeuristic("-1".to_string()))
        );
    }

    #[test]
    fn test_puzzle_lines_skips_blank_lines() {
        let content = "142358607\n\n  312045678  \n";
        let lines: Vec<(usize, &str)> = puzzle_lines(content).collect();
        assert_eq!(lines, vec![(1, "142358607"), (3, "312045678")]);
    }

    #[test]
    fn test_boards_from_lines() {
        let boards = boards_from_lines("012345678\n102345678\n").unwrap();
        assert_eq!(boards.len(), 2);
        assert!(boards[0].is_goal());

        let err = boards_from_lines("012345678\n\n0123\n").unwrap_err();
        assert_eq!(
            err,
            (
                3,
                BoardError::InvalidLength {
                    expected: 9,
                    found: 4
                }
            )
        );
    }
}

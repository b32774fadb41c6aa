//! The search engine.
//!
//! A [`Searcher`] drives one [`Frontier`] policy until it tests a goal state,
//! runs out of nodes, or is cancelled. Which strategy runs is decided once,
//! when the searcher is built from an [`Algorithm`] and a [`SearchParam`];
//! the loop itself is the same for all of them.
use crate::error::SearchError;
use crate::frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier, RandomFrontier};
use crate::heuristics::Heuristic;
use crate::state::{PuzzleState, SearchNode};
use log::{debug, trace};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The available search strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Tests a uniformly random untested node each step.
    Random,
    /// Breadth-first: oldest untested node first.
    Bfs,
    /// Depth-first: newest untested node first.
    Dfs,
    /// Lowest heuristic estimate first.
    Greedy,
    /// Lowest estimate plus moves made so far first.
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Random,
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Greedy,
        Algorithm::AStar,
    ];

    /// Canonical selector string.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Random => "random",
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Greedy => "Greedy",
            Algorithm::AStar => "A*",
        }
    }

    /// Name of the searcher kind shown in status lines.
    fn searcher_kind(&self) -> &'static str {
        match self {
            Algorithm::Random => "Searcher",
            Algorithm::Bfs => "BFSearcher",
            Algorithm::Dfs => "DFSearcher",
            Algorithm::Greedy => "GreedySearcher",
            Algorithm::AStar => "AStarSearcher",
        }
    }

    /// Whether the strategy is driven by a heuristic rather than a depth limit.
    pub fn is_informed(&self) -> bool {
        matches!(self, Algorithm::Greedy | Algorithm::AStar)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => return Ok(Algorithm::Random),
            "BFS" => return Ok(Algorithm::Bfs),
            "DFS" => return Ok(Algorithm::Dfs),
            "Greedy" => return Ok(Algorithm::Greedy),
            "A*" => return Ok(Algorithm::AStar),
            _ => {}
        }
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Algorithm::Random),
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "greedy" => Ok(Algorithm::Greedy),
            "a*" | "astar" => Ok(Algorithm::AStar),
            _ => Err(SearchError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Maximum depth of nodes admitted to the frontier, or no limit at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DepthLimit(Option<u32>);

impl DepthLimit {
    pub const UNLIMITED: DepthLimit = DepthLimit(None);

    pub fn new(limit: u32) -> Self {
        DepthLimit(Some(limit))
    }

    /// Converts the conventional signed form, where `-1` means unlimited.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::solver::DepthLimit;
    /// assert_eq!(DepthLimit::from_signed(-1), Ok(DepthLimit::UNLIMITED));
    /// assert_eq!(DepthLimit::from_signed(20), Ok(DepthLimit::new(20)));
    /// assert!(DepthLimit::from_signed(-5).is_err());
    /// ```
    pub fn from_signed(limit: i64) -> Result<Self, SearchError> {
        match limit {
            -1 => Ok(DepthLimit::UNLIMITED),
            l if l >= 0 && l <= i64::from(u32::MAX) => Ok(DepthLimit::new(l as u32)),
            l => Err(SearchError::InvalidDepthLimit(l.to_string())),
        }
    }

    pub fn get(&self) -> Option<u32> {
        self.0
    }

    pub fn is_unlimited(&self) -> bool {
        self.0.is_none()
    }

    /// Whether a node at `depth` is within the limit.
    pub fn allows(&self, depth: u32) -> bool {
        self.0.map_or(true, |limit| depth <= limit)
    }
}

impl fmt::Display for DepthLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => write!(f, "no depth limit"),
            Some(limit) => write!(f, "depth limit = {}", limit),
        }
    }
}

impl FromStr for DepthLimit {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| SearchError::InvalidDepthLimit(s.to_string()))?;
        DepthLimit::from_signed(value)
    }
}

/// The single parameter a searcher is built with: a depth limit for the
/// uninformed strategies, a heuristic for Greedy and A*.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchParam {
    Depth(DepthLimit),
    Heuristic(Heuristic),
}

impl From<DepthLimit> for SearchParam {
    fn from(limit: DepthLimit) -> Self {
        SearchParam::Depth(limit)
    }
}

impl From<Heuristic> for SearchParam {
    fn from(heuristic: Heuristic) -> Self {
        SearchParam::Heuristic(heuristic)
    }
}

/// Cooperative cancellation signal.
///
/// Clones share the same flag, so one clone can be handed to a signal handler
/// or another thread while the searcher polls its own.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that any search polling this flag stops.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Clears the flag so the next search can run.
    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// How a call to [`Searcher::find_solution`] ended.
#[derive(Debug)]
pub enum SearchOutcome<S: PuzzleState> {
    /// A goal node was tested. Its ancestry is the solution.
    Solved(Rc<SearchNode<S>>),
    /// The frontier ran out of nodes without reaching the goal.
    Exhausted,
    /// The cancel flag was raised before the search finished.
    Cancelled,
}

impl<S: PuzzleState> SearchOutcome<S> {
    /// The goal node, if the search succeeded.
    pub fn solution(&self) -> Option<&Rc<SearchNode<S>>> {
        match self {
            SearchOutcome::Solved(node) => Some(node),
            _ => None,
        }
    }

    pub fn into_solution(self) -> Option<Rc<SearchNode<S>>> {
        match self {
            SearchOutcome::Solved(node) => Some(node),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }
}

/// A state-space searcher: one frontier policy plus the shared test loop.
pub struct Searcher<S: PuzzleState> {
    algorithm: Algorithm,
    frontier: Box<dyn Frontier<S>>,
    depth_limit: DepthLimit,
    heuristic: Option<Heuristic>,
    num_tested: u64,
    cancel: CancelFlag,
}

impl<S: PuzzleState> Searcher<S> {
    /// Builds a searcher for `algorithm`.
    ///
    /// # Errors
    /// Returns [`SearchError::MismatchedParameter`] when an uninformed
    /// algorithm is given a heuristic or an informed one is given a depth
    /// limit. Informed searchers never have a depth limit.
    pub fn new(algorithm: Algorithm, param: SearchParam) -> Result<Self, SearchError> {
        let (frontier, depth_limit, heuristic): (Box<dyn Frontier<S>>, _, _) =
            match (algorithm, param) {
                (Algorithm::Random, SearchParam::Depth(limit)) => {
                    (Box::new(RandomFrontier::<S>::new()), limit, None)
                }
                (Algorithm::Bfs, SearchParam::Depth(limit)) => {
                    (Box::new(FifoFrontier::<S>::new()), limit, None)
                }
                (Algorithm::Dfs, SearchParam::Depth(limit)) => {
                    (Box::new(LifoFrontier::<S>::new()), limit, None)
                }
                (Algorithm::Greedy, SearchParam::Heuristic(h)) => (
                    Box::new(PriorityFrontier::<S>::greedy(h)),
                    DepthLimit::UNLIMITED,
                    Some(h),
                ),
                (Algorithm::AStar, SearchParam::Heuristic(h)) => (
                    Box::new(PriorityFrontier::<S>::a_star(h)),
                    DepthLimit::UNLIMITED,
                    Some(h),
                ),
                (algorithm, _) => {
                    return Err(SearchError::MismatchedParameter {
                        algorithm: algorithm.name(),
                        expected: if algorithm.is_informed() {
                            "a heuristic"
                        } else {
                            "a depth limit"
                        },
                    })
                }
            };

        debug!(
            "created {} searcher ({})",
            algorithm,
            match heuristic {
                Some(h) => format!("heuristic {}", h),
                None => depth_limit.to_string(),
            }
        );

        Ok(Searcher {
            algorithm,
            frontier,
            depth_limit,
            heuristic,
            num_tested: 0,
            cancel: CancelFlag::new(),
        })
    }

    /// Makes the random strategy reproducible. Has no effect on the other
    /// strategies. Must be called before any node is added.
    pub fn with_seed(mut self, seed: u64) -> Self {
        if self.algorithm == Algorithm::Random && self.frontier.is_empty() {
            self.frontier = Box::new(RandomFrontier::<S>::with_seed(seed));
        }
        self
    }

    /// Polls `cancel` instead of the searcher's own flag.
    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// A handle that cancels this searcher when raised.
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn depth_limit(&self) -> DepthLimit {
        self.depth_limit
    }

    /// The heuristic of an informed searcher.
    pub fn heuristic(&self) -> Option<Heuristic> {
        self.heuristic
    }

    /// Number of nodes tested against the goal so far.
    pub fn num_tested(&self) -> u64 {
        self.num_tested
    }

    /// Number of nodes waiting in the frontier.
    pub fn num_untested(&self) -> usize {
        self.frontier.len()
    }

    /// Admission rule for a generated successor.
    ///
    /// A node is rejected when it lies beyond the depth limit or when its
    /// state already occurs on its own ancestor chain.
    pub fn should_add(&self, node: &SearchNode<S>) -> bool {
        self.depth_limit.allows(node.depth()) && !node.creates_cycle()
    }

    /// Puts `node` in the frontier without checking the admission rule.
    pub fn add_state(&mut self, node: Rc<SearchNode<S>>) {
        self.frontier.push(node);
    }

    /// Puts every admissible node of `nodes` in the frontier, in order.
    pub fn add_states(&mut self, nodes: Vec<Rc<SearchNode<S>>>) {
        for node in nodes {
            if self.should_add(&node) {
                self.add_state(node);
            }
        }
    }

    /// Removes and returns the next node chosen by the frontier policy.
    pub fn next_state(&mut self) -> Option<Rc<SearchNode<S>>> {
        self.frontier.pop()
    }

    /// Searches from `initial` until a goal state is tested.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// use eight_puzzle_solver::solver::{Algorithm, DepthLimit, Searcher, SearchParam};
    ///
    /// let mut searcher = Searcher::new(Algorithm::Bfs, SearchParam::Depth(DepthLimit::UNLIMITED)).unwrap();
    /// let outcome = searcher.find_solution(Board::from_digits("102345678").unwrap());
    /// assert_eq!(outcome.solution().unwrap().depth(), 1);
    /// assert_eq!(searcher.num_tested(), 3);
    /// ```
    pub fn find_solution(&mut self, initial: S) -> SearchOutcome<S> {
        self.find_solution_from(SearchNode::root(initial))
    }

    /// Like [`Searcher::find_solution`], starting from an existing node.
    ///
    /// The start node is added unconditionally. Each loop step polls the
    /// cancel flag, takes one node from the frontier, counts it as tested,
    /// returns it if it is a goal, and otherwise admits its successors.
    pub fn find_solution_from(&mut self, start: Rc<SearchNode<S>>) -> SearchOutcome<S> {
        self.add_state(start);

        loop {
            if self.cancel.is_cancelled() {
                debug!(
                    "{} search cancelled after {} tested",
                    self.algorithm, self.num_tested
                );
                return SearchOutcome::Cancelled;
            }

            let node = match self.next_state() {
                Some(node) => node,
                None => break,
            };
            self.num_tested += 1;
            trace!("testing {}", node);

            if node.is_goal() {
                debug!(
                    "{} found a {}-move solution after {} tested",
                    self.algorithm,
                    node.depth(),
                    self.num_tested
                );
                return SearchOutcome::Solved(node);
            }

            self.add_states(node.generate_successors());
        }

        debug!(
            "{} exhausted the frontier after {} tested",
            self.algorithm, self.num_tested
        );
        SearchOutcome::Exhausted
    }
}

/// Status line, e.g. `BFSearcher: 4 untested, 12 tested, no depth limit`.
impl<S: PuzzleState> fmt::Display for Searcher<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} untested, {} tested, ",
            self.algorithm.searcher_kind(),
            self.num_untested(),
            self.num_tested
        )?;
        match self.heuristic {
            Some(h) => write!(f, "heuristic {}", h),
            None => write!(f, "{}", self.depth_limit),
        }
    }
}

/// Builds a searcher from an algorithm selector such as `"BFS"` or `"A*"`.
///
/// # Errors
/// [`SearchError::UnknownAlgorithm`] if `algorithm` names no strategy, or
/// [`SearchError::MismatchedParameter`] if `param` does not fit it.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::Board;
/// use eight_puzzle_solver::heuristics::Heuristic;
/// use eight_puzzle_solver::solver::create_searcher;
///
/// let searcher = create_searcher::<Board>("A*", Heuristic::Manhattan.into()).unwrap();
/// assert_eq!(searcher.to_string(), "AStarSearcher: 0 untested, 0 tested, heuristic h2");
///
/// assert!(create_searcher::<Board>("IDA*", Heuristic::Manhattan.into()).is_err());
/// ```
pub fn create_searcher<S: PuzzleState>(
    algorithm: &str,
    param: SearchParam,
) -> Result<Searcher<S>, SearchError> {
    let algorithm: Algorithm = algorithm.parse()?;
    Searcher::new(algorithm, param)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Board, Direction};
    use std::thread;
    use std::time::Duration;

    fn board(digits: &str) -> Board {
        Board::from_digits(digits).unwrap()
    }

    fn uninformed(algorithm: Algorithm, limit: DepthLimit) -> Searcher<Board> {
        Searcher::new(algorithm, SearchParam::Depth(limit)).unwrap()
    }

    fn informed(algorithm: Algorithm, heuristic: Heuristic) -> Searcher<Board> {
        Searcher::new(algorithm, SearchParam::Heuristic(heuristic)).unwrap()
    }

    /// Runs the engine loop by hand, recording the depth of every tested node.
    fn tested_depths(searcher: &mut Searcher<Board>, initial: Board) -> Vec<u32> {
        let mut depths = Vec::new();
        searcher.add_state(SearchNode::root(initial));
        while let Some(node) = searcher.next_state() {
            depths.push(node.depth());
            if node.is_goal() {
                break;
            }
            searcher.add_states(node.generate_successors());
        }
        depths
    }

    #[test]
    fn test_goal_initial_state_needs_no_expansion() {
        for algorithm in [Algorithm::Random, Algorithm::Bfs, Algorithm::Dfs] {
            let mut searcher = uninformed(algorithm, DepthLimit::UNLIMITED);
            let outcome = searcher.find_solution(Board::goal());
            let solution = outcome.solution().unwrap();
            assert_eq!(solution.depth(), 0);
            assert!(solution.moves_to().is_empty());
            assert_eq!(searcher.num_tested(), 1);
            assert_eq!(searcher.num_untested(), 0, "{} expanded the goal", algorithm);
        }
    }

    #[test]
    fn test_bfs_one_move_puzzles() {
        for (digits, expected) in [
            ("102345678", Direction::Left),
            ("312045678", Direction::Up),
        ] {
            let mut searcher = uninformed(Algorithm::Bfs, DepthLimit::UNLIMITED);
            let solution = searcher.find_solution(board(digits)).into_solution().unwrap();
            assert_eq!(solution.depth(), 1);
            assert_eq!(solution.moves_to(), vec![expected]);
        }
    }

    #[test]
    fn test_depth_limit_zero_tests_only_the_root() {
        for algorithm in [Algorithm::Random, Algorithm::Bfs, Algorithm::Dfs] {
            let mut searcher = uninformed(algorithm, DepthLimit::new(0));
            let outcome = searcher.find_solution(board("102345678"));
            assert!(matches!(outcome, SearchOutcome::Exhausted));
            assert_eq!(searcher.num_tested(), 1);
        }
    }

    #[test]
    fn test_bfs_tests_in_non_decreasing_depth() {
        let mut searcher = uninformed(Algorithm::Bfs, DepthLimit::UNLIMITED);
        let depths = tested_depths(&mut searcher, board("142358607"));
        assert!(depths.windows(2).all(|w| w[0] <= w[1]), "{:?}", depths);
        assert_eq!(depths.last(), Some(&5));
    }

    #[test]
    fn test_dfs_selects_most_recently_added() {
        let mut searcher = uninformed(Algorithm::Dfs, DepthLimit::UNLIMITED);
        let root = SearchNode::root(board("312405678"));
        searcher.add_state(Rc::clone(&root));
        let popped = searcher.next_state().unwrap();
        assert!(Rc::ptr_eq(&popped, &root));

        let successors = root.generate_successors();
        let last = Rc::clone(successors.last().unwrap());
        searcher.add_states(successors);
        let next = searcher.next_state().unwrap();
        assert!(Rc::ptr_eq(&next, &last));
        assert_eq!(next.last_move(), Some(Direction::Right));
    }

    #[test]
    fn test_depth_limited_search_never_exceeds_limit() {
        for algorithm in [Algorithm::Random, Algorithm::Bfs, Algorithm::Dfs] {
            let mut searcher = uninformed(algorithm, DepthLimit::new(3)).with_seed(1);
            let depths = tested_depths(&mut searcher, board("142358607"));
            assert!(depths.iter().all(|&d| d <= 3), "{} went too deep", algorithm);
            assert!(depths.len() > 1);
        }
    }

    #[test]
    fn test_depth_limit_rejects_deep_successor() {
        let searcher = uninformed(Algorithm::Dfs, DepthLimit::new(1));
        let root = SearchNode::root(Board::goal());
        let first = Rc::clone(&root.generate_successors()[0]);
        let second = Rc::clone(&first.generate_successors()[0]);
        assert!(searcher.should_add(&first));
        assert!(!searcher.should_add(&second));
    }

    #[test]
    fn test_should_add_rejects_cycles() {
        let searcher = uninformed(Algorithm::Bfs, DepthLimit::UNLIMITED);
        let root = SearchNode::root(Board::goal());
        let right = root
            .generate_successors()
            .into_iter()
            .find(|n| n.last_move() == Some(Direction::Right))
            .unwrap();
        let back = right
            .generate_successors()
            .into_iter()
            .find(|n| n.last_move() == Some(Direction::Left))
            .unwrap();
        assert!(searcher.should_add(&right));
        assert!(!searcher.should_add(&back));
    }

    #[test]
    fn test_a_star_manhattan_is_optimal() {
        let mut searcher = informed(Algorithm::AStar, Heuristic::Manhattan);
        let solution = searcher
            .find_solution(board("142358607"))
            .into_solution()
            .unwrap();
        assert_eq!(solution.depth(), 5);
        assert_eq!(
            solution.moves_to(),
            vec![
                Direction::Right,
                Direction::Up,
                Direction::Left,
                Direction::Up,
                Direction::Left
            ]
        );

        let mut greedy = informed(Algorithm::Greedy, Heuristic::Manhattan);
        let greedy_solution = greedy
            .find_solution(board("142358607"))
            .into_solution()
            .unwrap();
        assert!(greedy_solution.depth() >= 5);
    }

    #[test]
    fn test_a_star_matches_bfs_move_count() {
        for seed in 0..6 {
            let initial = Board::new_scrambled_with_seed(seed, 8);
            let mut bfs = uninformed(Algorithm::Bfs, DepthLimit::UNLIMITED);
            let optimal = bfs.find_solution(initial.clone()).into_solution().unwrap().depth();

            for heuristic in Heuristic::ALL {
                let mut a_star = informed(Algorithm::AStar, heuristic);
                let found = a_star.find_solution(initial.clone()).into_solution().unwrap();
                assert_eq!(found.depth(), optimal, "seed {} with {}", seed, heuristic);
            }
        }
    }

    #[test]
    fn test_a_star_zero_heuristic_tests_like_bfs() {
        let mut searcher = informed(Algorithm::AStar, Heuristic::Zero);
        let depths = tested_depths(&mut searcher, board("142358607"));
        assert!(depths.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_better_heuristic_tests_fewer_nodes() {
        let initial = board("142358607");
        let mut counts = Vec::new();
        for heuristic in Heuristic::ALL {
            let mut searcher = informed(Algorithm::AStar, heuristic);
            assert!(searcher.find_solution(initial.clone()).is_solved());
            counts.push(searcher.num_tested());
        }
        assert!(counts[0] >= counts[1], "{:?}", counts);
        assert!(counts[1] >= counts[2], "{:?}", counts);
    }

    #[test]
    fn test_dfs_with_limit_finds_solution() {
        let mut searcher = uninformed(Algorithm::Dfs, DepthLimit::new(5));
        let solution = searcher
            .find_solution(board("142358607"))
            .into_solution()
            .unwrap();
        assert!(solution.depth() <= 5);
        assert!(solution.is_goal());
    }

    #[test]
    fn test_random_search_is_reproducible_with_seed() {
        let run = || {
            let mut searcher = uninformed(Algorithm::Random, DepthLimit::new(6)).with_seed(3);
            let outcome = searcher.find_solution(board("142358607"));
            (outcome.solution().map(|n| n.depth()), searcher.num_tested())
        };
        let first = run();
        assert_eq!(first, run());
        assert!(first.0.is_some());
    }

    #[test]
    fn test_unsolvable_board_exhausts_with_limit() {
        let mut searcher = uninformed(Algorithm::Bfs, DepthLimit::new(4));
        let outcome = searcher.find_solution(board("021345678"));
        assert!(matches!(outcome, SearchOutcome::Exhausted));
        assert!(searcher.num_tested() > 1);
        assert_eq!(searcher.num_untested(), 0);
    }

    #[test]
    fn test_cancelled_before_start() {
        let cancel = CancelFlag::new();
        cancel.cancel();
        let mut searcher = uninformed(Algorithm::Bfs, DepthLimit::UNLIMITED).with_cancel_flag(cancel);
        let outcome = searcher.find_solution(board("142358607"));
        assert!(matches!(outcome, SearchOutcome::Cancelled));
        assert_eq!(searcher.num_tested(), 0);
    }

    #[test]
    fn test_cancel_from_another_thread_keeps_counters() {
        let mut searcher = uninformed(Algorithm::Dfs, DepthLimit::UNLIMITED);
        let cancel = searcher.cancel_flag();
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            cancel.cancel();
        });

        // Unsolvable, so only the cancel flag can stop this search.
        let outcome = searcher.find_solution(board("021345678"));
        handle.join().unwrap();

        assert!(matches!(outcome, SearchOutcome::Cancelled));
        assert!(searcher.num_tested() > 0);
    }

    #[test]
    fn test_cancel_flag_reset() {
        let cancel = CancelFlag::new();
        let shared = cancel.clone();
        shared.cancel();
        assert!(cancel.is_cancelled());
        cancel.reset();
        assert!(!shared.is_cancelled());
    }

    #[test]
    fn test_create_searcher_selectors() {
        let depth = SearchParam::Depth(DepthLimit::UNLIMITED);
        let heuristic = SearchParam::Heuristic(Heuristic::Misplaced);

        for (name, expected) in [
            ("random", Algorithm::Random),
            ("BFS", Algorithm::Bfs),
            ("dfs", Algorithm::Dfs),
        ] {
            let searcher = create_searcher::<Board>(name, depth).unwrap();
            assert_eq!(searcher.algorithm(), expected);
        }
        for (name, expected) in [
            ("Greedy", Algorithm::Greedy),
            ("A*", Algorithm::AStar),
            ("astar", Algorithm::AStar),
        ] {
            let searcher = create_searcher::<Board>(name, heuristic).unwrap();
            assert_eq!(searcher.algorithm(), expected);
            assert!(searcher.depth_limit().is_unlimited());
        }
    }

    #[test]
    fn test_create_searcher_unknown_algorithm() {
        let result = create_searcher::<Board>("IDA*", SearchParam::Depth(DepthLimit::UNLIMITED));
        assert_eq!(
            result.err(),
            Some(SearchError::UnknownAlgorithm("IDA*".to_string()))
        );
    }

    #[test]
    fn test_create_searcher_mismatched_parameter() {
        let result = create_searcher::<Board>("BFS", SearchParam::Heuristic(Heuristic::Zero));
        assert!(matches!(
            result.err(),
            Some(SearchError::MismatchedParameter { algorithm: "BFS", .. })
        ));

        let result = create_searcher::<Board>("Greedy", SearchParam::Depth(DepthLimit::new(3)));
        assert!(matches!(
            result.err(),
            Some(SearchError::MismatchedParameter {
                algorithm: "Greedy",
                expected: "a heuristic"
            })
        ));
    }

    #[test]
    fn test_status_lines() {
        let searcher = uninformed(Algorithm::Random, DepthLimit::UNLIMITED);
        assert_eq!(
            searcher.to_string(),
            "Searcher: 0 untested, 0 tested, no depth limit"
        );

        let mut searcher = uninformed(Algorithm::Bfs, DepthLimit::new(2));
        searcher.find_solution(board("102345678"));
        assert_eq!(
            searcher.to_string(),
            format!(
                "BFSearcher: {} untested, 3 tested, depth limit = 2",
                searcher.num_untested()
            )
        );

        let searcher = informed(Algorithm::Greedy, Heuristic::Misplaced);
        assert_eq!(
            searcher.to_string(),
            "GreedySearcher: 0 untested, 0 tested, heuristic h1"
        );
    }

    #[test]
    fn test_depth_limit_parsing_and_display() {
        assert_eq!("-1".parse::<DepthLimit>(), Ok(DepthLimit::UNLIMITED));
        assert_eq!(" 7 ".parse::<DepthLimit>(), Ok(DepthLimit::new(7)));
        assert!("seven".parse::<DepthLimit>().is_err());
        assert!("-2".parse::<DepthLimit>().is_err());
        assert_eq!(DepthLimit::new(4).to_string(), "depth limit = 4");
        assert!(DepthLimit::new(4).allows(4));
        assert!(!DepthLimit::new(4).allows(5));
        assert!(DepthLimit::UNLIMITED.allows(u32::MAX));
    }
}

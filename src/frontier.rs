//! Frontier policies: the collections of discovered but untested nodes.
//!
//! All policies accept nodes the same way and differ only in which node they
//! hand back next:
//! - `RandomFrontier`: a uniformly random node.
//! - `FifoFrontier`: the oldest node (breadth-first).
//! - `LifoFrontier`: the newest node (depth-first).
//! - `PriorityFrontier`: the node with the highest priority (Greedy / A*).
use crate::heuristics::Heuristic;
use crate::state::{PuzzleState, SearchNode};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};
use std::rc::Rc;

/// Node-management contract shared by every search strategy.
pub trait Frontier<S: PuzzleState> {
    /// Adds a node. Admission checks happen before this is called.
    fn push(&mut self, node: Rc<SearchNode<S>>);

    /// Removes and returns the next node to test, or `None` when empty.
    fn pop(&mut self) -> Option<Rc<SearchNode<S>>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Picks the next node uniformly at random.
pub struct RandomFrontier<S: PuzzleState> {
    nodes: Vec<Rc<SearchNode<S>>>,
    rng: SmallRng,
}

impl<S: PuzzleState> RandomFrontier<S> {
    /// Creates a frontier seeded from system entropy.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a frontier whose choices are reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            nodes: Vec::new(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl<S: PuzzleState> Default for RandomFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PuzzleState> Frontier<S> for RandomFrontier<S> {
    fn push(&mut self, node: Rc<SearchNode<S>>) {
        self.nodes.push(node);
    }

    fn pop(&mut self) -> Option<Rc<SearchNode<S>>> {
        if self.nodes.is_empty() {
            return None;
        }
        // Order carries no meaning here, so swap_remove is fine.
        let index = self.rng.gen_range(0..self.nodes.len());
        Some(self.nodes.swap_remove(index))
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Picks the node that has waited longest.
pub struct FifoFrontier<S: PuzzleState> {
    nodes: VecDeque<Rc<SearchNode<S>>>,
}

impl<S: PuzzleState> FifoFrontier<S> {
    pub fn new() -> Self {
        Self {
            nodes: VecDeque::new(),
        }
    }
}

impl<S: PuzzleState> Default for FifoFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PuzzleState> Frontier<S> for FifoFrontier<S> {
    fn push(&mut self, node: Rc<SearchNode<S>>) {
        self.nodes.push_back(node);
    }

    fn pop(&mut self) -> Option<Rc<SearchNode<S>>> {
        self.nodes.pop_front()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Picks the most recently added node.
pub struct LifoFrontier<S: PuzzleState> {
    nodes: Vec<Rc<SearchNode<S>>>,
}

impl<S: PuzzleState> LifoFrontier<S> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<S: PuzzleState> Default for LifoFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PuzzleState> Frontier<S> for LifoFrontier<S> {
    fn push(&mut self, node: Rc<SearchNode<S>>) {
        self.nodes.push(node);
    }

    fn pop(&mut self) -> Option<Rc<SearchNode<S>>> {
        self.nodes.pop()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Ordering key of a priority entry: higher priority first, then older
/// insertion first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct PriorityKey {
    priority: i64,
    sequence: Reverse<u64>,
}

struct PriorityEntry<S: PuzzleState> {
    key: PriorityKey,
    node: Rc<SearchNode<S>>,
}

impl<S: PuzzleState> PartialEq for PriorityEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S: PuzzleState> Eq for PriorityEntry<S> {}

impl<S: PuzzleState> PartialOrd for PriorityEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: PuzzleState> Ord for PriorityEntry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Picks the node with the maximum priority.
///
/// The priority is computed once, when the node is pushed:
/// - Greedy: `-h(state)`
/// - A*: `-(h(state) + depth)`
///
/// Equal priorities are resolved in insertion order, so the result of a search
/// is fully deterministic.
pub struct PriorityFrontier<S: PuzzleState> {
    heap: BinaryHeap<PriorityEntry<S>>,
    heuristic: Heuristic,
    include_path_cost: bool,
    next_sequence: u64,
}

impl<S: PuzzleState> PriorityFrontier<S> {
    /// Frontier ordered by the heuristic estimate alone.
    pub fn greedy(heuristic: Heuristic) -> Self {
        Self::with_path_cost(heuristic, false)
    }

    /// Frontier ordered by estimate plus moves already made.
    pub fn a_star(heuristic: Heuristic) -> Self {
        Self::with_path_cost(heuristic, true)
    }

    fn with_path_cost(heuristic: Heuristic, include_path_cost: bool) -> Self {
        Self {
            heap: BinaryHeap::new(),
            heuristic,
            include_path_cost,
            next_sequence: 0,
        }
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Priority `node` gets when pushed. Larger is tested sooner.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// use eight_puzzle_solver::frontier::PriorityFrontier;
    /// use eight_puzzle_solver::heuristics::Heuristic;
    /// use eight_puzzle_solver::state::SearchNode;
    ///
    /// let root = SearchNode::root(Board::from_digits("142358607").unwrap());
    /// let child = root.generate_successors().remove(0);
    ///
    /// let greedy = PriorityFrontier::<Board>::greedy(Heuristic::Misplaced);
    /// assert_eq!(greedy.priority(&root), -5);
    ///
    /// let a_star = PriorityFrontier::<Board>::a_star(Heuristic::Zero);
    /// assert_eq!(a_star.priority(&child), -1);
    /// ```
    pub fn priority(&self, node: &SearchNode<S>) -> i64 {
        let mut cost = i64::from(self.heuristic.evaluate(node.state()));
        if self.include_path_cost {
            cost += i64::from(node.depth());
        }
        -cost
    }
}

impl<S: PuzzleState> Frontier<S> for PriorityFrontier<S> {
    fn push(&mut self, node: Rc<SearchNode<S>>) {
        let key = PriorityKey {
            priority: self.priority(&node),
            sequence: Reverse(self.next_sequence),
        };
        self.next_sequence += 1;
        self.heap.push(PriorityEntry { key, node });
    }

    fn pop(&mut self) -> Option<Rc<SearchNode<S>>> {
        self.heap.pop().map(|entry| entry.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

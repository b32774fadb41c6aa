//! Search-tree bookkeeping shared by every search strategy.
//!
//! - `PuzzleState`: The small capability set the engine needs from a puzzle
//!   model. `Board` implements it; the engine itself is board-shape-agnostic.
//! - `SearchNode`: An immutable node of the search tree. It wraps a state
//!   together with its provenance (parent, producing move, depth) and knows
//!   how to expand itself, detect cycles along its own ancestry, and
//!   reconstruct the moves that led to it.
use crate::engine::{Board, Direction};
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

/// Capabilities the search engine requires from a puzzle configuration.
///
/// Equality must be canonical: two states with the same tile placement
/// compare equal and serialize identically.
pub trait PuzzleState: Clone + PartialEq + fmt::Display + 'static {
    /// Label of a single move. Successors are generated in the order of
    /// [`PuzzleState::moves`].
    type Move: Copy + PartialEq + fmt::Debug + fmt::Display;

    /// The fixed set of moves tried from every state.
    fn moves() -> &'static [Self::Move];

    /// Applies `mv` in place. Returns `false` and leaves the state untouched
    /// if the move is illegal from here.
    fn apply_move(&mut self, mv: Self::Move) -> bool;

    fn is_goal(&self) -> bool;

    /// Number of tiles not in their goal position.
    fn misplaced_count(&self) -> u32;

    /// Sum of the grid distances between each tile and its goal position.
    fn tile_distance_sum(&self) -> u32;

    /// Canonical compact string form.
    fn serialize(&self) -> String;
}

impl PuzzleState for Board {
    type Move = Direction;

    fn moves() -> &'static [Direction] {
        &Direction::ALL
    }

    fn apply_move(&mut self, mv: Direction) -> bool {
        self.move_blank(mv)
    }

    fn is_goal(&self) -> bool {
        Board::is_goal(self)
    }

    fn misplaced_count(&self) -> u32 {
        self.num_misplaced()
    }

    fn tile_distance_sum(&self) -> u32 {
        self.manhattan_distance()
    }

    fn serialize(&self) -> String {
        self.digit_string()
    }
}

/// A node of the search tree.
///
/// Nodes are immutable once built and are handed around as `Rc<SearchNode>`.
/// A node holds a shared link to its parent but never to its children, so the
/// parent chain is always a finite path back to the root.
///
/// Invariant: the root has no parent, no move and depth 0; every other node
/// has `depth == parent.depth + 1`.
#[derive(Debug)]
pub struct SearchNode<S: PuzzleState> {
    state: S,
    parent: Option<Rc<SearchNode<S>>>,
    last_move: Option<S::Move>,
    depth: u32,
}

impl<S: PuzzleState> SearchNode<S> {
    /// Creates the root node of a search from its initial state.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// use eight_puzzle_solver::state::SearchNode;
    ///
    /// let root = SearchNode::root(Board::goal());
    /// assert_eq!(root.depth(), 0);
    /// assert!(root.parent().is_none());
    /// assert_eq!(root.to_string(), "012345678-init-0");
    /// ```
    pub fn root(state: S) -> Rc<Self> {
        Rc::new(SearchNode {
            state,
            parent: None,
            last_move: None,
            depth: 0,
        })
    }

    /// Creates a child of `parent` holding `state`, reached by `mv`.
    pub fn child(parent: &Rc<Self>, state: S, mv: S::Move) -> Rc<Self> {
        Rc::new(SearchNode {
            state,
            parent: Some(Rc::clone(parent)),
            last_move: Some(mv),
            depth: parent.depth + 1,
        })
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn parent(&self) -> Option<&Rc<SearchNode<S>>> {
        self.parent.as_ref()
    }

    /// The move that produced this node, `None` for the root.
    pub fn last_move(&self) -> Option<S::Move> {
        self.last_move
    }

    /// Number of moves from the root to this node.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn is_goal(&self) -> bool {
        self.state.is_goal()
    }

    /// Iterates over the strict ancestors of this node, parent first.
    pub fn ancestors(&self) -> Ancestors<'_, S> {
        Ancestors {
            next: self.parent.as_deref(),
        }
    }

    /// Whether this node's state already appears somewhere on its own
    /// ancestor chain.
    ///
    /// Only the path back to the root is inspected. The same configuration
    /// reached along a different branch does not count as a cycle.
    pub fn creates_cycle(&self) -> bool {
        self.ancestors().any(|ancestor| ancestor.state == self.state)
    }

    /// Builds one child per legal move, in the order of
    /// [`PuzzleState::moves`]. Illegal moves are skipped.
    pub fn generate_successors(self: &Rc<Self>) -> Vec<Rc<Self>> {
        let mut successors = Vec::with_capacity(S::moves().len());
        for &mv in S::moves() {
            let mut next = self.state.clone();
            if next.apply_move(mv) {
                successors.push(SearchNode::child(self, next, mv));
            }
        }
        successors
    }

    /// The moves from the root to this node, in order.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::{Board, Direction};
    /// use eight_puzzle_solver::state::SearchNode;
    ///
    /// let root = SearchNode::root(Board::goal());
    /// let down = root
    ///     .generate_successors()
    ///     .into_iter()
    ///     .find(|n| n.last_move() == Some(Direction::Down))
    ///     .unwrap();
    /// assert_eq!(down.moves_to(), vec![Direction::Down]);
    /// ```
    pub fn moves_to(&self) -> Vec<S::Move> {
        let mut moves: Vec<S::Move> = std::iter::once(self)
            .chain(self.ancestors())
            .filter_map(|node| node.last_move)
            .collect();
        moves.reverse();
        moves
    }

    /// Writes the full transcript from the root to this node: the initial
    /// state, then each move followed by the resulting state.
    pub fn write_moves_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut path: Vec<&SearchNode<S>> = std::iter::once(self).chain(self.ancestors()).collect();
        path.reverse();

        for node in path {
            match node.last_move {
                None => writeln!(out, "initial state:")?,
                Some(mv) => writeln!(out, "move the blank {}:", mv)?,
            }
            writeln!(out, "{}", node.state)?;
        }
        Ok(())
    }

    /// Prints the transcript produced by [`SearchNode::write_moves_to`] to
    /// standard output.
    pub fn print_moves_to(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_moves_to(&mut handle)
    }
}

/// Unlinks the parent chain iteratively. A deep depth-first search can build
/// chains long enough to overflow the stack with the default recursive drop.
impl<S: PuzzleState> Drop for SearchNode<S> {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut owned) => next = owned.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// `<serialized state>-<move or init>-<depth>`
impl<S: PuzzleState> fmt::Display for SearchNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-", self.state.serialize())?;
        match self.last_move {
            Some(mv) => write!(f, "{}", mv)?,
            None => write!(f, "init")?,
        }
        write!(f, "-{}", self.depth)
    }
}

/// Iterator over a node's ancestors. See [`SearchNode::ancestors`].
pub struct Ancestors<'a, S: PuzzleState> {
    next: Option<&'a SearchNode<S>>,
}

impl<'a, S: PuzzleState> Iterator for Ancestors<'a, S> {
    type Item = &'a SearchNode<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(digits: &str) -> Board {
        Board::from_digits(digits).unwrap()
    }

    fn successor(node: &Rc<SearchNode<Board>>, dir: Direction) -> Rc<SearchNode<Board>> {
        node.generate_successors()
            .into_iter()
            .find(|n| n.last_move() == Some(dir))
            .unwrap()
    }

    #[test]
    fn test_root_invariants() {
        let root = SearchNode::root(board("142358607"));
        assert_eq!(root.depth(), 0);
        assert!(root.parent().is_none());
        assert!(root.last_move().is_none());
        assert!(!root.creates_cycle());
        assert!(root.moves_to().is_empty());
    }

    #[test]
    fn test_child_depth_and_parent() {
        let root = SearchNode::root(Board::goal());
        let child = successor(&root, Direction::Right);
        assert_eq!(child.depth(), 1);
        assert!(Rc::ptr_eq(child.parent().unwrap(), &root));
        assert_eq!(child.state().digit_string(), "102345678");
        assert_eq!(child.to_string(), "102345678-right-1");
    }

    #[test]
    fn test_generate_successors_skips_illegal_moves() {
        // Blank in a corner: only down and right are legal.
        let root = SearchNode::root(Board::goal());
        let moves: Vec<Direction> = root
            .generate_successors()
            .iter()
            .filter_map(|n| n.last_move())
            .collect();
        assert_eq!(moves, vec![Direction::Down, Direction::Right]);

        // Blank in the centre: all four moves, in fixed order.
        let root = SearchNode::root(board("312405678"));
        let moves: Vec<Direction> = root
            .generate_successors()
            .iter()
            .filter_map(|n| n.last_move())
            .collect();
        assert_eq!(moves, Direction::ALL.to_vec());
    }

    #[test]
    fn test_successors_do_not_alias_parent_state() {
        let root = SearchNode::root(board("312405678"));
        let _ = root.generate_successors();
        assert_eq!(root.state().digit_string(), "312405678");
    }

    #[test]
    fn test_creates_cycle_three_node_chain() {
        let root = SearchNode::root(Board::goal());
        let second = successor(&root, Direction::Right);
        let third = successor(&second, Direction::Left);

        assert_eq!(third.state(), root.state());
        assert!(third.creates_cycle());
        assert!(!second.creates_cycle());

        let other = successor(&second, Direction::Down);
        assert!(!other.creates_cycle());
    }

    #[test]
    fn test_creates_cycle_is_local_to_ancestry() {
        // Two distinct branches reaching the same configuration are not cycles.
        let root = SearchNode::root(Board::goal());
        let right = successor(&root, Direction::Right);
        let down = successor(&root, Direction::Down);
        let elsewhere = SearchNode::child(&down, right.state().clone(), Direction::Up);

        assert_eq!(elsewhere.state(), right.state());
        assert_eq!(elsewhere.depth(), 2);
        assert!(!elsewhere.creates_cycle());
    }

    #[test]
    fn test_creates_cycle_deep_ancestor() {
        // Walk the blank around a 2x2 square: the fourth move returns to the root.
        let root = SearchNode::root(Board::goal());
        let a = successor(&root, Direction::Right);
        let b = successor(&a, Direction::Down);
        let c = successor(&b, Direction::Left);
        assert!(!c.creates_cycle());
        let d = successor(&c, Direction::Up);
        assert_ne!(d.state(), root.state(), "the square rotates tiles");
        assert!(!d.creates_cycle());

        let back = successor(&d, Direction::Down);
        assert_eq!(back.state(), c.state());
        assert!(back.creates_cycle());
    }

    #[test]
    fn test_moves_to_and_ancestors() {
        let root = SearchNode::root(Board::goal());
        let a = successor(&root, Direction::Down);
        let b = successor(&a, Direction::Right);
        let c = successor(&b, Direction::Up);

        assert_eq!(
            c.moves_to(),
            vec![Direction::Down, Direction::Right, Direction::Up]
        );
        assert_eq!(c.ancestors().count(), 3);
        let depths: Vec<u32> = c.ancestors().map(|n| n.depth()).collect();
        assert_eq!(depths, vec![2, 1, 0]);
    }

    #[test]
    fn test_write_moves_to_transcript() {
        let root = SearchNode::root(board("102345678"));
        let solved = successor(&root, Direction::Left);
        assert!(solved.is_goal());

        let mut out = Vec::new();
        solved.write_moves_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "initial state:\n1 _ 2 \n3 4 5 \n6 7 8 \n\n\
             move the blank left:\n_ 1 2 \n3 4 5 \n6 7 8 \n\n"
        );
    }

    #[test]
    fn test_long_chain_drops_without_overflow() {
        let mut node = SearchNode::root(Board::goal());
        let cycle = [
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Up,
        ];
        for i in 0..200_000 {
            let dir = cycle[i % cycle.len()];
            let mut next = node.state().clone();
            assert!(next.move_blank(dir));
            node = SearchNode::child(&node, next, dir);
        }
        assert_eq!(node.depth(), 200_000);
        drop(node);
    }
}

//! Remaining-cost estimates for the search driver.
//!
//! Every estimate here ignores the blank and returns 0 when `state == goal`.
use crate::engine::{Board, BLANK, BOARD_SIZE};
use std::fmt;

/// Estimates the number of moves still needed to turn `state` into `goal`.
///
/// Implementations must be pure. For `solve` to return a shortest path the
/// estimate must be admissible (never above the true distance); the
/// estimates in this module are also consistent, so no state ever needs to
/// be expanded twice.
///
/// Any `Fn(&Board, &Board) -> u32` is a `Heuristic`, so plain functions
/// such as [`manhattan_distance`] can be handed to the solver directly.
pub trait Heuristic {
    fn estimate(&self, state: &Board, goal: &Board) -> u32;
}

impl<F> Heuristic for F
where
    F: Fn(&Board, &Board) -> u32,
{
    fn estimate(&self, state: &Board, goal: &Board) -> u32 {
        self(state, goal)
    }
}

/// Counts the tiles that are not where `goal` has them (Hamming distance).
///
/// Each misplaced tile needs at least one move, so the count is admissible,
/// but it is a weak estimate.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::Board;
/// use eight_puzzle_solver::heuristics::misplaced_tiles;
///
/// let goal = Board::solved();
/// let state = Board::from_cells([4, 1, 3, 7, 2, 6, 0, 5, 8]).unwrap();
/// assert_eq!(misplaced_tiles(&state, &goal), 6);
/// ```
pub fn misplaced_tiles(state: &Board, goal: &Board) -> u32 {
    state
        .cells()
        .iter()
        .zip(goal.cells())
        .filter(|&(&s, &g)| s != BLANK && s != g)
        .count() as u32
}

/// Sums each tile's taxicab distance from its position in `goal`.
///
/// A move shifts one tile by one cell, so the sum drops by at most one per
/// move. This makes it admissible and consistent, and it is never below
/// [`misplaced_tiles`].
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::Board;
/// use eight_puzzle_solver::heuristics::manhattan_distance;
///
/// let goal = Board::solved();
/// let state = Board::from_cells([8, 6, 7, 2, 5, 4, 3, 0, 1]).unwrap();
/// assert_eq!(manhattan_distance(&state, &goal), 21);
/// ```
pub fn manhattan_distance(state: &Board, goal: &Board) -> u32 {
    let goal_positions = goal.positions();
    state
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v != BLANK)
        .map(|(index, &v)| {
            let target = goal_positions[v as usize];
            let (r, c) = (index / BOARD_SIZE, index % BOARD_SIZE);
            let (tr, tc) = (target / BOARD_SIZE, target % BOARD_SIZE);
            (r.abs_diff(tr) + c.abs_diff(tc)) as u32
        })
        .sum()
}

/// Always 0. With this estimate A* degenerates into uniform-cost search.
pub fn zero(_state: &Board, _goal: &Board) -> u32 {
    0
}

/// The built-in heuristics, selectable by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum HeuristicKind {
    /// Sum of taxicab distances of every tile to its goal cell.
    #[default]
    Manhattan,
    /// Number of tiles not on their goal cell.
    Misplaced,
    /// No estimate at all (uniform-cost search).
    Zero,
}

impl HeuristicKind {
    /// All built-in heuristics, strongest first.
    pub const ALL: [HeuristicKind; 3] = [
        HeuristicKind::Manhattan,
        HeuristicKind::Misplaced,
        HeuristicKind::Zero,
    ];
}

impl Heuristic for HeuristicKind {
    fn estimate(&self, state: &Board, goal: &Board) -> u32 {
        match self {
            HeuristicKind::Manhattan => manhattan_distance(state, goal),
            HeuristicKind::Misplaced => misplaced_tiles(state, goal),
            HeuristicKind::Zero => zero(state, goal),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeuristicKind::Manhattan => "manhattan",
            HeuristicKind::Misplaced => "misplaced",
            HeuristicKind::Zero => "zero",
        };
        f.write_str(name)
    }
}

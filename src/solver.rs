use crate::engine::{Board, Move, CELL_COUNT};
use crate::error::SearchError;
use crate::frontier::{Frontier, VisitedSet};
use crate::heuristics::Heuristic;
use crate::node::NodeArena;

/// Represents a solution found by the solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Boards from the start to the goal, both included.
    pub path: Vec<Board>,
    /// The moves between consecutive boards of `path`.
    pub moves: Vec<Move>,
    /// Number of distinct boards expanded before the goal was popped.
    pub expanded: usize,
    /// Number of search nodes created, the root included.
    pub generated: usize,
    /// Largest number of nodes that were waiting in the frontier at once.
    pub peak_frontier: usize,
}

impl Solution {
    /// Number of moves in the solution.
    pub fn cost(&self) -> usize {
        self.moves.len()
    }
}

/// Finds a shortest sequence of boards leading from `start` to `goal`.
///
/// This is `search` without the statistics: the returned path starts with
/// `start`, ends with `goal`, and has one more entry than there are moves.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::Board;
/// use eight_puzzle_solver::heuristics::HeuristicKind;
/// use eight_puzzle_solver::solver::solve;
///
/// let start = Board::from_cells([4, 1, 3, 7, 2, 6, 0, 5, 8]).unwrap();
/// let path = solve(start, Board::solved(), &HeuristicKind::Manhattan, None).unwrap();
/// assert_eq!(path.len(), 7);
/// ```
pub fn solve<H: Heuristic + ?Sized>(
    start: Board,
    goal: Board,
    heuristic: &H,
    max_expansions: Option<usize>,
) -> Result<Vec<Board>, SearchError> {
    search(&start, &goal, heuristic, max_expansions).map(|solution| solution.path)
}

/// Like `solve`, but takes raw cells and validates them before searching.
///
/// Returns `SearchError::InvalidState` if either array is not a permutation
/// of `0..=8`; no search is attempted in that case.
pub fn solve_cells<H: Heuristic + ?Sized>(
    start: [u8; CELL_COUNT],
    goal: [u8; CELL_COUNT],
    heuristic: &H,
    max_expansions: Option<usize>,
) -> Result<Vec<Board>, SearchError> {
    let start = Board::from_cells(start)?;
    let goal = Board::from_cells(goal)?;
    solve(start, goal, heuristic, max_expansions)
}

/// Runs A* from `start` to `goal` under `heuristic`.
///
/// The frontier is ordered by `f = g + h`; ties go to the node queued first.
/// A popped board is checked against the goal before anything else, then
/// discarded if it was already expanded through another node. Successors
/// that were already expanded are never queued.
///
/// With an admissible and consistent heuristic the first goal node popped
/// carries a shortest path.
///
/// # Arguments
/// * `start`: The board to search from.
/// * `goal`: The board to reach.
/// * `heuristic`: The remaining-cost estimate.
/// * `max_expansions`: Optional cap on the number of expanded boards.
///
/// # Returns
/// * `Ok(Solution)` with the path and search statistics.
/// * `Err(SearchError::NoSolutionFound)` if `goal` is not reachable from `start`.
/// * `Err(SearchError::ExpansionLimitExceeded)` if the cap was hit first.
pub fn search<H: Heuristic + ?Sized>(
    start: &Board,
    goal: &Board,
    heuristic: &H,
    max_expansions: Option<usize>,
) -> Result<Solution, SearchError> {
    let mut arena = NodeArena::new();
    let mut frontier = Frontier::new();
    let mut visited = VisitedSet::new();
    let mut expanded = 0usize;

    log::debug!(
        "Searching from {:?} to {:?} (limit: {:?})",
        start.cells(),
        goal.cells(),
        max_expansions
    );

    let root = arena.insert_root(*start);
    frontier.push(root, heuristic.estimate(start, goal));

    while let Some((current, _)) = frontier.pop() {
        let node = arena.get(current);
        let board = *node.board();
        let cost = node.cost();

        if board == *goal {
            let solution = Solution {
                path: arena.path_to(current),
                moves: arena.moves_to(current),
                expanded,
                generated: arena.len(),
                peak_frontier: frontier.peak_len(),
            };
            log::debug!(
                "Found a {}-move solution after expanding {} boards ({} nodes generated)",
                solution.cost(),
                solution.expanded,
                solution.generated
            );
            return Ok(solution);
        }

        // A stale duplicate: this board was expanded through a cheaper or earlier node.
        if visited.contains(&board) {
            continue;
        }

        if let Some(limit) = max_expansions {
            if expanded >= limit {
                log::debug!(
                    "Expansion limit of {} reached with {} nodes still queued",
                    limit,
                    frontier.len()
                );
                return Err(SearchError::ExpansionLimitExceeded { limit });
            }
        }

        visited.insert(&board);
        expanded += 1;

        for (mv, child) in board.successors() {
            if visited.contains(&child) {
                continue;
            }
            let priority = cost + 1 + heuristic.estimate(&child, goal);
            let id = arena.insert_child(current, mv, child);
            frontier.push(id, priority);
        }
    }

    log::debug!(
        "Frontier exhausted after expanding {} boards; goal is unreachable",
        expanded
    );
    Err(SearchError::NoSolutionFound { expanded })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use crate::heuristics::{manhattan_distance, HeuristicKind};
    use std::collections::{HashMap, VecDeque};

    const EASY: [u8; 9] = [4, 1, 3, 7, 2, 6, 0, 5, 8];
    const HARDEST: [u8; 9] = [8, 6, 7, 2, 5, 4, 3, 0, 1];

    fn board(cells: [u8; 9]) -> Board {
        Board::from_cells(cells).unwrap()
    }

    fn assert_valid_path(path: &[Board], start: &Board, goal: &Board) {
        assert_eq!(path.first(), Some(start), "Path must begin at the start");
        assert_eq!(path.last(), Some(goal), "Path must end at the goal");
        for pair in path.windows(2) {
            let connected = pair[0]
                .successors()
                .iter()
                .any(|(_, next)| *next == pair[1]);
            assert!(connected, "Consecutive boards must differ by one legal move:\n{}\n\n{}", pair[0], pair[1]);
        }
    }

    /// Breadth-first distances from `goal` to every board reachable from it.
    fn all_distances(goal: &Board) -> HashMap<Board, usize> {
        let mut distances = HashMap::new();
        let mut queue = VecDeque::new();
        distances.insert(*goal, 0);
        queue.push_back(*goal);
        while let Some(board) = queue.pop_front() {
            let depth = distances[&board];
            for (_, next) in board.successors() {
                if !distances.contains_key(&next) {
                    distances.insert(next, depth + 1);
                    queue.push_back(next);
                }
            }
        }
        distances
    }

    #[test]
    fn test_already_solved() {
        let goal = Board::solved();
        let solution = search(&goal, &goal, &HeuristicKind::Manhattan, None).unwrap();
        assert_eq!(solution.path, vec![goal]);
        assert!(solution.moves.is_empty());
        assert_eq!(solution.expanded, 0, "No expansion beyond the root");
        assert_eq!(solution.generated, 1);
    }

    #[test]
    fn test_already_solved_with_zero_limit() {
        let goal = Board::solved();
        let path = solve(goal, goal, &HeuristicKind::Manhattan, Some(0)).unwrap();
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_easy_case_takes_six_moves() {
        let start = board(EASY);
        let goal = Board::solved();
        for kind in HeuristicKind::ALL {
            let solution = search(&start, &goal, &kind, None).unwrap();
            assert_eq!(solution.cost(), 6, "{} found a non-optimal path", kind);
            assert_eq!(solution.path.len(), 7);
            assert_valid_path(&solution.path, &start, &goal);
        }
    }

    #[test]
    fn test_easy_case_moves() {
        // Every move on this path brings one tile closer to its goal cell, so
        // it is the only 6-move solution.
        let solution = search(&board(EASY), &Board::solved(), &HeuristicKind::Manhattan, None).unwrap();
        assert_eq!(
            solution.moves,
            vec![Move::Up, Move::Up, Move::Right, Move::Down, Move::Down, Move::Right]
        );
    }

    #[test]
    fn test_moves_replay_path() {
        let start = board(HARDEST);
        let solution = search(&start, &Board::solved(), &HeuristicKind::Manhattan, None).unwrap();
        let mut current = start;
        for (i, &mv) in solution.moves.iter().enumerate() {
            current = current.apply_move(mv);
            assert_eq!(current, solution.path[i + 1], "Move {} does not match the path", i);
        }
    }

    #[test]
    fn test_hardest_case_takes_thirty_one_moves() {
        let start = board(HARDEST);
        let goal = Board::solved();
        let manhattan = search(&start, &goal, &HeuristicKind::Manhattan, None).unwrap();
        assert_eq!(manhattan.cost(), 31);
        assert_eq!(manhattan.path.len(), 32);
        assert_valid_path(&manhattan.path, &start, &goal);
        assert!(
            manhattan.expanded < 181_440,
            "Manhattan should not need to expand the whole state space, expanded {}",
            manhattan.expanded
        );

        let misplaced = search(&start, &goal, &HeuristicKind::Misplaced, None).unwrap();
        assert_eq!(misplaced.cost(), 31);
        assert!(
            manhattan.expanded < misplaced.expanded,
            "Manhattan ({}) should expand fewer boards than misplaced tiles ({})",
            manhattan.expanded,
            misplaced.expanded
        );
    }

    #[test]
    fn test_search_is_deterministic() {
        let start = board(HARDEST);
        let goal = Board::solved();
        let first = search(&start, &goal, &HeuristicKind::Manhattan, None).unwrap();
        let second = search(&start, &goal, &HeuristicKind::Manhattan, None).unwrap();
        assert_eq!(first, second);
    }

    fn move_string(moves: &[Move]) -> String {
        moves.iter().map(|mv| mv.to_char()).collect()
    }

    #[test]
    fn test_ties_follow_insertion_order() {
        // The hardest board has several 31-move solutions; which one is
        // returned depends on equal-f nodes popping in the order they were
        // queued, with successors queued in legal-move table order.
        let start = board(HARDEST);
        let goal = Board::solved();

        let manhattan = search(&start, &goal, &HeuristicKind::Manhattan, None).unwrap();
        assert_eq!(move_string(&manhattan.moves), "LURDRUULDLDRRUULLDDRRULULDDRURD");

        let misplaced = search(&start, &goal, &HeuristicKind::Misplaced, None).unwrap();
        assert_eq!(move_string(&misplaced.moves), "RUULLDDRRULLDRRULURDLULDDRRULDR");
        assert_ne!(manhattan.moves, misplaced.moves, "Both are optimal but reached through different ties");
    }

    #[test]
    fn test_unsolvable_exhausts_frontier() {
        let start = board([2, 1, 3, 4, 5, 6, 7, 8, 0]);
        let result = search(&start, &Board::solved(), &HeuristicKind::Manhattan, None);
        // Every board of the start's parity class is expanded exactly once.
        assert_eq!(result, Err(SearchError::NoSolutionFound { expanded: 181_440 }));
    }

    #[test]
    fn test_expansion_limit() {
        let result = solve(board(HARDEST), Board::solved(), &HeuristicKind::Manhattan, Some(10));
        assert_eq!(result, Err(SearchError::ExpansionLimitExceeded { limit: 10 }));

        let roomy = solve(board(EASY), Board::solved(), &HeuristicKind::Manhattan, Some(1_000));
        assert_eq!(roomy.map(|p| p.len()), Ok(7));
    }

    #[test]
    fn test_expansion_limit_boundary() {
        let start = board(EASY);
        let goal = Board::solved();
        let solution = search(&start, &goal, &HeuristicKind::Manhattan, None).unwrap();
        assert_eq!(solution.expanded, 6);

        let exact = search(&start, &goal, &HeuristicKind::Manhattan, Some(6)).unwrap();
        assert_eq!(exact.cost(), 6, "A cap equal to the expansions needed must still succeed");

        let short = search(&start, &goal, &HeuristicKind::Manhattan, Some(5));
        assert_eq!(short, Err(SearchError::ExpansionLimitExceeded { limit: 5 }));
    }

    #[test]
    fn test_solve_cells_rejects_invalid_input() {
        let result = solve_cells(
            [1, 2, 3, 4, 5, 6, 7, 8, 8],
            *Board::solved().cells(),
            &HeuristicKind::Manhattan,
            None,
        );
        assert_eq!(
            result,
            Err(SearchError::InvalidState(BoardError::DuplicateValue { value: 8 }))
        );

        let result = solve_cells(EASY, [1, 2, 3, 4, 5, 6, 7, 8, 9], &HeuristicKind::Manhattan, None);
        assert!(matches!(result, Err(SearchError::InvalidState(_))));
    }

    #[test]
    fn test_optimal_against_breadth_first_search() {
        let goal = Board::solved();
        let distances = all_distances(&goal);
        assert_eq!(distances.len(), 181_440);

        for seed in 0..6 {
            let start = Board::shuffled_with_seed(&goal, 24, seed);
            let expected = distances[&start];
            for kind in [HeuristicKind::Manhattan, HeuristicKind::Misplaced] {
                let path = solve(start, goal, &kind, None).unwrap();
                assert_eq!(path.len(), expected + 1, "{} on seed {}", kind, seed);
                assert_valid_path(&path, &start, &goal);
            }
        }
    }

    #[test]
    fn test_custom_goal() {
        let goal = board([0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let start = Board::shuffled_with_seed(&goal, 12, 3);
        let path = solve(start, goal, &HeuristicKind::Manhattan, None).unwrap();
        assert_valid_path(&path, &start, &goal);
        assert!(path.len() <= 13, "A 12-move scramble needs at most 12 moves");
    }

    #[test]
    fn test_plain_function_heuristic() {
        let start = board(EASY);
        let path = solve(start, Board::solved(), &manhattan_distance, None).unwrap();
        assert_eq!(path.len(), 7);
    }
}

//! Board model for the 3x3 sliding-tile puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Move`: A direction in which the blank slides.
//! - `Board`: A validated configuration of the nine cells, its legal moves
//!   and its successors.
//! - `StateKey`: A collision-free integer encoding of a board, used as the
//!   key of the solver's visited set.
//! - `Game`: An interactive session over a board, with undo.
use crate::error::BoardError;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The cell value that denotes the blank.
pub const BLANK: u8 = 0;

/// A direction in which the blank slides.
///
/// Sliding the blank `Up` swaps it with the tile directly above it, and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All four directions.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Returns the move that undoes this one.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Move;
    /// assert_eq!(Move::Up.inverse(), Move::Down);
    /// assert_eq!(Move::Left.inverse(), Move::Right);
    /// ```
    pub fn inverse(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// Converts the move to a single-character representation.
    pub fn to_char(self) -> char {
        match self {
            Move::Up => 'U',
            Move::Down => 'D',
            Move::Left => 'L',
            Move::Right => 'R',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "UP",
            Move::Down => "DOWN",
            Move::Left => "LEFT",
            Move::Right => "RIGHT",
        };
        f.write_str(name)
    }
}

/// Legal moves for each blank position, row-major with 0 at the top-left.
///
/// The order within each entry is the order in which successors are generated.
pub static LEGAL_MOVES: [&[Move]; CELL_COUNT] = [
    &[Move::Down, Move::Right],
    &[Move::Left, Move::Down, Move::Right],
    &[Move::Down, Move::Left],
    &[Move::Up, Move::Down, Move::Right],
    &[Move::Up, Move::Down, Move::Left, Move::Right],
    &[Move::Up, Move::Down, Move::Left],
    &[Move::Up, Move::Right],
    &[Move::Left, Move::Up, Move::Right],
    &[Move::Up, Move::Left],
];

/// A board packed into a single integer, nine base-9 digits with cell 0 most
/// significant.
///
/// Distinct boards always produce distinct keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey(u32);

impl StateKey {
    /// Returns the packed integer.
    pub fn value(self) -> u32 {
        self.0
    }
}

/// A configuration of the puzzle: nine cells holding each of `0..=8` exactly once.
///
/// A `Board` can only be obtained through validation (`Board::from_cells`,
/// `Board::from_slice`) or from another valid board through a legal move, so
/// every `Board` value satisfies the permutation invariant. Equality compares
/// cells only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; CELL_COUNT],
}

impl Board {
    /// Creates a board from nine cell values, row-major.
    ///
    /// # Arguments
    /// * `cells`: The cell values; `0` denotes the blank.
    ///
    /// # Returns
    /// * `Ok(Board)` if the cells are a permutation of `0..=8`.
    /// * `Err(BoardError::ValueOutOfRange)` if a value exceeds 8.
    /// * `Err(BoardError::DuplicateValue)` if a value appears twice.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// let board = Board::from_cells([1, 2, 3, 4, 5, 6, 7, 8, 0]).unwrap();
    /// assert_eq!(board, Board::solved());
    ///
    /// assert!(Board::from_cells([1, 1, 3, 4, 5, 6, 7, 8, 0]).is_err());
    /// ```
    pub fn from_cells(cells: [u8; CELL_COUNT]) -> Result<Self, BoardError> {
        let mut seen = [false; CELL_COUNT];
        for (index, &value) in cells.iter().enumerate() {
            let slot = seen
                .get_mut(value as usize)
                .ok_or(BoardError::ValueOutOfRange { value, index })?;
            if *slot {
                return Err(BoardError::DuplicateValue { value });
            }
            *slot = true;
        }
        Ok(Board { cells })
    }

    /// Creates a board from a slice, checking its length before validating the cells.
    pub fn from_slice(cells: &[u8]) -> Result<Self, BoardError> {
        let cells: [u8; CELL_COUNT] = cells
            .try_into()
            .map_err(|_| BoardError::WrongLength { found: cells.len() })?;
        Self::from_cells(cells)
    }

    /// The conventional goal: tiles `1..=8` in order with the blank at the bottom-right.
    pub fn solved() -> Self {
        Board {
            cells: [1, 2, 3, 4, 5, 6, 7, 8, BLANK],
        }
    }

    /// Returns the cells, row-major.
    pub fn cells(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }

    /// Returns the value at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is not below `BOARD_SIZE`.
    pub fn get_tile(&self, r: usize, c: usize) -> u8 {
        assert!(r < BOARD_SIZE && c < BOARD_SIZE, "({r}, {c}) is off the board");
        self.cells[r * BOARD_SIZE + c]
    }

    /// Returns the linear index (0..9) at which `value` sits.
    ///
    /// # Panics
    /// Panics if `value` is greater than 8, which no valid board contains.
    pub fn position_of(&self, value: u8) -> usize {
        self.positions()[value as usize]
    }

    /// Returns a table mapping each value to its linear index.
    pub fn positions(&self) -> [usize; CELL_COUNT] {
        let mut positions = [0; CELL_COUNT];
        for (index, &value) in self.cells.iter().enumerate() {
            positions[value as usize] = index;
        }
        positions
    }

    /// Returns the linear index of the blank.
    pub fn blank_position(&self) -> usize {
        // Every valid board holds exactly one blank.
        self.cells
            .iter()
            .position(|&v| v == BLANK)
            .unwrap_or_default()
    }

    /// Returns the legal moves for the blank's current position, in generation order.
    pub fn legal_moves(&self) -> &'static [Move] {
        LEGAL_MOVES[self.blank_position()]
    }

    /// Returns `true` if `mv` is legal from this board.
    pub fn is_legal(&self, mv: Move) -> bool {
        self.legal_moves().contains(&mv)
    }

    /// Returns a new board with the blank slid in direction `mv`.
    ///
    /// The blank is swapped with its neighbour in that direction. Callers
    /// are expected to pick `mv` from `legal_moves`; use `try_apply_move`
    /// when the move comes from untrusted input.
    ///
    /// # Panics
    /// Panics if `mv` is not legal for the blank's position.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::{Board, Move};
    /// let board = Board::solved().apply_move(Move::Up);
    /// assert_eq!(board.cells(), &[1, 2, 3, 4, 5, 0, 7, 8, 6]);
    /// ```
    pub fn apply_move(&self, mv: Move) -> Board {
        let blank = self.blank_position();
        assert!(
            self.is_legal(mv),
            "{mv} is not a legal move with the blank at position {blank}"
        );
        let target = match mv {
            Move::Up => blank - BOARD_SIZE,
            Move::Down => blank + BOARD_SIZE,
            Move::Left => blank - 1,
            Move::Right => blank + 1,
        };
        let mut cells = self.cells;
        cells.swap(blank, target);
        Board { cells }
    }

    /// Applies `mv` if it is legal, returning `None` otherwise.
    pub fn try_apply_move(&self, mv: Move) -> Option<Board> {
        self.is_legal(mv).then(|| self.apply_move(mv))
    }

    /// Returns every board reachable in one move, paired with the move used.
    ///
    /// The result holds exactly `legal_moves().len()` entries, in the order of
    /// `LEGAL_MOVES`.
    pub fn successors(&self) -> Vec<(Move, Board)> {
        self.legal_moves()
            .iter()
            .map(|&mv| (mv, self.apply_move(mv)))
            .collect()
    }

    /// Packs the board into a `StateKey`.
    pub fn key(&self) -> StateKey {
        StateKey(
            self.cells
                .iter()
                .fold(0u32, |acc, &v| acc * CELL_COUNT as u32 + v as u32),
        )
    }

    /// Parity of the number of inversions among the non-blank tiles.
    fn inversion_parity(&self) -> bool {
        let mut inversions = 0usize;
        for (i, &a) in self.cells.iter().enumerate() {
            if a == BLANK {
                continue;
            }
            inversions += self.cells[i + 1..]
                .iter()
                .filter(|&&b| b != BLANK && b < a)
                .count();
        }
        inversions % 2 == 1
    }

    /// Returns `true` if this board can be reached from `other` by legal moves.
    ///
    /// On a board of odd width a move never changes the inversion parity of
    /// the tiles, and boards of equal parity are always connected.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// let goal = Board::solved();
    /// let swapped = Board::from_cells([2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
    /// assert!(!swapped.is_reachable_from(&goal));
    /// ```
    pub fn is_reachable_from(&self, other: &Board) -> bool {
        self.inversion_parity() == other.inversion_parity()
    }

    /// Scrambles `goal` by a random walk of `steps` legal moves.
    ///
    /// The walk never immediately undoes its previous move. Since only legal
    /// moves are applied, the result is always solvable back to `goal`.
    ///
    /// # Arguments
    /// * `goal`: The board the walk starts from.
    /// * `steps`: The number of moves to apply.
    /// * `rng`: The random number generator choosing each move.
    pub fn shuffled(goal: &Board, steps: usize, rng: &mut impl Rng) -> Board {
        let mut board = *goal;
        let mut previous: Option<Move> = None;
        for _ in 0..steps {
            // Every position has at least two legal moves, so excluding the
            // reversal always leaves a candidate.
            let candidates: Vec<Move> = board
                .legal_moves()
                .iter()
                .copied()
                .filter(|&mv| previous.map_or(true, |p| mv != p.inverse()))
                .collect();
            let mv = candidates[rng.gen_range(0..candidates.len())];
            board = board.apply_move(mv);
            previous = Some(mv);
        }
        board
    }

    /// Scrambles `goal` deterministically: the same seed always yields the same board.
    pub fn shuffled_with_seed(goal: &Board, steps: usize, seed: u64) -> Board {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::shuffled(goal, steps, &mut rng)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::solved()
    }
}

impl fmt::Display for Board {
    /// Formats the board as three rows, showing the blank as `_`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row
                .iter()
                .map(|&v| if v == BLANK { "_".to_string() } else { v.to_string() })
                .collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Seed used by `Game::new`, so that the default game is reproducible.
const DEFAULT_GAME_SEED: u64 = 514514;

/// Number of scramble moves used by `Game::new`.
const DEFAULT_SHUFFLE_STEPS: usize = 20;

/// Manages an interactive puzzle session.
///
/// The game keeps the current board, the goal being worked towards and the
/// moves made so far. Undo replays the inverse of the most recent move.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::{Board, Game, Move};
/// let start = Board::solved().apply_move(Move::Up);
/// let mut game = Game::new_with_board(start, Board::solved());
/// assert!(!game.is_solved());
///
/// assert!(game.slide(Move::Down));
/// assert!(game.is_solved());
/// assert_eq!(game.steps(), 1);
///
/// assert!(game.undo_last_move());
/// assert_eq!(game.board(), &start);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    goal: Board,
    history: Vec<Move>,
}

impl Game {
    /// Creates a game on a scramble of the solved board with a fixed seed.
    pub fn new() -> Self {
        Self::new_with_seed(DEFAULT_SHUFFLE_STEPS, DEFAULT_GAME_SEED)
    }

    /// Creates a game on a `steps`-move scramble of the solved board.
    pub fn new_with_seed(steps: usize, seed: u64) -> Self {
        let goal = Board::solved();
        Self::new_with_board(Board::shuffled_with_seed(&goal, steps, seed), goal)
    }

    /// Creates a game starting at `board` and aiming for `goal`.
    pub fn new_with_board(board: Board, goal: Board) -> Self {
        Game {
            board,
            goal,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn goal(&self) -> &Board {
        &self.goal
    }

    /// Returns the number of moves made and not undone.
    pub fn steps(&self) -> u32 {
        self.history.len() as u32
    }

    /// Returns the moves made so far, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.history
    }

    /// Slides the blank in direction `mv`.
    ///
    /// # Returns
    /// * `true` if the move was legal and has been applied.
    /// * `false` if the blank cannot move that way; the board is unchanged.
    pub fn slide(&mut self, mv: Move) -> bool {
        match self.board.try_apply_move(mv) {
            Some(next) => {
                self.board = next;
                self.history.push(mv);
                true
            }
            None => false,
        }
    }

    /// Undoes the last move.
    ///
    /// # Returns
    /// `false` if no move has been made yet.
    pub fn undo_last_move(&mut self) -> bool {
        match self.history.pop() {
            Some(mv) => {
                self.board = self.board.apply_move(mv.inverse());
                true
            }
            None => false,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.board == self.goal
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

//! # Eight Puzzle Solver Library
//!
//! This library provides the board model of the 3x3 sliding-tile puzzle and
//! an A* search engine that finds shortest solutions to it.
//!
//! It is used by three binaries:
//! - `human_player`: Allows interactive play on a scrambled board via the command line.
//! - `ai_solver`: Takes a board configuration (or a seeded scramble) and prints
//!   a shortest sequence of moves to the goal.
//! - `heuristic_evaluator`: Solves a batch of scrambles with every built-in
//!   heuristic and compares how much work each one needed.
//!
//! ## Modules
//! - `engine`: The board (`Board`), moves (`Move`), the legal-move table,
//!   state keys, shuffling and the interactive `Game`.
//! - `heuristics`: The `Heuristic` trait and the misplaced-tiles and Manhattan estimates.
//! - `node`: Search nodes stored in an arena, and path reconstruction.
//! - `frontier`: The priority-ordered open set and the visited (closed) set.
//! - `solver`: The `solve` and `search` entry points.
//! - `error`: Error types.
//! - `utils`: Parsing boards from text.

pub mod engine;
pub mod error;
pub mod frontier;
pub mod heuristics;
pub mod node;
pub mod solver;
pub mod utils;

pub use engine::{Board, Move};
pub use error::{BoardError, SearchError};
pub use heuristics::{Heuristic, HeuristicKind};
pub use solver::{search, solve, Solution};

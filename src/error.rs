//! Error types for board construction and search.

use thiserror::Error;

/// Reasons a cell sequence is not a valid 8-puzzle configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The input did not contain exactly nine cells.
    #[error("Expected 9 cells, found {found}")]
    WrongLength { found: usize },

    /// A cell holds a value outside `0..=8`.
    #[error("Cell {index} holds {value}, expected a value between 0 and 8")]
    ValueOutOfRange { value: u8, index: usize },

    /// A value appears more than once, so the cells are not a permutation.
    #[error("Value {value} appears more than once")]
    DuplicateValue { value: u8 },

    /// A textual token could not be read as a cell value.
    #[error("Unrecognized token '{token}'")]
    UnrecognizedToken { token: String },
}

/// Errors returned by the search driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The start or goal configuration failed validation at entry.
    #[error("Invalid state: {0}")]
    InvalidState(#[from] BoardError),

    /// The frontier ran dry before the goal was popped.
    #[error("No solution found after expanding {expanded} states")]
    NoSolutionFound { expanded: usize },

    /// The caller-imposed expansion cap was reached first.
    #[error("Expansion limit of {limit} reached before the goal was found")]
    ExpansionLimitExceeded { limit: usize },
}

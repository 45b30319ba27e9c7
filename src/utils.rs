use crate::engine::{Board, BLANK};
use crate::error::BoardError;

/// Parses a board from text.
///
/// Cells are read row-major. If the text contains whitespace or commas it
/// is split on them and every token is one cell; otherwise every character
/// is one cell. The blank may be written as `0`, `_` or `.`.
///
/// # Returns
/// * `Ok(Board)` if exactly nine cells form a permutation of `0..=8`.
/// * `Err(BoardError::UnrecognizedToken)` if a token is not a cell value.
/// * `Err(BoardError::WrongLength)` if there are not nine cells.
/// * Any error of `Board::from_cells` otherwise.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::Board;
/// use eight_puzzle_solver::utils::board_from_str;
///
/// assert_eq!(board_from_str("123456780").unwrap(), Board::solved());
/// assert_eq!(board_from_str("1 2 3\n4 5 6\n7 8 _").unwrap(), Board::solved());
/// assert_eq!(board_from_str("1,2,3,4,5,6,7,8,0").unwrap(), Board::solved());
/// assert!(board_from_str("12345678").is_err());
/// ```
pub fn board_from_str(s: &str) -> Result<Board, BoardError> {
    let s = s.trim();
    let is_separator = |c: char| c.is_whitespace() || c == ',';

    let tokens: Vec<String> = if s.contains(is_separator) {
        s.split(is_separator)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        s.chars().map(|c| c.to_string()).collect()
    };

    let cells = tokens
        .iter()
        .map(|token| parse_cell(token))
        .collect::<Result<Vec<u8>, _>>()?;
    Board::from_slice(&cells)
}

/// Parses a board given as one string slice per row, e.g. `["1 2 3", "4 5 6", "7 8 _"]`.
pub fn board_from_str_array(rows: &[&str]) -> Result<Board, BoardError> {
    board_from_str(&rows.join(" "))
}

fn parse_cell(token: &str) -> Result<u8, BoardError> {
    match token {
        "_" | "." => Ok(BLANK),
        _ => token.parse::<u8>().map_err(|_| BoardError::UnrecognizedToken {
            token: token.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_from_str_compact() {
        let board = board_from_str("413726058").unwrap();
        assert_eq!(board.cells(), &[4, 1, 3, 7, 2, 6, 0, 5, 8]);
    }

    #[test]
    fn test_board_from_str_array_rows() {
        let board = board_from_str_array(&["8 6 7", "2 5 4", "3 . 1"]).unwrap();
        assert_eq!(board.cells(), &[8, 6, 7, 2, 5, 4, 3, 0, 1]);
    }

    #[test]
    fn test_board_from_str_invalid_char() {
        let result = board_from_str("1234x6780");
        assert_eq!(
            result,
            Err(BoardError::UnrecognizedToken { token: "x".to_string() })
        );
        assert!(result.unwrap_err().to_string().contains("Unrecognized token 'x'"));
    }

    #[test]
    fn test_board_from_str_wrong_length() {
        assert_eq!(
            board_from_str("1 2 3 4 5 6 7 8 0 9"),
            Err(BoardError::WrongLength { found: 10 })
        );
        assert_eq!(board_from_str(""), Err(BoardError::WrongLength { found: 0 }));
    }

    #[test]
    fn test_board_from_str_rejects_non_permutation() {
        assert_eq!(
            board_from_str("1 2 3 4 5 6 7 8 10"),
            Err(BoardError::ValueOutOfRange { value: 10, index: 8 })
        );
        assert_eq!(
            board_from_str("_ 1 2 3 4 5 6 7 ."),
            Err(BoardError::DuplicateValue { value: 0 })
        );
    }
}

//! Coordinate move input (`e2e4`).

use chess_core::Square;
use thiserror::Error;

/// A command-line move that is not a pair of squares.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected a move like e2e4, got {0:?}")]
pub struct CoordinateError(pub String);

/// Splits `"e2e4"` into its source and target squares.
pub fn parse_coordinates(text: &str) -> Result<(Square, Square), CoordinateError> {
    let err = || CoordinateError(text.to_string());
    if text.len() != 4 || !text.is_ascii() {
        return Err(err());
    }
    let from = Square::from_algebraic(&text[0..2]).ok_or_else(err)?;
    let to = Square::from_algebraic(&text[2..4]).ok_or_else(err)?;
    Ok((from, to))
}

//! The piece registry: which piece stands on which square.
//!
//! [`Board`] knows nothing about chess rules. Moving a piece removes whatever
//! stood on the target square and puts the piece there; it is up to the caller
//! to decide whether that was a sensible thing to do.

use crate::render::BoardRenderer;
use chess_core::{Color, File, MoveNotation, Piece, Placement, Rank, Square};
use thiserror::Error;

/// Errors from board manipulation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// There is no piece on the source square.
    #[error("no piece on {0}")]
    EmptySquare(Square),
}

/// What happened when a piece was moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub color: Color,
    /// The piece removed from the target square, if any.
    pub captured: Option<(Piece, Color)>,
}

impl MoveOutcome {
    /// The notation the board's input handler records for this move.
    pub fn notation(&self) -> MoveNotation {
        MoveNotation::compose(self.piece, self.from, self.to, self.captured.is_some())
    }
}

/// The pieces on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    placement: Placement,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board with the standard starting layout.
    pub fn new() -> Self {
        Board {
            placement: Placement::standard(),
        }
    }

    /// A board with no pieces.
    pub fn empty() -> Self {
        Board {
            placement: Placement::empty(),
        }
    }

    /// A board with a custom layout.
    pub fn from_placement(placement: Placement) -> Self {
        Board { placement }
    }

    /// Returns the current layout.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Returns the piece on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<(Piece, Color)> {
        self.placement.get(square)
    }

    /// Works out what moving the piece on `from` to `to` would do, without
    /// moving it.
    pub fn preview_move(&self, from: Square, to: Square) -> Result<MoveOutcome, BoardError> {
        let (piece, color) = self.piece_at(from).ok_or(BoardError::EmptySquare(from))?;
        Ok(MoveOutcome {
            from,
            to,
            piece,
            color,
            captured: self.piece_at(to),
        })
    }

    /// Moves the piece on `from` to `to`, removing anything on `to`.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<MoveOutcome, BoardError> {
        let outcome = self.preview_move(from, to)?;
        let moving = self.placement.set(from, None);
        self.placement.set(to, moving);
        Ok(outcome)
    }

    /// Clears the board and puts the starting layout back.
    pub fn reset(&mut self) {
        self.placement = Placement::standard();
    }

    /// The board as an 8x8 grid of labels, rank 8 first and the a-file first
    /// within each rank.
    ///
    /// Occupied cells read `"{color}-{piece}"` (e.g. `"white-pawn"`), empty
    /// cells are `""`.
    pub fn labels(&self) -> [[String; 8]; 8] {
        std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                let rank = Rank::from_index(7 - row as u8);
                let file = File::from_index(col as u8);
                match (file, rank) {
                    (Some(file), Some(rank)) => self
                        .piece_at(Square::new(file, rank))
                        .map(|(piece, color)| format!("{}-{}", color.name(), piece.name()))
                        .unwrap_or_default(),
                    _ => String::new(),
                }
            })
        })
    }
}

impl BoardRenderer for Board {
    type Snapshot = String;

    /// The placement string of the current layout.
    fn snapshot(&self) -> String {
        self.placement.to_placement_string()
    }
}

//! Core types for the chess board.
//!
//! This crate provides the fundamental types shared by the board and its
//! move history:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`MoveNotation`] and [`NotationPolicy`] for validating recorded moves
//! - [`Placement`] for piece layouts and their FEN-style text form

mod color;
mod notation;
mod piece;
mod placement;
mod square;

pub use color::Color;
pub use notation::{InvalidNotationError, MoveNotation, NotationPolicy};
pub use piece::Piece;
pub use placement::{Placement, PlacementError};
pub use square::{File, Rank, Square, SquareParseError};

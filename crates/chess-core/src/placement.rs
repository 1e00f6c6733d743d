//! Piece placement and its FEN-style text form.
//!
//! The text form is the first field of a FEN string: eight ranks from 8 down
//! to 1 separated by `/`, pieces as letters (uppercase for White), runs of
//! empty squares as digits.

use crate::{Color, File, Piece, Rank, Square};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a placement string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 ranks, got {0}")]
    InvalidRankCount(usize),

    #[error("invalid placement: invalid character '{character}' in rank {rank}")]
    InvalidCharacter { character: char, rank: u8 },

    #[error("invalid placement: rank {rank} has {squares} squares, expected 8")]
    InvalidSquareCount { rank: u8, squares: u32 },
}

/// What stands on each of the 64 squares.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    squares: [Option<(Piece, Color)>; 64],
}

impl Placement {
    /// Placement string of the standard starting layout.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Back-rank pieces from the a-file to the h-file.
    const BACK_RANK: [Piece; 8] = [
        Piece::Rook,
        Piece::Knight,
        Piece::Bishop,
        Piece::Queen,
        Piece::King,
        Piece::Bishop,
        Piece::Knight,
        Piece::Rook,
    ];

    /// A board with no pieces.
    pub const fn empty() -> Self {
        Placement {
            squares: [None; 64],
        }
    }

    /// The standard starting layout.
    pub fn standard() -> Self {
        let mut placement = Self::empty();
        for color in Color::ALL {
            for file in File::ALL {
                let pawn_rank = Rank::from_index(color.pawn_rank()).unwrap_or(Rank::R2);
                let back_rank = Rank::from_index(color.back_rank()).unwrap_or(Rank::R1);
                placement.set(Square::new(file, pawn_rank), Some((Piece::Pawn, color)));
                placement.set(
                    Square::new(file, back_rank),
                    Some((Self::BACK_RANK[file.index() as usize], color)),
                );
            }
        }
        placement
    }

    /// Parses a placement string.
    pub fn parse(text: &str) -> Result<Self, PlacementError> {
        let ranks: Vec<&str> = text.split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::InvalidRankCount(ranks.len()));
        }

        let mut placement = Self::empty();
        for (i, rank_text) in ranks.iter().enumerate() {
            let rank_number = 8 - i as u8;
            let rank = Rank::from_index(rank_number - 1).unwrap_or(Rank::R1);
            let mut squares: u32 = 0;
            for c in rank_text.chars() {
                if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    squares += run;
                } else if let Some(piece) = Piece::from_placement_char(c) {
                    if let Some(file) = File::from_index(squares as u8) {
                        placement.set(Square::new(file, rank), Some(piece));
                    }
                    squares += 1;
                } else {
                    return Err(PlacementError::InvalidCharacter {
                        character: c,
                        rank: rank_number,
                    });
                }
            }
            if squares != 8 {
                return Err(PlacementError::InvalidSquareCount {
                    rank: rank_number,
                    squares,
                });
            }
        }
        Ok(placement)
    }

    /// Returns the piece on `square`, if any.
    #[inline]
    pub fn get(&self, square: Square) -> Option<(Piece, Color)> {
        self.squares[square.index() as usize]
    }

    /// Puts `piece` on `square` (or clears it), returning what was there.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<(Piece, Color)>) -> Option<(Piece, Color)> {
        std::mem::replace(&mut self.squares[square.index() as usize], piece)
    }

    /// Serializes the placement to its text form.
    pub fn to_placement_string(&self) -> String {
        let mut out = String::with_capacity(71);
        for rank in Rank::ALL.iter().rev() {
            let mut empty = 0;
            for file in File::ALL {
                match self.get(Square::new(file, *rank)) {
                    Some((piece, color)) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_placement_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if *rank != Rank::R1 {
                out.push('/');
            }
        }
        out
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromStr for Placement {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_placement_string())
    }
}

impl fmt::Debug for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Placement({})", self.to_placement_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn standard_layout_serializes_to_startpos() {
        let placement = Placement::standard();
        assert_eq!(placement.to_placement_string(), Placement::STARTPOS);
    }

    #[test]
    fn standard_layout_squares() {
        let placement = Placement::standard();
        assert_eq!(placement.get(sq("e1")), Some((Piece::King, Color::White)));
        assert_eq!(placement.get(sq("d8")), Some((Piece::Queen, Color::Black)));
        assert_eq!(placement.get(sq("b1")), Some((Piece::Knight, Color::White)));
        assert_eq!(placement.get(sq("f8")), Some((Piece::Bishop, Color::Black)));
        assert_eq!(placement.get(sq("h2")), Some((Piece::Pawn, Color::White)));
        assert_eq!(placement.get(sq("a7")), Some((Piece::Pawn, Color::Black)));
        assert_eq!(placement.get(sq("e4")), None);
    }

    #[test]
    fn parse_matches_standard() {
        assert_eq!(
            Placement::parse(Placement::STARTPOS).unwrap(),
            Placement::standard()
        );
    }

    #[test]
    fn parse_and_serialize_custom_position() {
        let text = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R";
        let placement: Placement = text.parse().unwrap();
        assert_eq!(placement.get(sq("c6")), Some((Piece::Knight, Color::Black)));
        assert_eq!(placement.get(sq("f3")), Some((Piece::Knight, Color::White)));
        assert_eq!(placement.to_string(), text);
    }

    #[test]
    fn set_returns_previous_occupant() {
        let mut placement = Placement::standard();
        let taken = placement.set(sq("e2"), None);
        assert_eq!(taken, Some((Piece::Pawn, Color::White)));
        assert_eq!(placement.get(sq("e2")), None);
        assert_eq!(
            placement.to_placement_string(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPP1PPP/RNBQKBNR"
        );
        assert_eq!(Placement::empty().to_placement_string(), "8/8/8/8/8/8/8/8");
    }

    #[test]
    fn invalid_rank_count() {
        assert_eq!(
            Placement::parse("8/8/8/8/8/8/8"),
            Err(PlacementError::InvalidRankCount(7))
        );
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            Placement::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR"),
            Err(PlacementError::InvalidCharacter {
                character: 'X',
                rank: 2
            })
        );
        assert!(matches!(
            Placement::parse("9/8/8/8/8/8/8/8"),
            Err(PlacementError::InvalidCharacter { character: '9', .. })
        ));
    }

    #[test]
    fn invalid_square_count() {
        assert_eq!(
            Placement::parse("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(PlacementError::InvalidSquareCount {
                rank: 8,
                squares: 9
            })
        );
    }

    #[test]
    fn error_display() {
        let err = PlacementError::InvalidRankCount(3);
        assert!(err.to_string().contains('3'));
        let err = PlacementError::InvalidSquareCount {
            rank: 4,
            squares: 7,
        };
        assert!(err.to_string().contains("rank 4"));
    }
}

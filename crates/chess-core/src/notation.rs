//! Move notation as recorded in the move list.
//!
//! A notation names the destination square, optionally prefixed by a piece
//! letter (`B`, `K`, `N`, `Q`, `R`; no letter means a pawn). The board's input
//! handler may put a capture marker and a pawn's source file in front of the
//! destination, e.g. `"e4"`, `"Nf3"`, `"exd5"`, `"Bxc6"`.
//!
//! How much of the string has to look like that is decided by a
//! [`NotationPolicy`].

use crate::{File, Piece, Rank, Square};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// How strictly a submitted notation string is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotationPolicy {
    /// Case-insensitive "contains" test: the string is accepted if any part of
    /// it is an optional piece letter followed by a square. `"xxe4yy"` and
    /// `"E4"` pass; `"9"`, `""` and `"z9"` do not.
    #[default]
    Loose,
    /// The whole string must be `[BKNQR]?[a-h]?x?[a-h][1-8]` with an optional
    /// trailing `+` or `#`, case-sensitive.
    Strict,
}

impl NotationPolicy {
    /// Validates `text` and extracts the piece and destination it names.
    pub fn parse(self, text: &str) -> Result<MoveNotation, InvalidNotationError> {
        let chars: Vec<char> = text.chars().collect();
        let found = match self {
            NotationPolicy::Loose => find_fragment(&chars),
            NotationPolicy::Strict => match_whole(&chars),
        };
        match found {
            Some((piece, destination)) => Ok(MoveNotation {
                text: text.to_string(),
                piece,
                destination,
            }),
            None => Err(InvalidNotationError {
                text: text.to_string(),
                policy: self,
            }),
        }
    }

    /// Returns true if `text` passes this policy.
    pub fn accepts(self, text: &str) -> bool {
        self.parse(text).is_ok()
    }
}

impl fmt::Display for NotationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationPolicy::Loose => write!(f, "loose"),
            NotationPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// A submitted move notation that failed validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid move notation {text:?} under {policy} validation")]
pub struct InvalidNotationError {
    /// The rejected string.
    pub text: String,
    /// The policy that rejected it.
    pub policy: NotationPolicy,
}

/// A validated move notation.
///
/// The original text is kept verbatim; `piece` and `destination` are what the
/// validator read out of it and are never used to rewrite the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveNotation {
    text: String,
    piece: Piece,
    destination: Square,
}

impl MoveNotation {
    /// Builds the notation the board's input handler produces for a move of
    /// `piece` from `from` to `to`.
    ///
    /// Format: piece letter (none for pawns), then for pawn captures the
    /// source file, then `x` if something was captured, then the destination.
    pub fn compose(piece: Piece, from: Square, to: Square, captured: bool) -> Self {
        let mut text = String::with_capacity(5);
        if let Some(letter) = piece.notation_letter() {
            text.push(letter);
        }
        if captured {
            if piece == Piece::Pawn {
                text.push(from.file().to_char());
            }
            text.push('x');
        }
        text.push_str(&to.to_algebraic());
        MoveNotation {
            text,
            piece,
            destination: to,
        }
    }

    /// The notation text exactly as submitted.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The moved piece as read from the notation.
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// The destination square as read from the notation.
    pub fn destination(&self) -> Square {
        self.destination
    }
}

impl fmt::Display for MoveNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Leftmost match of `[BKNQR]?[a-h][1-8]`, ignoring case. The piece letter is
/// tried first at each position, like a greedy `?`.
fn find_fragment(chars: &[char]) -> Option<(Piece, Square)> {
    for i in 0..chars.len() {
        if let Some(piece) = Piece::from_notation_letter(chars[i].to_ascii_uppercase()) {
            if let Some(square) = square_at(chars, i + 1, false) {
                return Some((piece, square));
            }
        }
        if let Some(square) = square_at(chars, i, false) {
            return Some((Piece::Pawn, square));
        }
    }
    None
}

fn match_whole(chars: &[char]) -> Option<(Piece, Square)> {
    let (piece, rest) = match chars.split_first() {
        Some((&c, rest)) => match Piece::from_notation_letter(c) {
            Some(piece) => (piece, rest),
            None => (Piece::Pawn, chars),
        },
        None => return None,
    };

    let rest = match rest.split_last() {
        Some((&('+' | '#'), init)) => init,
        _ => rest,
    };
    if rest.len() < 2 {
        return None;
    }

    let (prefix, _) = rest.split_at(rest.len() - 2);
    let destination = square_at(rest, rest.len() - 2, true)?;
    let prefix_ok = match prefix {
        [] | ['x'] => true,
        [f] | [f, 'x'] => f.is_ascii_lowercase() && File::from_char(*f).is_some(),
        _ => false,
    };
    prefix_ok.then_some((piece, destination))
}

fn square_at(chars: &[char], i: usize, lowercase_only: bool) -> Option<Square> {
    let f = *chars.get(i)?;
    let r = *chars.get(i + 1)?;
    if lowercase_only && !f.is_ascii_lowercase() {
        return None;
    }
    Some(Square::new(File::from_char(f)?, Rank::from_char(r)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn loose_accepts_composed_notations() {
        for text in ["e4", "Nf3", "exd5", "Bxc6", "Ke2", "Qh5", "Ra8"] {
            assert!(NotationPolicy::Loose.accepts(text), "{text}");
        }
    }

    #[test]
    fn loose_rejects_strings_without_a_square() {
        for text in ["", "9", "z9", "Nx", "e", "i9", "O-O"] {
            assert!(!NotationPolicy::Loose.accepts(text), "{text}");
        }
    }

    #[test]
    fn loose_matches_anywhere_and_ignores_case() {
        let m = NotationPolicy::Loose.parse("garbage e4 junk").unwrap();
        assert_eq!(m.destination(), sq("e4"));
        assert_eq!(m.piece(), Piece::Pawn);
        assert_eq!(m.as_str(), "garbage e4 junk");

        let m = NotationPolicy::Loose.parse("E4").unwrap();
        assert_eq!(m.destination(), sq("e4"));

        let m = NotationPolicy::Loose.parse("nf3").unwrap();
        assert_eq!(m.piece(), Piece::Knight);
        assert_eq!(m.destination(), sq("f3"));
    }

    #[test]
    fn loose_takes_leftmost_fragment() {
        // 'b' is tried as a piece letter before the bare square.
        let m = NotationPolicy::Loose.parse("bb5").unwrap();
        assert_eq!(m.piece(), Piece::Bishop);
        assert_eq!(m.destination(), sq("b5"));

        let m = NotationPolicy::Loose.parse("b5").unwrap();
        assert_eq!(m.piece(), Piece::Pawn);
        assert_eq!(m.destination(), sq("b5"));

        let m = NotationPolicy::Loose.parse("exd5").unwrap();
        assert_eq!(m.piece(), Piece::Pawn);
        assert_eq!(m.destination(), sq("d5"));
    }

    #[test]
    fn strict_accepts_input_handler_format() {
        for text in ["e4", "Nf3", "exd5", "Bxc6", "Nbd2", "xe4", "Qh5+", "Qf7#"] {
            assert!(NotationPolicy::Strict.accepts(text), "{text}");
        }
        let m = NotationPolicy::Strict.parse("Bxc6").unwrap();
        assert_eq!(m.piece(), Piece::Bishop);
        assert_eq!(m.destination(), sq("c6"));
    }

    #[test]
    fn strict_rejects_loose_only_strings() {
        for text in ["", "9", "z9", "E4", "nf3", "garbage e4", "e4 ", "e4x", "Pe4", "exxd5", "Nf3++"] {
            assert!(!NotationPolicy::Strict.accepts(text), "{text}");
        }
    }

    #[test]
    fn error_carries_text_and_policy() {
        let err = NotationPolicy::Strict.parse("z9").unwrap_err();
        assert_eq!(err.text, "z9");
        assert_eq!(err.policy, NotationPolicy::Strict);
        let message = err.to_string();
        assert!(message.contains("z9"));
        assert!(message.contains("strict"));
    }

    #[test]
    fn compose_matches_input_handler() {
        let e2 = sq("e2");
        let e4 = sq("e4");
        assert_eq!(
            MoveNotation::compose(Piece::Pawn, e2, e4, false).as_str(),
            "e4"
        );
        assert_eq!(
            MoveNotation::compose(Piece::Pawn, sq("e4"), sq("d5"), true).as_str(),
            "exd5"
        );
        assert_eq!(
            MoveNotation::compose(Piece::Knight, sq("g1"), sq("f3"), false).as_str(),
            "Nf3"
        );
        assert_eq!(
            MoveNotation::compose(Piece::Bishop, sq("b5"), sq("c6"), true).as_str(),
            "Bxc6"
        );
    }

    #[test]
    fn composed_notation_passes_both_policies() {
        for piece in Piece::ALL {
            for captured in [false, true] {
                let m = MoveNotation::compose(piece, sq("a2"), sq("h7"), captured);
                for policy in [NotationPolicy::Loose, NotationPolicy::Strict] {
                    let parsed = policy.parse(m.as_str()).unwrap();
                    assert_eq!(parsed.destination(), sq("h7"));
                }
            }
        }
    }

    #[test]
    fn policy_default_and_display() {
        assert_eq!(NotationPolicy::default(), NotationPolicy::Loose);
        assert_eq!(NotationPolicy::Strict.to_string(), "strict");
    }

    mod props {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn loose_finds_square_inside_noise(
                prefix in "[^a-hA-H]{0,6}",
                file in 0u8..8,
                rank in 0u8..8,
                suffix in ".{0,6}",
            ) {
                let square = Square::new(
                    File::from_index(file).unwrap(),
                    Rank::from_index(rank).unwrap(),
                );
                let text = format!("{prefix}{square}{suffix}");
                let parsed = NotationPolicy::Loose.parse(&text).unwrap();
                prop_assert_eq!(parsed.destination(), square);
                prop_assert_eq!(parsed.as_str(), text.as_str());
            }

            #[test]
            fn strings_without_file_letters_are_rejected(text in "[^a-hA-H]{0,12}") {
                prop_assert!(!NotationPolicy::Loose.accepts(&text));
                prop_assert!(!NotationPolicy::Strict.accepts(&text));
            }
        }
    }
}

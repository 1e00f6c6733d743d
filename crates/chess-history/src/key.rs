//! Keys of the board-state history.

use chess_core::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string is not a history key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid history key: '{0}'")]
pub struct KeyParseError(pub String);

/// Identifies one recorded board snapshot.
///
/// Text form is `"start"` for the initial layout and `"{move_number}{w|b}"`
/// for the snapshot taken after a ply, e.g. `"1w"`, `"1b"`, `"12w"`.
///
/// Keys order the way they are recorded: `start < 1w < 1b < 2w < ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum HistoryKey {
    /// Snapshot of the initial layout.
    Start,
    /// Snapshot taken after `color` played in full move `move_number`.
    Ply { move_number: u32, color: Color },
}

impl HistoryKey {
    /// Shorthand for [`HistoryKey::Ply`].
    #[inline]
    pub const fn ply(move_number: u32, color: Color) -> Self {
        HistoryKey::Ply { move_number, color }
    }

    /// The full-move number of a ply key; `None` for [`HistoryKey::Start`].
    pub const fn move_number(self) -> Option<u32> {
        match self {
            HistoryKey::Start => None,
            HistoryKey::Ply { move_number, .. } => Some(move_number),
        }
    }

    /// The color that played the ply; `None` for [`HistoryKey::Start`].
    pub const fn color(self) -> Option<Color> {
        match self {
            HistoryKey::Start => None,
            HistoryKey::Ply { color, .. } => Some(color),
        }
    }
}

impl fmt::Display for HistoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryKey::Start => f.write_str("start"),
            HistoryKey::Ply { move_number, color } => {
                write!(f, "{}{}", move_number, color.initial())
            }
        }
    }
}

impl FromStr for HistoryKey {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "start" {
            return Ok(HistoryKey::Start);
        }
        let err = || KeyParseError(s.to_string());

        let color = s.chars().last().and_then(Color::from_initial).ok_or_else(err)?;
        let digits = &s[..s.len() - 1];
        // Only canonical numbers: no sign, no leading zero.
        if digits.is_empty()
            || digits.starts_with('0')
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(err());
        }
        let move_number = digits.parse::<u32>().map_err(|_| err())?;
        Ok(HistoryKey::ply(move_number, color))
    }
}

impl From<HistoryKey> for String {
    fn from(key: HistoryKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for HistoryKey {
    type Error = KeyParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

//! What the replay prints.

use chess_core::Color;
use chess_history::{ChessBoard, HistoryKey};
use serde::Serialize;
use std::fmt;

/// One recorded board snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordedState {
    pub key: HistoryKey,
    pub snapshot: String,
}

/// The history of a replayed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryReport {
    pub turn: Color,
    pub move_number: u32,
    pub moves: Vec<String>,
    pub board_states: Vec<RecordedState>,
    /// Key of the most recently completed ply.
    pub current: Option<HistoryKey>,
}

impl HistoryReport {
    pub fn from_board(board: &ChessBoard) -> Self {
        let history = board.history();
        HistoryReport {
            turn: history.turn(),
            move_number: history.move_number(),
            moves: history.moves().to_vec(),
            board_states: history
                .board_states()
                .map(|(key, snapshot)| RecordedState {
                    key,
                    snapshot: snapshot.clone(),
                })
                .collect(),
            current: history.current_key(),
        }
    }
}

impl fmt::Display for HistoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Moves:")?;
        for (i, pair) in self.moves.chunks(2).enumerate() {
            writeln!(f, "  {}. {}", i + 1, pair.join(" "))?;
        }
        writeln!(f, "{} to move, move {}", self.turn, self.move_number)?;
        writeln!(f, "Board states:")?;
        for state in &self.board_states {
            writeln!(f, "  {:<6} {}", state.key.to_string(), state.snapshot)?;
        }
        match self.current {
            Some(key) => writeln!(f, "Current: {}", key),
            None => writeln!(f, "Current: -"),
        }
    }
}

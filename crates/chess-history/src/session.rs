//! A board together with its move history.

use crate::board::{Board, BoardError};
use crate::config::HistoryConfig;
use crate::key::HistoryKey;
use crate::state::GameState;
use chess_core::{Color, InvalidNotationError, Square};
use thiserror::Error;

/// Why a dropped piece was not played.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlayError {
    /// The piece was dropped back on the square it came from.
    #[error("piece dropped back on {0}")]
    SameSquare(Square),
    #[error(transparent)]
    Board(#[from] BoardError),
    /// The piece belongs to the side that is not to move.
    #[error("{turn} to move, but the piece on {square} is {piece_color}")]
    OutOfTurn {
        square: Square,
        piece_color: Color,
        turn: Color,
    },
    #[error(transparent)]
    InvalidNotation(#[from] InvalidNotationError),
}

/// The chess board and its history, as driven by the page.
///
/// Created with the starting layout already recorded under `"start"`. Every
/// accepted move is recorded with a snapshot of the board taken after the
/// piece has moved.
#[derive(Debug, Clone)]
pub struct ChessBoard {
    board: Board,
    history: GameState<String>,
    config: HistoryConfig,
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}

impl ChessBoard {
    /// Sets up the starting layout and records it as the initial state.
    pub fn new(config: HistoryConfig) -> Self {
        Self::with_board(Board::new(), config)
    }

    /// Starts from a custom layout, recorded as the initial state.
    ///
    /// [`reset`](Self::reset) still restores the standard layout.
    pub fn with_board(board: Board, config: HistoryConfig) -> Self {
        let mut history = GameState::with_policy(config.notation);
        history.set_initial_board_state(&board);
        ChessBoard {
            board,
            history,
            config,
        }
    }

    /// Returns the pieces.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &GameState<String> {
        &self.history
    }

    /// Returns the session configuration.
    pub fn config(&self) -> HistoryConfig {
        self.config
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.history.turn()
    }

    /// Returns the current full-move number.
    pub fn move_number(&self) -> u32 {
        self.history.move_number()
    }

    /// Returns the recorded notations, oldest first.
    pub fn moves(&self) -> &[String] {
        self.history.moves()
    }

    /// Looks up a recorded board snapshot by key text.
    pub fn board_state(&self, key: &str) -> Option<&str> {
        self.history.board_state(key).map(String::as_str)
    }

    /// Returns the snapshot taken after the most recently completed ply.
    pub fn current_board_state(&self) -> Option<&str> {
        self.history.current_board_state().map(String::as_str)
    }

    /// Plays the piece on `from` onto `to`.
    ///
    /// Only a piece of the side to move may be played. Whatever stands on
    /// `to` is captured. The recorded notation is composed from the move
    /// (`"e4"`, `"Nf3"`, `"exd5"`, ...). Nothing changes when an error is
    /// returned.
    pub fn play(&mut self, from: Square, to: Square) -> Result<HistoryKey, PlayError> {
        if from == to {
            return Err(PlayError::SameSquare(from));
        }
        let preview = self.board.preview_move(from, to)?;
        if preview.color != self.history.turn() {
            return Err(PlayError::OutOfTurn {
                square: from,
                piece_color: preview.color,
                turn: self.history.turn(),
            });
        }

        let notation = preview.notation();
        self.history.policy().parse(notation.as_str())?;

        self.board.move_piece(from, to)?;
        let key = self.history.submit_move(notation.as_str(), &self.board)?;
        tracing::info!(%from, %to, notation = %notation, %key, "played move");
        Ok(key)
    }

    /// Records `notation` against the board as it stands, without moving any
    /// piece.
    pub fn submit_move(&mut self, notation: &str) -> Result<HistoryKey, InvalidNotationError> {
        self.history.submit_move(notation, &self.board)
    }

    /// Records the board as it stands under `"start"` unless a start entry
    /// already exists; see [`GameState::set_initial_board_state`].
    pub fn set_initial_board_state(&mut self) -> bool {
        self.history.set_initial_board_state(&self.board)
    }

    /// Puts the starting layout back on the board.
    ///
    /// With [`HistoryConfig::reset_clears_history`] set, the move history is
    /// reset too and the fresh layout is recorded as the new initial state;
    /// otherwise the history is left as it was.
    pub fn reset(&mut self) {
        self.board.reset();
        if self.config.reset_clears_history {
            self.reset_history();
        }
    }

    /// Starts a new move history from the board as it stands now.
    pub fn reset_history(&mut self) {
        self.history.reset_history();
        self.history.set_initial_board_state(&self.board);
    }
}

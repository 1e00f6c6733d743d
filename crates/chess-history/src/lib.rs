//! Move and board-state history for the chess board.
//!
//! This crate provides:
//! - [`GameState`] - turn, move number, move list and board snapshots keyed by
//!   [`HistoryKey`]
//! - [`BoardRenderer`] - the seam through which snapshots are taken
//! - [`Board`] - the piece registry, which renders to a placement string
//! - [`ChessBoard`] - a board and its history driven together, as a page does
//! - [`SharedGameState`] - a history that several threads can submit to
//! - [`HistoryConfig`] - session settings loaded from TOML
//!
//! # Example
//!
//! ```
//! use chess_history::{ChessBoard, HistoryConfig};
//! use chess_core::Square;
//!
//! let mut board = ChessBoard::new(HistoryConfig::default());
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//! board.play(e2, e4).unwrap();
//!
//! assert_eq!(board.moves(), ["e4"]);
//! assert_eq!(board.current_board_state(), board.board_state("1w"));
//! ```

mod board;
mod config;
mod key;
mod render;
mod session;
mod shared;
mod state;

pub use board::{Board, BoardError, MoveOutcome};
pub use config::{ConfigError, HistoryConfig};
pub use key::{HistoryKey, KeyParseError};
pub use render::{BoardRenderer, FixedSnapshot};
pub use session::{ChessBoard, PlayError};
pub use shared::SharedGameState;
pub use state::GameState;

//! WebAssembly bindings for the chess board.
//!
//! This crate exposes a board and its move history to JavaScript. The page
//! keeps rendering squares and handling drags; it reports finished drops
//! through `play` and reads history back by key.
//!
//! # Usage
//!
//! ```javascript
//! import init, { ChessBoard } from 'chess-wasm';
//!
//! await init();
//!
//! const board = new ChessBoard();
//! board.play("e2", "e4");            // "1w"
//! board.play("e7", "e5");            // "1b"
//! console.log(board.moves());        // ["e4", "e5"]
//! console.log(board.getBoardState("1w"));
//! console.log(board.getCurrentBoardState());
//! ```

use chess_core::{NotationPolicy, Square};
use chess_history::{ChessBoard as Session, HistoryConfig};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// One recorded snapshot, as handed to JavaScript by `history()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub key: String,
    pub snapshot: String,
}

/// A chess board with move history that can be driven from JavaScript.
#[wasm_bindgen(js_name = ChessBoard)]
pub struct WasmChessBoard {
    inner: Session,
}

#[wasm_bindgen(js_class = ChessBoard)]
impl WasmChessBoard {
    /// Creates a board with the starting layout and default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        WasmChessBoard {
            inner: Session::default(),
        }
    }

    /// Creates a board with explicit settings.
    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(strict_notation: bool, reset_clears_history: bool) -> Self {
        let notation = if strict_notation {
            NotationPolicy::Strict
        } else {
            NotationPolicy::Loose
        };
        WasmChessBoard {
            inner: Session::new(HistoryConfig {
                notation,
                reset_clears_history,
            }),
        }
    }

    /// Plays the piece on `from` to `to` (both in algebraic notation) and
    /// returns the history key written, e.g. `"1w"`.
    ///
    /// Throws if the drop is not playable; the board is unchanged then.
    pub fn play(&mut self, from: &str, to: &str) -> Result<String, JsError> {
        self.try_play(from, to).map_err(|e| JsError::new(&e))
    }

    /// Records a notation without moving any piece and returns the key.
    #[wasm_bindgen(js_name = submitMove)]
    pub fn submit_move(&mut self, notation: &str) -> Result<String, JsError> {
        self.try_submit_move(notation).map_err(|e| JsError::new(&e))
    }

    /// Returns the snapshot recorded under `key` (`"start"`, `"1w"`, ...).
    #[wasm_bindgen(js_name = getBoardState)]
    pub fn get_board_state(&self, key: &str) -> Option<String> {
        self.inner.board_state(key).map(str::to_string)
    }

    /// Returns the snapshot taken after the most recently completed ply.
    #[wasm_bindgen(js_name = getCurrentBoardState)]
    pub fn get_current_board_state(&self) -> Option<String> {
        self.inner.current_board_state().map(str::to_string)
    }

    /// Records the current board under `"start"` if nothing is there yet.
    #[wasm_bindgen(js_name = setInitialBoardState)]
    pub fn set_initial_board_state(&mut self) -> bool {
        self.inner.set_initial_board_state()
    }

    /// Returns the board as an 8x8 array of `"color-piece"` labels, rank 8
    /// first.
    #[wasm_bindgen(js_name = getCurrentBoardStateArray)]
    pub fn get_current_board_state_array(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.inner.board().labels())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Returns every recorded snapshot as `{ key, snapshot }` objects in
    /// recording order.
    pub fn history(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.entries()).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Returns the label of the piece on `square` (e.g. `"black-knight"`), or
    /// null if the square is empty or not a square.
    #[wasm_bindgen(js_name = pieceAt)]
    pub fn piece_at(&self, square: &str) -> Option<String> {
        let sq = Square::from_algebraic(square)?;
        let (piece, color) = self.inner.board().piece_at(sq)?;
        Some(format!("{}-{}", color.name(), piece.name()))
    }

    /// Returns the side to move ("white" or "black").
    #[wasm_bindgen(getter)]
    pub fn turn(&self) -> String {
        self.inner.turn().name().to_string()
    }

    /// Returns the current full-move number.
    #[wasm_bindgen(getter, js_name = moveNumber)]
    pub fn move_number(&self) -> u32 {
        self.inner.move_number()
    }

    /// Returns the recorded notations, oldest first.
    pub fn moves(&self) -> Vec<String> {
        self.inner.moves().to_vec()
    }

    /// Puts the starting layout back (clearing history if so configured).
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Starts a new move history from the board as it stands.
    #[wasm_bindgen(js_name = resetHistory)]
    pub fn reset_history(&mut self) {
        self.inner.reset_history();
    }
}

impl WasmChessBoard {
    fn try_play(&mut self, from: &str, to: &str) -> Result<String, String> {
        let from = parse_square(from)?;
        let to = parse_square(to)?;
        self.inner
            .play(from, to)
            .map(|key| key.to_string())
            .map_err(|e| e.to_string())
    }

    fn try_submit_move(&mut self, notation: &str) -> Result<String, String> {
        self.inner
            .submit_move(notation)
            .map(|key| key.to_string())
            .map_err(|e| e.to_string())
    }

    fn entries(&self) -> Vec<HistoryEntry> {
        self.inner
            .history()
            .board_states()
            .map(|(key, snapshot)| HistoryEntry {
                key: key.to_string(),
                snapshot: snapshot.clone(),
            })
            .collect()
    }
}

fn parse_square(text: &str) -> Result<Square, String> {
    text.parse::<Square>().map_err(|e| e.to_string())
}

impl Default for WasmChessBoard {
    fn default() -> Self {
        Self::new()
    }
}

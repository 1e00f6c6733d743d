//! Browser-side checks, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use chess_wasm::WasmChessBoard;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn play_records_history() {
    let mut board = WasmChessBoard::new();
    assert_eq!(board.play("e2", "e4").ok(), Some("1w".to_string()));
    assert_eq!(board.moves(), vec!["e4"]);
    assert!(board.get_board_state("1w").is_some());
}

#[wasm_bindgen_test]
fn bad_notation_throws() {
    let mut board = WasmChessBoard::new();
    assert!(board.submit_move("9").is_err());
    assert!(board.moves().is_empty());
}

#[wasm_bindgen_test]
fn board_array_is_eight_by_eight() {
    let board = WasmChessBoard::new();
    let value = board.get_current_board_state_array().ok().unwrap();
    let rows: Vec<Vec<String>> = serde_wasm_bindgen::from_value(value).unwrap();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0][4], "black-king");
    assert_eq!(rows[7][4], "white-king");
}

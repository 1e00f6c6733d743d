//! Turn, move-number and board-state bookkeeping.
//!
//! [`GameState`] is the single place where a move becomes part of the game:
//! it checks the notation, appends it to the move list, stores a snapshot of
//! the board under `{move_number}{w|b}` and hands the turn over. Rejected
//! notations leave every field untouched.

use crate::key::HistoryKey;
use crate::render::BoardRenderer;
use chess_core::{Color, InvalidNotationError, NotationPolicy};
use std::collections::BTreeMap;

/// Move list and board-state history of one game.
///
/// `S` is the snapshot type of the [`BoardRenderer`] the moves are recorded
/// against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState<S> {
    /// Side to move.
    turn: Color,
    /// Full-move counter, starting at 1.
    move_number: u32,
    /// Accepted notations in the order they were submitted.
    moves: Vec<String>,
    /// Snapshots by key; iteration order is recording order.
    board_states: BTreeMap<HistoryKey, S>,
    /// Validation applied to submitted notations.
    policy: NotationPolicy,
}

impl<S> Default for GameState<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> GameState<S> {
    /// Creates an empty history with White to move and loose validation.
    pub fn new() -> Self {
        Self::with_policy(NotationPolicy::default())
    }

    /// Creates an empty history that validates notations with `policy`.
    pub fn with_policy(policy: NotationPolicy) -> Self {
        GameState {
            turn: Color::White,
            move_number: 1,
            moves: Vec::new(),
            board_states: BTreeMap::new(),
            policy,
        }
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the current full-move number.
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    /// Returns the accepted notations, oldest first.
    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    /// Returns the number of accepted plies.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Returns the notation validation policy.
    pub fn policy(&self) -> NotationPolicy {
        self.policy
    }

    /// Records one move.
    ///
    /// On success the notation is appended to the move list, the renderer's
    /// snapshot is stored under the key of the ply just played (which is
    /// returned), and the turn passes to the other side. The move number
    /// advances after Black's move.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidNotationError`] if `notation` fails the policy. No
    /// state changes in that case and the renderer is not consulted.
    pub fn submit_move<R>(
        &mut self,
        notation: &str,
        renderer: &R,
    ) -> Result<HistoryKey, InvalidNotationError>
    where
        R: BoardRenderer<Snapshot = S> + ?Sized,
    {
        if let Err(err) = self.policy.parse(notation) {
            tracing::warn!(notation, policy = %self.policy, "rejected move notation");
            return Err(err);
        }

        let key = HistoryKey::ply(self.move_number, self.turn);
        self.moves.push(notation.to_string());
        let previous = self.board_states.insert(key, renderer.snapshot());
        debug_assert!(previous.is_none(), "history key {key} written twice");

        match self.turn {
            Color::White => self.turn = Color::Black,
            Color::Black => {
                self.move_number += 1;
                self.turn = Color::White;
            }
        }

        tracing::debug!(notation, %key, turn = %self.turn, "recorded move");
        Ok(key)
    }

    /// Looks up a snapshot by the text form of its key (`"start"`, `"1w"`, ...).
    ///
    /// Unknown keys and strings that are not keys at all both return `None`.
    pub fn board_state(&self, key: &str) -> Option<&S> {
        let key = key.parse::<HistoryKey>().ok()?;
        self.board_states.get(&key)
    }

    /// Looks up a snapshot by key.
    pub fn board_state_at(&self, key: HistoryKey) -> Option<&S> {
        self.board_states.get(&key)
    }

    /// Returns the key of the most recently completed ply.
    ///
    /// With Black to move that is White's ply of the current move; with White
    /// to move it is Black's ply of the previous move, which does not exist
    /// before the first full move.
    pub fn current_key(&self) -> Option<HistoryKey> {
        match self.turn {
            Color::Black => Some(HistoryKey::ply(self.move_number, Color::White)),
            Color::White if self.move_number > 1 => {
                Some(HistoryKey::ply(self.move_number - 1, Color::Black))
            }
            Color::White => None,
        }
    }

    /// Returns the snapshot taken after the most recently completed ply.
    pub fn current_board_state(&self) -> Option<&S> {
        self.current_key().and_then(|key| self.board_states.get(&key))
    }

    /// Returns the snapshot recorded under `"start"`.
    pub fn initial_board_state(&self) -> Option<&S> {
        self.board_states.get(&HistoryKey::Start)
    }

    /// Records the initial layout under `"start"`.
    ///
    /// The start entry is written once; later calls keep the existing entry
    /// and return `false`.
    pub fn set_initial_board_state<R>(&mut self, renderer: &R) -> bool
    where
        R: BoardRenderer<Snapshot = S> + ?Sized,
    {
        if self.board_states.contains_key(&HistoryKey::Start) {
            tracing::warn!("initial board state already recorded; keeping the first one");
            return false;
        }
        self.board_states.insert(HistoryKey::Start, renderer.snapshot());
        true
    }

    /// Starts a new history: clears moves and snapshots (including `"start"`),
    /// White to move, move number 1. The policy is kept.
    pub fn reset_history(&mut self) {
        tracing::debug!(plies = self.moves.len(), "resetting move history");
        self.turn = Color::White;
        self.move_number = 1;
        self.moves.clear();
        self.board_states.clear();
    }

    /// Iterates over recorded keys in recording order.
    pub fn keys(&self) -> impl Iterator<Item = HistoryKey> + '_ {
        self.board_states.keys().copied()
    }

    /// Iterates over recorded snapshots in recording order.
    pub fn board_states(&self) -> impl Iterator<Item = (HistoryKey, &S)> + '_ {
        self.board_states.iter().map(|(key, snapshot)| (*key, snapshot))
    }
}

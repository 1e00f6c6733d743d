//! A [`GameState`] that several threads can submit moves to.

use crate::key::HistoryKey;
use crate::render::BoardRenderer;
use crate::state::GameState;
use chess_core::{Color, InvalidNotationError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Thread-safe handle to one game history.
///
/// Each submission runs under a single lock, so exactly one move is in flight
/// at a time and turn order stays strict however the callers interleave.
/// Clones share the same history.
#[derive(Debug)]
pub struct SharedGameState<S> {
    inner: Arc<Mutex<GameState<S>>>,
}

impl<S> Clone for SharedGameState<S> {
    fn clone(&self) -> Self {
        SharedGameState {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> Default for SharedGameState<S> {
    fn default() -> Self {
        Self::new(GameState::new())
    }
}

impl<S> SharedGameState<S> {
    /// Wraps an existing history.
    pub fn new(state: GameState<S>) -> Self {
        SharedGameState {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    // A panic while the lock is held cannot leave a half-recorded move:
    // GameState only mutates after validation has passed.
    fn lock(&self) -> MutexGuard<'_, GameState<S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records one move; see [`GameState::submit_move`].
    pub fn submit_move<R>(
        &self,
        notation: &str,
        renderer: &R,
    ) -> Result<HistoryKey, InvalidNotationError>
    where
        R: BoardRenderer<Snapshot = S> + ?Sized,
    {
        self.lock().submit_move(notation, renderer)
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.lock().turn()
    }

    /// Returns the current full-move number.
    pub fn move_number(&self) -> u32 {
        self.lock().move_number()
    }

    /// Returns a copy of the move list.
    pub fn moves(&self) -> Vec<String> {
        self.lock().moves().to_vec()
    }

    /// Runs `f` with the history locked.
    pub fn with<T>(&self, f: impl FnOnce(&GameState<S>) -> T) -> T {
        f(&self.lock())
    }

    /// Starts a new history; see [`GameState::reset_history`].
    pub fn reset_history(&self) {
        self.lock().reset_history();
    }
}

impl<S: Clone> SharedGameState<S> {
    /// Looks up a snapshot by key text; see [`GameState::board_state`].
    pub fn board_state(&self, key: &str) -> Option<S> {
        self.lock().board_state(key).cloned()
    }

    /// Returns the snapshot after the most recently completed ply.
    pub fn current_board_state(&self) -> Option<S> {
        self.lock().current_board_state().cloned()
    }
}

//! Board history with a move cursor ("time travel").
//!
//! The game owns a sequence of immutable board snapshots rather than a single
//! mutable board. The cursor selects which snapshot is live; everything the
//! renderer shows (board, next player, status line) derives from it. Playing
//! from an earlier snapshot truncates the abandoned future before appending,
//! the same branch-discard rule an undo/redo stack uses.

use super::rules::win::check_winner;
use super::types::{Board, GameStatus, Player, Square};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tic-tac-toe game state: snapshot history plus a cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Board snapshots; entry 0 is the empty starting board.
    history: Vec<Board>,
    /// Index of the snapshot currently displayed.
    cursor: usize,
}

impl Game {
    /// Creates a new game with an empty starting board.
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Returns the board at the cursor.
    pub fn board(&self) -> &Board {
        &self.history[self.cursor]
    }

    /// Returns the player to move at the cursor. X moves on even cursors.
    pub fn to_move(&self) -> Player {
        if self.cursor % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns the game status at the cursor.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.board())
    }

    /// Returns the status text shown above the board.
    pub fn status_line(&self) -> String {
        match self.status() {
            GameStatus::Won(player) => format!("Winner: {}", player),
            GameStatus::Draw => "Draw".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.to_move()),
        }
    }

    /// Number of snapshots in the history.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// A history of one snapshot means no moves have been played.
    pub fn is_empty(&self) -> bool {
        self.history.len() == 1
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Iterates over the stored snapshots from game start to latest.
    pub fn snapshots(&self) -> impl Iterator<Item = &Board> {
        self.history.iter()
    }

    /// Label for the history entry at `index`.
    pub fn move_label(index: usize) -> String {
        if index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", index)
        }
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// A new snapshot is appended and the cursor advances to it; any
    /// snapshots beyond the cursor are discarded first. Playing on an
    /// occupied square or on a board that already has a winner is a silent
    /// no-op, reported by the `false` return.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn play(&mut self, pos: Position) -> bool {
        let board = self.board();
        if check_winner(board).is_some() {
            debug!("rejected: board already won");
            return false;
        }
        if !board.is_empty(pos) {
            debug!("rejected: square occupied");
            return false;
        }

        let next = board.with(pos, Square::Occupied(self.to_move()));
        self.history.truncate(self.cursor + 1);
        self.history.push(next);
        self.cursor = self.history.len() - 1;

        #[cfg(debug_assertions)]
        {
            use super::invariants::{GameInvariants, InvariantSet};
            if let Err(violations) = GameInvariants::check_all(self) {
                panic!("invariant violated: {:?}", violations);
            }
        }

        true
    }

    /// Moves the cursor to an earlier or later snapshot.
    ///
    /// An out-of-range index is a silent no-op, reported by the `false`
    /// return.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.history.len() {
            debug!(index, "rejected: out of range");
            return false;
        }
        self.cursor = index;
        true
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is a draw: full with no winner.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty) && check_winner(board).is_none()
}

//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    const LINES: [[Position; 3]; 8] = [
        // Rows
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
        [
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
        ],
        [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
        // Columns
        [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
        ],
        [
            Position::TopCenter,
            Position::Center,
            Position::BottomCenter,
        ],
        [
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomRight,
        ],
        // Diagonals
        [Position::TopLeft, Position::Center, Position::BottomRight],
        [Position::TopRight, Position::Center, Position::BottomLeft],
    ];

    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::TopCenter, Square::Occupied(Player::X))
            .with(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_diagonal() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::O))
            .with(Position::Center, Square::Occupied(Player::O))
            .with(Position::BottomRight, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins() {
        const LINES: [[usize; 3]; 8] = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];
        for line in LINES {
            let mut board = Board::new();
            for idx in line {
                let pos = Position::from_index(idx).unwrap();
                board = board.with(pos, Square::Occupied(Player::O));
            }
            assert_eq!(check_winner(&board), Some(Player::O), "line {:?}", line);
        }
    }

    #[test]
    fn test_mixed_line_no_winner() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::TopCenter, Square::Occupied(Player::O))
            .with(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }
}

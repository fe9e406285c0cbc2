//! Alternating turn invariant: mark counts follow snapshot parity.

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: snapshot `k` holds `ceil(k / 2)` X marks and `floor(k / 2)` O
/// marks.
///
/// X moves first and turns alternate, so the mark counts of every snapshot
/// are fully determined by its index in the history.
pub struct AlternatingMarks;

impl Invariant<Game> for AlternatingMarks {
    fn holds(game: &Game) -> bool {
        game.snapshots().enumerate().all(|(k, board)| {
            board.count(Player::X) == k.div_ceil(2) && board.count(Player::O) == k / 2
        })
    }

    fn description() -> &'static str {
        "Snapshot k holds ceil(k/2) X marks and floor(k/2) O marks"
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::Position;
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingMarks::holds(&Game::new()));
    }

    #[test]
    fn test_alternation_across_history() {
        let mut game = Game::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ] {
            assert!(game.play(pos));
            assert!(AlternatingMarks::holds(&game));
        }
    }
}

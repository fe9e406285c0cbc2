//! Snapshot immutability invariant: marks never move between snapshots.

use super::super::{Game, Player, Position, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ by exactly one new mark.
///
/// Every square occupied in snapshot `k - 1` holds the same mark in snapshot
/// `k`, and exactly one empty square became occupied, by the player whose
/// turn it was. A stored snapshot changing retroactively would break this.
pub struct SnapshotImmutable;

impl Invariant<Game> for SnapshotImmutable {
    fn holds(game: &Game) -> bool {
        let snapshots: Vec<_> = game.snapshots().collect();
        for k in 1..snapshots.len() {
            let expected = if (k - 1) % 2 == 0 { Player::X } else { Player::O };
            let mut new_marks = 0;
            for pos in Position::ALL {
                match (snapshots[k - 1].get(pos), snapshots[k].get(pos)) {
                    (Square::Empty, Square::Occupied(player)) => {
                        if player != expected {
                            return false;
                        }
                        new_marks += 1;
                    }
                    (before, after) if before == after => {}
                    _ => return false,
                }
            }
            if new_marks != 1 {
                return false;
            }
        }
        true
    }

    fn description() -> &'static str {
        "Consecutive snapshots differ by exactly one new mark"
    }
}

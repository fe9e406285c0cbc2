mod history;
mod invariants;
mod position;
pub mod rules;
mod types;

pub use history::Game;
pub use invariants::{
    AlternatingMarks, CursorInBounds, GameInvariants, Invariant, InvariantSet,
    InvariantViolation, SnapshotImmutable,
};
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};

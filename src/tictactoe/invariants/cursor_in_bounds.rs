//! Cursor bounds invariant.

use super::super::Game;
use super::Invariant;

/// Invariant: the cursor always indexes a stored snapshot.
pub struct CursorInBounds;

impl Invariant<Game> for CursorInBounds {
    fn holds(game: &Game) -> bool {
        game.cursor() < game.len()
    }

    fn description() -> &'static str {
        "Cursor always indexes a stored snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::Position;
    use super::*;

    #[test]
    fn test_holds_through_jumps() {
        let mut game = Game::new();
        game.play(Position::Center);
        game.play(Position::TopLeft);
        assert!(CursorInBounds::holds(&game));

        game.jump_to(0);
        assert!(CursorInBounds::holds(&game));

        // Rejected jump leaves the cursor alone.
        assert!(!game.jump_to(99));
        assert!(CursorInBounds::holds(&game));
    }
}

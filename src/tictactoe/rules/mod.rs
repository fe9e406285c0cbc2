//! Pure rule functions for tic-tac-toe.

pub mod draw;
pub mod win;

//! Turn orchestration.
//!
//! `Game` ties the board, the turn order and the caller's dice together
//! and runs one player's turn at a time: jail resolution, rolling,
//! tile effects and the doubles rule.

mod orchestrator;
mod state;

pub use orchestrator::Game;
pub use state::{JailResolution, TurnOutcome, TurnState};

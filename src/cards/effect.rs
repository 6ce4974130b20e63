//! What a special card does when executed.

use serde::{Deserialize, Serialize};

/// Effect of a special card.
///
/// Position-changing variants only move the player; landing on the new
/// tile is resolved by the turn orchestrator, which re-runs the tile effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEffect {
    /// Release the holder from jail.
    GetOutOfJailFree,
    /// Send the holder to jail.
    GoToJail,
    /// Move directly to a position.
    AdvanceTo(usize),
    /// Move by a signed number of tiles, wrapping around the board.
    MoveBy(isize),
}

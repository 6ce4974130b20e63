//! Board tiles.

use serde::{Deserialize, Serialize};

/// What landing on a tile does to the player's turn state.
///
/// Money, property and card draws are handled by other systems; a tile
/// with no turn-level consequence is `Inert`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileEffect {
    #[default]
    Inert,
    /// Send the player to jail.
    GoToJail,
    /// Move the player directly to a position.
    AdvanceTo(usize),
    /// Move the player by a signed number of tiles, wrapping.
    MoveBy(isize),
}

/// A single board tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Human-readable name (for debugging/display).
    pub name: String,
    pub effect: TileEffect,
}

impl Tile {
    pub fn new(name: impl Into<String>, effect: TileEffect) -> Self {
        Self {
            name: name.into(),
            effect,
        }
    }

    /// A tile with no turn-level effect.
    pub fn inert(name: impl Into<String>) -> Self {
        Self::new(name, TileEffect::Inert)
    }
}

//! Board trait and the keys used to invoke board effects.
//!
//! The turn orchestrator never interprets tiles or cards itself. It asks
//! the board to run a strategy for a player and then inspects the player.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::CardKey;
use crate::core::{GameError, Player};

/// Which effect to run.
///
/// Textual form matches the legacy keys: `"tile"`, `"community:<name>"`,
/// `"chance:<name>"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKey {
    /// The effect of the tile at the player's current position.
    Tile,
    /// The effect of a special card.
    Card(CardKey),
}

impl fmt::Display for StrategyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKey::Tile => f.write_str("tile"),
            StrategyKey::Card(card) => write!(f, "{}", card),
        }
    }
}

impl FromStr for StrategyKey {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "tile" {
            Ok(StrategyKey::Tile)
        } else {
            s.parse().map(StrategyKey::Card)
        }
    }
}

impl From<CardKey> for StrategyKey {
    fn from(card: CardKey) -> Self {
        StrategyKey::Card(card)
    }
}

/// A game board.
///
/// ## Implementation Notes
///
/// - Every position in `0..size()` must map to exactly one effect
/// - `execute_strategy` may move the player, jail or release them, or
///   change their cards; it must not roll dice
pub trait Board {
    /// Number of tiles.
    fn size(&self) -> usize;

    /// Position of the jail tile.
    fn jail_position(&self) -> usize;

    /// Run the effect named by `key` for `player`.
    fn execute_strategy(&mut self, player: &mut Player, key: &StrategyKey);
}

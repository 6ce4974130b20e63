//! Board: tiles, card effects and the strategy dispatch the turn
//! orchestrator calls into.
//!
//! - `StrategyKey`: Names the effect to run (tile or card)
//! - `Board`: Trait the orchestrator depends on
//! - `GameBoard`: Default implementation with the classic layout

mod traits;
mod tile;
mod game_board;

pub use traits::{Board, StrategyKey};
pub use tile::{Tile, TileEffect};
pub use game_board::{GameBoard, STANDARD_GO_TO_JAIL_POSITION, STANDARD_JAIL_POSITION};

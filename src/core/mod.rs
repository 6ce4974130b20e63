//! Core types: players, dice, RNG, configuration, errors.
//!
//! These are the building blocks every other module uses. Nothing here
//! knows about the board layout or the turn algorithm.

pub mod player;
pub mod dice;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Player, PlayerId, Token};
pub use dice::{Dice, Roll, RollSource, ScriptedRolls, DIE_FACES};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, GameRules, PLAYER_COUNT_RANGE};
pub use error::GameError;

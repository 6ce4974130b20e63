//! # monopoly-turns
//!
//! Turn orchestration for a Monopoly-style board game.
//!
//! ## Design Principles
//!
//! 1. **Injected Dice**: One `Dice` value per game, owned by the caller and
//!    passed into every turn. No global state.
//!
//! 2. **Typed Dispatch**: Board effects are invoked through `StrategyKey`
//!    (tile or card), not free-form strings.
//!
//! 3. **Explicit Turn States**: A turn walks `AwaitingRoll`,
//!    `ResolvingTile`, then ends in `TurnComplete` or `JailEntry`.
//!
//! ## Modules
//!
//! - `core`: Players, dice, RNG, configuration, errors
//! - `cards`: Special card keys and effects
//! - `board`: Board trait, tiles, the standard board
//! - `turns`: Turn order
//! - `game`: The per-turn orchestrator

pub mod core;
pub mod cards;
pub mod board;
pub mod turns;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Dice, GameConfig, GameError, GameRng, GameRngState, GameRules, Player, PlayerId, Roll,
    RollSource, ScriptedRolls, Token,
};

pub use crate::cards::{CardEffect, CardKey, Deck};

pub use crate::board::{Board, GameBoard, StrategyKey, Tile, TileEffect};

pub use crate::turns::TurnManager;

pub use crate::game::{Game, JailResolution, TurnOutcome, TurnState};

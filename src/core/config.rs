//! Game configuration types.
//!
//! Callers describe a game up front:
//! - `GameRules`: Numeric thresholds for doubles and jail
//! - `GameConfig`: Player count, tokens and rules
//!
//! `GameConfig::validate` is the only place player count and token
//! assignment are checked; a `Game` is never built from an invalid config.

use std::ops::RangeInclusive;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::Token;

/// Allowed number of human players.
pub const PLAYER_COUNT_RANGE: RangeInclusive<usize> = 2..=4;

/// Turn rule thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    /// Consecutive doubles in one turn that send the player to jail.
    pub max_consecutive_doubles: u8,

    /// Failed jail turns after which release is unconditional.
    pub max_jail_turns: u8,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_consecutive_doubles: 3,
            max_jail_turns: 3,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of human players (2-4).
    pub player_count: usize,

    /// One token per player, in seating order.
    pub tokens: Vec<Token>,

    pub rules: GameRules,
}

impl GameConfig {
    /// Create a new game configuration with default rules and no tokens.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            tokens: Vec::new(),
            rules: GameRules::default(),
        }
    }

    /// Set the token assignment.
    #[must_use]
    pub fn with_tokens(mut self, tokens: impl IntoIterator<Item = Token>) -> Self {
        self.tokens = tokens.into_iter().collect();
        self
    }

    /// Override the rule thresholds.
    #[must_use]
    pub fn with_rules(mut self, rules: GameRules) -> Self {
        self.rules = rules;
        self
    }

    /// Check player count and token assignment.
    ///
    /// Extra tokens beyond `player_count` are ignored.
    pub fn validate(&self) -> Result<(), GameError> {
        if !PLAYER_COUNT_RANGE.contains(&self.player_count) {
            return Err(GameError::InvalidPlayerCount(self.player_count));
        }

        if self.tokens.len() < self.player_count {
            return Err(GameError::MissingTokens {
                players: self.player_count,
                tokens: self.tokens.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for &token in &self.tokens[..self.player_count] {
            if !seen.insert(token) {
                return Err(GameError::DuplicateToken(token));
            }
        }

        Ok(())
    }
}

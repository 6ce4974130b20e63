//! Shared helpers for integration tests.

#![allow(dead_code)]

use monopoly_turns::board::{Board, GameBoard, StrategyKey};
use monopoly_turns::core::{Dice, GameConfig, Player, Roll, ScriptedRolls, Token};
use monopoly_turns::game::Game;
use tracing_subscriber::{fmt, EnvFilter};

pub const TOKENS: [Token; 4] = [Token::Boot, Token::Car, Token::Dog, Token::Hat];

/// Initialize test logging. Safe to call from every test.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// Dice that produce exactly these rolls.
pub fn scripted(rolls: &[(u8, u8)]) -> Dice {
    Dice::new(ScriptedRolls::new(rolls.iter().map(|&(a, b)| Roll::new(a, b))))
}

/// Board that delegates to the standard board and records every key it runs.
#[derive(Clone, Debug, Default)]
pub struct RecordingBoard {
    pub inner: GameBoard,
    pub executed: Vec<(usize, StrategyKey)>,
}

impl Board for RecordingBoard {
    fn size(&self) -> usize {
        self.inner.size()
    }

    fn jail_position(&self) -> usize {
        self.inner.jail_position()
    }

    fn execute_strategy(&mut self, player: &mut Player, key: &StrategyKey) {
        self.executed.push((player.position(), key.clone()));
        self.inner.execute_strategy(player, key);
    }
}

/// Two-player game on a recording standard board.
pub fn recording_game() -> Game<RecordingBoard> {
    init_logging();
    let config = GameConfig::new(2).with_tokens(TOKENS);
    Game::from_config(config, RecordingBoard::default()).unwrap()
}

/// Two-player game on the standard board.
pub fn standard_game() -> Game {
    init_logging();
    Game::new(2, &TOKENS).unwrap()
}

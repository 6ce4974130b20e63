//! Error type shared by the whole crate.

use thiserror::Error;

use super::player::{PlayerId, Token};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Invalid number of players: {0} (expected 2 to 4)")]
    InvalidPlayerCount(usize),

    #[error("{players} players need {players} tokens, got {tokens}")]
    MissingTokens { players: usize, tokens: usize },

    #[error("Token {0} assigned to more than one player")]
    DuplicateToken(Token),

    #[error("Unknown strategy key: {0:?}")]
    UnknownStrategyKey(String),

    #[error("{0} is not in the game")]
    UnknownPlayer(PlayerId),

    #[error("No active players left")]
    NoActivePlayers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GameError::InvalidPlayerCount(5).to_string(),
            "Invalid number of players: 5 (expected 2 to 4)"
        );
        assert_eq!(
            GameError::MissingTokens { players: 3, tokens: 2 }.to_string(),
            "3 players need 3 tokens, got 2"
        );
        assert_eq!(
            GameError::UnknownPlayer(PlayerId::new(2)).to_string(),
            "Player 2 is not in the game"
        );
        assert_eq!(
            GameError::DuplicateToken(Token::Dog).to_string(),
            "Token Dog assigned to more than one player"
        );
    }
}

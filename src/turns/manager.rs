//! Turn order: the active players and whose turn it is.
//!
//! The `TurnManager` owns the players. It supports:
//! - Round-robin advancement
//! - Removing eliminated players without losing the turn pointer
//! - Lookup by `PlayerId`
//!
//! Players are kept in an `im::Vector` so snapshots of the whole table
//! clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{Player, PlayerId};

/// Ordered active players plus the current-turn pointer.
///
/// ## Usage
///
/// ```
/// use monopoly_turns::core::{Player, PlayerId, Token};
/// use monopoly_turns::turns::TurnManager;
///
/// let mut turns = TurnManager::new(vec![
///     Player::new(PlayerId::new(0), "Player1", Token::Boot),
///     Player::new(PlayerId::new(1), "Player2", Token::Car),
/// ]);
///
/// assert_eq!(turns.current_id(), Some(PlayerId::new(0)));
/// turns.next_player();
/// assert_eq!(turns.current_id(), Some(PlayerId::new(1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnManager {
    players: Vector<Player>,
    current: usize,
    turn_number: u32,
}

impl TurnManager {
    /// Create a turn manager. The first player in the list goes first.
    pub fn new(players: impl IntoIterator<Item = Player>) -> Self {
        Self {
            players: players.into_iter().collect(),
            current: 0,
            turn_number: 1,
        }
    }

    // === Current Player ===

    /// Player whose turn it is, or `None` once everyone has been removed.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    pub fn current_player_mut(&mut self) -> Option<&mut Player> {
        self.players.get_mut(self.current)
    }

    #[must_use]
    pub fn current_id(&self) -> Option<PlayerId> {
        self.current_player().map(Player::id)
    }

    /// Turn number (starts at 1, increments on every `next_player`).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    // === Advancement ===

    /// Pass the turn to the next active player, wrapping around.
    pub fn next_player(&mut self) {
        if self.players.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.players.len();
        self.turn_number += 1;
    }

    /// Remove a player from the turn order.
    ///
    /// If the removed player held the turn, the next player in order
    /// becomes current. Returns the removed player, or `None` if the id
    /// was not active.
    pub fn remove_player(&mut self, id: PlayerId) -> Option<Player> {
        let index = self.players.iter().position(|p| p.id() == id)?;
        let removed = self.players.remove(index);

        if index < self.current {
            self.current -= 1;
        }
        if self.current >= self.players.len() {
            self.current = 0;
        }

        info!(player = removed.name(), remaining = self.players.len(), "player removed");
        Some(removed)
    }

    // === Lookup ===

    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id() == id)
    }

    /// Active players in turn order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Token;

    fn manager(count: u8) -> TurnManager {
        let tokens = [Token::Boot, Token::Car, Token::Dog, Token::Hat];
        TurnManager::new((0..count).map(|i| {
            Player::new(PlayerId::new(i), format!("Player{}", i + 1), tokens[i as usize])
        }))
    }

    #[test]
    fn test_new() {
        let turns = manager(3);

        assert_eq!(turns.len(), 3);
        assert_eq!(turns.current_id(), Some(PlayerId::new(0)));
        assert_eq!(turns.turn_number(), 1);
    }

    #[test]
    fn test_next_player_wraps() {
        let mut turns = manager(3);

        turns.next_player();
        turns.next_player();
        assert_eq!(turns.current_id(), Some(PlayerId::new(2)));

        turns.next_player();
        assert_eq!(turns.current_id(), Some(PlayerId::new(0)));
        assert_eq!(turns.turn_number(), 4);
    }

    #[test]
    fn test_remove_earlier_player_keeps_current() {
        let mut turns = manager(4);
        turns.next_player();
        turns.next_player();

        let removed = turns.remove_player(PlayerId::new(0)).unwrap();

        assert_eq!(removed.id(), PlayerId::new(0));
        assert_eq!(turns.current_id(), Some(PlayerId::new(2)));
        assert_eq!(turns.len(), 3);
    }

    #[test]
    fn test_remove_current_player_advances() {
        let mut turns = manager(3);
        turns.next_player();

        turns.remove_player(PlayerId::new(1));

        assert_eq!(turns.current_id(), Some(PlayerId::new(2)));
    }

    #[test]
    fn test_remove_last_current_player_wraps() {
        let mut turns = manager(3);
        turns.next_player();
        turns.next_player();

        turns.remove_player(PlayerId::new(2));

        assert_eq!(turns.current_id(), Some(PlayerId::new(0)));
    }

    #[test]
    fn test_remove_later_player_keeps_current() {
        let mut turns = manager(3);

        turns.remove_player(PlayerId::new(2));

        assert_eq!(turns.current_id(), Some(PlayerId::new(0)));
        turns.next_player();
        assert_eq!(turns.current_id(), Some(PlayerId::new(1)));
        turns.next_player();
        assert_eq!(turns.current_id(), Some(PlayerId::new(0)));
    }

    #[test]
    fn test_remove_unknown_player() {
        let mut turns = manager(2);
        assert!(turns.remove_player(PlayerId::new(7)).is_none());
        assert_eq!(turns.len(), 2);
    }

    #[test]
    fn test_remove_everyone() {
        let mut turns = manager(2);

        turns.remove_player(PlayerId::new(0));
        turns.remove_player(PlayerId::new(1));

        assert!(turns.is_empty());
        assert!(turns.current_player().is_none());
        turns.next_player();
        assert!(turns.current_player().is_none());
    }

    #[test]
    fn test_get_mut() {
        let mut turns = manager(2);

        turns.get_mut(PlayerId::new(1)).unwrap().move_to(12);

        assert_eq!(turns.get(PlayerId::new(1)).unwrap().position(), 12);
        assert!(turns.get(PlayerId::new(5)).is_none());
    }

    #[test]
    fn test_serialization() {
        let mut turns = manager(3);
        turns.next_player();

        let json = serde_json::to_string(&turns).unwrap();
        let deserialized: TurnManager = serde_json::from_str(&json).unwrap();

        assert_eq!(turns, deserialized);
    }
}

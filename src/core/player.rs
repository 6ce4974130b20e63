//! Player identification and per-player turn state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier, stable for the whole game even after
//! other players are removed.
//!
//! ## Player
//!
//! Board position, jail status and held special cards. Turn logic mutates
//! these; purchases, trades and bankruptcy live elsewhere.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::dice::{Dice, Roll};
use crate::cards::CardKey;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Seat order for a new game: `PlayerId(0)` up to `player_count - 1`.
    ///
    /// Counts come from a validated `GameConfig`, so they fit in a `u8`.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count).map(|seat| Self(seat as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Board piece chosen by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    Boot,
    Battleship,
    Car,
    Cat,
    Dog,
    Hat,
    Thimble,
    Wheelbarrow,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// A participant's mutable game state.
///
/// `jail_turns` only means something while `in_jail` is true; every
/// transition out of jail resets it to zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    token: Token,
    position: usize,
    in_jail: bool,
    jail_turns: u8,
    /// Held special cards. Players rarely hold more than the two
    /// Get Out of Jail Free cards.
    cards: SmallVec<[CardKey; 2]>,
}

impl Player {
    /// Create a player on the starting tile.
    pub fn new(id: PlayerId, name: impl Into<String>, token: Token) -> Self {
        Self {
            id,
            name: name.into(),
            token,
            position: 0,
            in_jail: false,
            jail_turns: 0,
            cards: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn token(&self) -> Token {
        self.token
    }

    // === Movement ===

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Roll once and advance by the total, wrapping around the board.
    pub fn take_turn(&mut self, dice: &mut Dice, board_size: usize) -> Roll {
        let roll = dice.roll();
        self.advance(roll.total(), board_size);
        roll
    }

    /// Move forward `steps` tiles, wrapping around the board.
    pub fn advance(&mut self, steps: usize, board_size: usize) {
        self.position = (self.position + steps) % board_size;
    }

    /// Place the player directly on a tile.
    pub fn move_to(&mut self, position: usize) {
        self.position = position;
    }

    // === Jail ===

    #[must_use]
    pub fn is_in_jail(&self) -> bool {
        self.in_jail
    }

    #[must_use]
    pub fn jail_turns(&self) -> u8 {
        self.jail_turns
    }

    pub fn increment_jail_turns(&mut self) {
        self.jail_turns += 1;
    }

    /// Move to the jail tile and lock the player up.
    pub fn go_to_jail(&mut self, jail_position: usize) {
        self.position = jail_position;
        self.in_jail = true;
        self.jail_turns = 0;
    }

    /// Release from jail. Position is unchanged.
    pub fn release_from_jail(&mut self) {
        self.in_jail = false;
        self.jail_turns = 0;
    }

    // === Cards ===

    pub fn add_card(&mut self, card: CardKey) {
        self.cards.push(card);
    }

    #[must_use]
    pub fn has_card(&self, card: &CardKey) -> bool {
        self.cards.contains(card)
    }

    /// Remove one copy of a card.
    ///
    /// Returns true if the card was held.
    pub fn remove_card(&mut self, card: &CardKey) -> bool {
        if let Some(pos) = self.cards.iter().position(|c| c == card) {
            self.cards.remove(pos);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[CardKey] {
        &self.cards
    }
}

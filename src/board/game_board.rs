//! Default board: a tile ring plus a card-effect table.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::tile::{Tile, TileEffect};
use super::traits::{Board, StrategyKey};
use crate::cards::{CardEffect, CardKey, Deck};
use crate::core::Player;

/// Tile names of the classic 40-tile board, starting at Go.
const STANDARD_TILES: [&str; 40] = [
    "Go",
    "Mediterranean Avenue",
    "Community Chest",
    "Baltic Avenue",
    "Income Tax",
    "Reading Railroad",
    "Oriental Avenue",
    "Chance",
    "Vermont Avenue",
    "Connecticut Avenue",
    "Jail",
    "St. Charles Place",
    "Electric Company",
    "States Avenue",
    "Virginia Avenue",
    "Pennsylvania Railroad",
    "St. James Place",
    "Community Chest",
    "Tennessee Avenue",
    "New York Avenue",
    "Free Parking",
    "Kentucky Avenue",
    "Chance",
    "Indiana Avenue",
    "Illinois Avenue",
    "B. & O. Railroad",
    "Atlantic Avenue",
    "Ventnor Avenue",
    "Water Works",
    "Marvin Gardens",
    "Go To Jail",
    "Pacific Avenue",
    "North Carolina Avenue",
    "Community Chest",
    "Pennsylvania Avenue",
    "Short Line",
    "Chance",
    "Park Place",
    "Luxury Tax",
    "Boardwalk",
];

pub const STANDARD_JAIL_POSITION: usize = 10;
pub const STANDARD_GO_TO_JAIL_POSITION: usize = 30;

/// Board made of tiles indexed by position, with a table of card effects.
///
/// ## Usage
///
/// ```
/// use monopoly_turns::board::{Board, GameBoard, StrategyKey};
/// use monopoly_turns::core::{Player, PlayerId, Token};
///
/// let mut board = GameBoard::standard();
/// let mut player = Player::new(PlayerId::new(0), "Player1", Token::Hat);
///
/// player.move_to(30);
/// board.execute_strategy(&mut player, &StrategyKey::Tile);
///
/// assert!(player.is_in_jail());
/// assert_eq!(player.position(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct GameBoard {
    tiles: Vec<Tile>,
    jail_position: usize,
    card_effects: FxHashMap<CardKey, CardEffect>,
}

impl GameBoard {
    /// Create a board from tiles with no card effects registered.
    ///
    /// # Panics
    ///
    /// Panics if `tiles` is empty or `jail_position` is off the board.
    pub fn new(tiles: Vec<Tile>, jail_position: usize) -> Self {
        assert!(!tiles.is_empty(), "Board must have at least 1 tile");
        assert!(jail_position < tiles.len(), "Jail must be on the board");

        Self {
            tiles,
            jail_position,
            card_effects: FxHashMap::default(),
        }
    }

    /// The classic 40-tile layout.
    ///
    /// Jail sits at 10 and Go To Jail at 30. Both decks' Get Out of Jail
    /// Free, Go to Jail and Advance to Go cards are registered.
    #[must_use]
    pub fn standard() -> Self {
        let tiles = STANDARD_TILES
            .iter()
            .enumerate()
            .map(|(pos, &name)| {
                if pos == STANDARD_GO_TO_JAIL_POSITION {
                    Tile::new(name, TileEffect::GoToJail)
                } else {
                    Tile::inert(name)
                }
            })
            .collect();

        let mut board = Self::new(tiles, STANDARD_JAIL_POSITION);
        for deck in [Deck::Community, Deck::Chance] {
            board.register_card(CardKey::jail_free(deck), CardEffect::GetOutOfJailFree);
            board.register_card(CardKey::new(deck, "Go to Jail"), CardEffect::GoToJail);
            board.register_card(CardKey::new(deck, "Advance to Go"), CardEffect::AdvanceTo(0));
        }
        board.register_card(CardKey::chance("Go Back 3 Spaces"), CardEffect::MoveBy(-3));
        board
    }

    /// Replace the effect of the tile at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is off the board.
    #[must_use]
    pub fn with_tile_effect(mut self, position: usize, effect: TileEffect) -> Self {
        let size = self.tiles.len();
        let Some(tile) = self.tiles.get_mut(position) else {
            panic!("Tile {position} is off a board of {size} tiles");
        };
        tile.effect = effect;
        self
    }

    /// Add or replace a card effect.
    pub fn register_card(&mut self, card: CardKey, effect: CardEffect) {
        self.card_effects.insert(card, effect);
    }

    /// Add or replace a card effect (builder form).
    #[must_use]
    pub fn with_card(mut self, card: CardKey, effect: CardEffect) -> Self {
        self.register_card(card, effect);
        self
    }

    #[must_use]
    pub fn tile(&self, position: usize) -> Option<&Tile> {
        self.tiles.get(position)
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn card_effect(&self, card: &CardKey) -> Option<CardEffect> {
        self.card_effects.get(card).copied()
    }

    fn wrap(&self, position: usize, steps: isize) -> usize {
        let size = self.tiles.len() as isize;
        (position as isize + steps).rem_euclid(size) as usize
    }

    fn apply_tile(&self, player: &mut Player) {
        let position = player.position();
        let Some(tile) = self.tiles.get(position) else {
            warn!(player = player.name(), position, "player is off the board");
            return;
        };
        debug!(player = player.name(), position, tile = %tile.name, "landed on tile");

        match tile.effect {
            TileEffect::Inert => {}
            TileEffect::GoToJail => player.go_to_jail(self.jail_position),
            TileEffect::AdvanceTo(target) => player.move_to(target),
            TileEffect::MoveBy(steps) => player.move_to(self.wrap(position, steps)),
        }
    }

    fn apply_card(&self, player: &mut Player, card: &CardKey) {
        let Some(effect) = self.card_effect(card) else {
            warn!(player = player.name(), card = %card, "no effect registered for card");
            return;
        };
        debug!(player = player.name(), card = %card, ?effect, "executing card");

        match effect {
            CardEffect::GetOutOfJailFree => player.release_from_jail(),
            CardEffect::GoToJail => player.go_to_jail(self.jail_position),
            CardEffect::AdvanceTo(target) => player.move_to(target),
            CardEffect::MoveBy(steps) => player.move_to(self.wrap(player.position(), steps)),
        }
    }
}

impl Default for GameBoard {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board for GameBoard {
    fn size(&self) -> usize {
        self.tiles.len()
    }

    fn jail_position(&self) -> usize {
        self.jail_position
    }

    fn execute_strategy(&mut self, player: &mut Player, key: &StrategyKey) {
        match key {
            StrategyKey::Tile => self.apply_tile(player),
            StrategyKey::Card(card) => self.apply_card(player, card),
        }
    }
}

//! Card identity: which deck a card came from and its printed name.
//!
//! Keys render as `"<deck>:<name>"`, e.g. `community:Get Out of Jail Free`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// Name of the community chest jail-release card.
pub const COMMUNITY_JAIL_FREE: &str = "Get Out of Jail Free";

/// Name of the chance jail-release card. The printed chance card carries a
/// trailing period, so the two keys differ by more than their deck.
pub const CHANCE_JAIL_FREE: &str = "Get Out of Jail Free.";

/// Card deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Deck {
    Community,
    Chance,
}

impl Deck {
    /// Prefix used in the textual key form.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Deck::Community => "community",
            Deck::Chance => "chance",
        }
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Identifies a special card a player can hold or a board can execute.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardKey {
    pub deck: Deck,
    pub name: String,
}

impl CardKey {
    pub fn new(deck: Deck, name: impl Into<String>) -> Self {
        Self {
            deck,
            name: name.into(),
        }
    }

    pub fn community(name: impl Into<String>) -> Self {
        Self::new(Deck::Community, name)
    }

    pub fn chance(name: impl Into<String>) -> Self {
        Self::new(Deck::Chance, name)
    }

    #[must_use]
    pub fn community_jail_free() -> Self {
        Self::community(COMMUNITY_JAIL_FREE)
    }

    #[must_use]
    pub fn chance_jail_free() -> Self {
        Self::chance(CHANCE_JAIL_FREE)
    }

    /// The jail-release card for a deck.
    #[must_use]
    pub fn jail_free(deck: Deck) -> Self {
        match deck {
            Deck::Community => Self::community_jail_free(),
            Deck::Chance => Self::chance_jail_free(),
        }
    }
}

impl fmt::Display for CardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.deck, self.name)
    }
}

impl FromStr for CardKey {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || GameError::UnknownStrategyKey(s.to_string());

        let (prefix, name) = s.split_once(':').ok_or_else(unknown)?;
        let deck = match prefix {
            "community" => Deck::Community,
            "chance" => Deck::Chance,
            _ => return Err(unknown()),
        };
        if name.is_empty() {
            return Err(unknown());
        }

        Ok(Self::new(deck, name))
    }
}

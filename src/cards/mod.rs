//! Special cards: keys and effects.
//!
//! - `CardKey`: Deck plus printed name, held by players and used to look
//!   up a board's card effect
//! - `CardEffect`: What executing a card does

mod key;
mod effect;

pub use key::{CardKey, Deck, CHANCE_JAIL_FREE, COMMUNITY_JAIL_FREE};
pub use effect::CardEffect;

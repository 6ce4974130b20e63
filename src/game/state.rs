//! Turn state machine states and the results reported to callers.

use serde::{Deserialize, Serialize};

use crate::cards::Deck;
use crate::core::Roll;

/// Where a turn is in its control flow.
///
/// ```text
///              +--------------------------- doubles ---+
///              v                                        |
/// AwaitingRoll --roll--> ResolvingTile --settled--> (bookkeeping) --no doubles / triple--> TurnComplete
///                          |      ^
///                          +moved-+
///                          |
///                          +--jailed by tile--> JailEntry
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// The player is about to roll and move.
    AwaitingRoll,
    /// A tile effect is being resolved for the player at `landed_at`.
    ResolvingTile { roll: Roll, landed_at: usize },
    /// The turn is over; the doubles counter gets reset.
    TurnComplete,
    /// A tile effect jailed the player; the turn ends without resetting
    /// the doubles counter.
    JailEntry,
}

impl TurnState {
    /// True for the two terminal states.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, TurnState::TurnComplete | TurnState::JailEntry)
    }
}

/// How a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The player rolled `rolls` times and the turn ended normally.
    Completed { rolls: u8 },
    /// The player began in jail, failed to get out, and did not move.
    StayedInJail,
    /// A tile effect sent the player to jail mid-turn.
    SentToJailByTile { rolls: u8 },
    /// The player rolled the maximum number of consecutive doubles.
    TripleDoubles,
}

/// Result of one jail turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JailResolution {
    /// The player was not in jail; nothing happened.
    NotInJail,
    /// Released after serving the maximum number of jail turns.
    ServedMaximum,
    /// Played a Get Out of Jail Free card from this deck. The board's
    /// effect for that card decides whether the player is out.
    UsedCard(Deck),
    /// Released by rolling doubles.
    RolledDoubles(Roll),
    /// Failed to roll doubles; one more jail turn logged.
    StillJailed(Roll),
}

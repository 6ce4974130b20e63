//! Dice shared by every turn of a game.
//!
//! One `Dice` value exists per game. It is owned by whoever drives the game
//! loop and passed by `&mut` into each turn, so every player's turn sees the
//! same roll history and the same consecutive-doubles counter.
//!
//! The doubles counter is turn-scoped by convention only: [`Dice::roll`] never
//! touches it. The turn orchestrator increments and resets it.
//!
//! ```
//! use monopoly_turns::core::{Dice, Roll, ScriptedRolls};
//!
//! let mut dice = Dice::new(ScriptedRolls::new([Roll::new(3, 3), Roll::new(2, 5)]));
//!
//! assert!(dice.roll().is_double());
//! assert!(dice.is_double());
//! assert!(!dice.roll().is_double());
//! assert_eq!(dice.num_doubles(), 0);
//! ```

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::rng::{GameRng, GameRngState};

/// Number of faces on each die.
pub const DIE_FACES: u8 = 6;

/// Outcome of rolling two dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roll {
    pub first: u8,
    pub second: u8,
}

impl Roll {
    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// Sum of both dice.
    #[must_use]
    pub const fn total(self) -> usize {
        self.first as usize + self.second as usize
    }

    /// Both dice show the same face.
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.first == self.second
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.first, self.second)
    }
}

/// Anything that can produce dice outcomes.
pub trait RollSource: fmt::Debug {
    fn next_roll(&mut self) -> Roll;

    /// Position in the roll stream, for sources that can be restored.
    fn checkpoint(&self) -> Option<GameRngState> {
        None
    }
}

/// A fixed sequence of rolls, for replays and tests.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRolls {
    rolls: VecDeque<Roll>,
}

impl ScriptedRolls {
    pub fn new(rolls: impl IntoIterator<Item = Roll>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }
}

impl RollSource for ScriptedRolls {
    /// # Panics
    ///
    /// Panics when the script has run out of rolls.
    fn next_roll(&mut self) -> Roll {
        self.rolls
            .pop_front()
            .expect("scripted dice ran out of rolls")
    }
}

/// Two six-sided dice plus the consecutive-doubles counter for the
/// current turn.
#[derive(Debug)]
pub struct Dice {
    source: Box<dyn RollSource>,
    last_roll: Option<Roll>,
    num_doubles: u8,
    roll_count: u64,
}

impl Dice {
    /// Create dice drawing from the given source.
    pub fn new(source: impl RollSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            last_roll: None,
            num_doubles: 0,
            roll_count: 0,
        }
    }

    /// Create dice backed by a deterministic RNG.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Create seeded dice that continue from a saved RNG state.
    ///
    /// The doubles counter and roll count start at zero.
    #[must_use]
    pub fn from_rng_state(state: &GameRngState) -> Self {
        Self::new(GameRng::from_state(state))
    }

    /// Current RNG state, or `None` for sources that cannot be restored
    /// such as scripted rolls.
    #[must_use]
    pub fn rng_state(&self) -> Option<GameRngState> {
        self.source.checkpoint()
    }

    /// Roll both dice. Does not change the doubles counter.
    pub fn roll(&mut self) -> Roll {
        let roll = self.source.next_roll();
        self.last_roll = Some(roll);
        self.roll_count += 1;
        roll
    }

    /// Most recent roll, if any.
    #[must_use]
    pub fn last_roll(&self) -> Option<Roll> {
        self.last_roll
    }

    /// Whether the most recent roll was doubles. False before the first roll.
    #[must_use]
    pub fn is_double(&self) -> bool {
        self.last_roll.is_some_and(Roll::is_double)
    }

    #[must_use]
    pub fn num_doubles(&self) -> u8 {
        self.num_doubles
    }

    pub fn increment_num_doubles(&mut self) {
        self.num_doubles += 1;
    }

    pub fn reset_num_doubles(&mut self) {
        self.num_doubles = 0;
    }

    /// Total rolls made over the life of these dice.
    #[must_use]
    pub fn roll_count(&self) -> u64 {
        self.roll_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_total_and_double() {
        let roll = Roll::new(4, 4);
        assert_eq!(roll.total(), 8);
        assert!(roll.is_double());

        let roll = Roll::new(1, 6);
        assert_eq!(roll.total(), 7);
        assert!(!roll.is_double());
        assert_eq!(format!("{}", roll), "1+6");
    }

    #[test]
    fn test_scripted_rolls_in_order() {
        let mut dice = Dice::new(ScriptedRolls::new([Roll::new(1, 2), Roll::new(5, 5)]));

        assert_eq!(dice.roll(), Roll::new(1, 2));
        assert!(!dice.is_double());
        assert_eq!(dice.roll(), Roll::new(5, 5));
        assert!(dice.is_double());
        assert_eq!(dice.last_roll(), Some(Roll::new(5, 5)));
        assert_eq!(dice.roll_count(), 2);
    }

    #[test]
    #[should_panic(expected = "scripted dice ran out of rolls")]
    fn test_scripted_rolls_exhausted() {
        let mut dice = Dice::new(ScriptedRolls::new([]));
        dice.roll();
    }

    #[test]
    fn test_roll_leaves_doubles_counter_alone() {
        let mut dice = Dice::new(ScriptedRolls::new([Roll::new(2, 2), Roll::new(3, 3)]));

        dice.roll();
        dice.roll();

        assert_eq!(dice.num_doubles(), 0);
    }

    #[test]
    fn test_doubles_counter() {
        let mut dice = Dice::seeded(1);

        dice.increment_num_doubles();
        dice.increment_num_doubles();
        assert_eq!(dice.num_doubles(), 2);

        dice.reset_num_doubles();
        assert_eq!(dice.num_doubles(), 0);
    }

    #[test]
    fn test_no_roll_is_not_double() {
        let dice = Dice::seeded(1);
        assert!(!dice.is_double());
        assert_eq!(dice.last_roll(), None);
    }

    #[test]
    fn test_restored_dice_continue_stream() {
        let mut dice = Dice::seeded(11);
        for _ in 0..25 {
            dice.roll();
        }

        let state = dice.rng_state().unwrap();
        let expected: Vec<_> = (0..10).map(|_| dice.roll()).collect();

        let mut restored = Dice::from_rng_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.roll()).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.roll_count(), 10);
    }

    #[test]
    fn test_scripted_dice_have_no_rng_state() {
        let dice = Dice::new(ScriptedRolls::new([Roll::new(1, 1)]));
        assert_eq!(dice.rng_state(), None);
    }

    #[test]
    fn test_seeded_dice_in_range() {
        let mut dice = Dice::seeded(3);

        for _ in 0..200 {
            let roll = dice.roll();
            assert!((2..=12).contains(&roll.total()));
        }
    }
}

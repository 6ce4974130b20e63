//! The per-turn control algorithm.
//!
//! `Game::player_take_turn` runs one full turn for the current player:
//!
//! 1. If the player is in jail, try to get out (`jail_turn_logic`).
//! 2. Roll and move. Resolve the landing tile, and keep resolving while
//!    tile effects move the player somewhere new.
//! 3. On doubles, count them and roll again. The third consecutive double
//!    sends the player to jail.
//! 4. Reset the doubles counter.
//!
//! If a tile effect jails the player in step 2, the turn ends at once and
//! step 4 is skipped. The leftover doubles count carries into the next
//! turn (see `opening_state`).

use tracing::{debug, info};

use super::state::{JailResolution, TurnOutcome, TurnState};
use crate::board::{Board, GameBoard, StrategyKey};
use crate::cards::{CardKey, Deck};
use crate::core::{Dice, GameConfig, GameError, GameRules, Player, PlayerId, Token};
use crate::turns::TurnManager;

/// A game in progress: board, players and rule thresholds.
///
/// The dice are not part of the game. The caller owns one `Dice` and
/// passes it to every turn so all players share the same doubles counter.
///
/// ## Example
///
/// ```
/// use monopoly_turns::core::{Dice, Token};
/// use monopoly_turns::game::Game;
///
/// let mut game = Game::new(2, &[Token::Boot, Token::Car]).unwrap();
/// let mut dice = Dice::seeded(42);
///
/// game.player_take_turn(&mut dice).unwrap();
/// game.next_players_turn();
///
/// assert_eq!(game.turn_manager().turn_number(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Game<B = GameBoard> {
    board: B,
    turns: TurnManager,
    rules: GameRules,
}

impl Game<GameBoard> {
    /// Create a game on the standard board.
    ///
    /// Players are named `Player1..PlayerN` and take tokens in order.
    /// Fails unless `num_human_players` is 2 to 4 and enough distinct
    /// tokens are supplied.
    pub fn new(num_human_players: usize, tokens: &[Token]) -> Result<Self, GameError> {
        let config = GameConfig::new(num_human_players).with_tokens(tokens.iter().copied());
        Self::from_config(config, GameBoard::standard())
    }
}

impl<B: Board> Game<B> {
    /// Create a game from a validated configuration and a board.
    pub fn from_config(config: GameConfig, board: B) -> Result<Self, GameError> {
        config.validate()?;

        let players = PlayerId::all(config.player_count)
            .zip(config.tokens.iter().copied())
            .map(|(id, token)| Player::new(id, format!("Player{}", id.0 + 1), token));

        let turns = TurnManager::new(players);
        info!(players = turns.len(), "game created");

        Ok(Self {
            board,
            turns,
            rules: config.rules,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn turn_manager(&self) -> &TurnManager {
        &self.turns
    }

    pub fn turn_manager_mut(&mut self) -> &mut TurnManager {
        &mut self.turns
    }

    #[must_use]
    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    #[must_use]
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.turns.current_player()
    }

    // === Turn Flow ===

    /// Play one full turn for the current player.
    ///
    /// Fails only when no players remain.
    pub fn player_take_turn(&mut self, dice: &mut Dice) -> Result<TurnOutcome, GameError> {
        let id = self.turns.current_id().ok_or(GameError::NoActivePlayers)?;

        let mut still_jailed = false;
        if self.player(id)?.is_in_jail() {
            self.jail_turn_logic(id, dice)?;
            // A card effect decides for itself whether it frees the player.
            still_jailed = self.player(id)?.is_in_jail();
            if !still_jailed {
                dice.reset_num_doubles();
            }
        }

        let Game { board, turns, rules } = self;
        let player = turns.get_mut(id).ok_or(GameError::UnknownPlayer(id))?;
        info!(player = player.name(), position = player.position(), "turn started");

        let mut state = opening_state(still_jailed, dice.num_doubles());
        let mut rolls = 0u8;
        let mut tripled = false;

        while !state.is_terminal() {
            state = match state {
                TurnState::AwaitingRoll => {
                    let roll = player.take_turn(dice, board.size());
                    rolls += 1;
                    debug!(player = player.name(), %roll, position = player.position(), "rolled");
                    TurnState::ResolvingTile {
                        roll,
                        landed_at: player.position(),
                    }
                }

                TurnState::ResolvingTile { roll, landed_at } => {
                    board.execute_strategy(player, &StrategyKey::Tile);

                    if player.position() != landed_at {
                        if player.is_in_jail() {
                            TurnState::JailEntry
                        } else {
                            debug!(player = player.name(), from = landed_at, to = player.position(), "moved by tile");
                            TurnState::ResolvingTile {
                                roll,
                                landed_at: player.position(),
                            }
                        }
                    } else {
                        if roll.is_double() {
                            dice.increment_num_doubles();
                        }

                        if dice.num_doubles() >= rules.max_consecutive_doubles {
                            player.go_to_jail(board.jail_position());
                            tripled = true;
                            TurnState::TurnComplete
                        } else if roll.is_double() {
                            TurnState::AwaitingRoll
                        } else {
                            TurnState::TurnComplete
                        }
                    }
                }

                TurnState::TurnComplete | TurnState::JailEntry => state,
            };
        }

        let outcome = if state == TurnState::JailEntry {
            TurnOutcome::SentToJailByTile { rolls }
        } else {
            dice.reset_num_doubles();
            if tripled {
                TurnOutcome::TripleDoubles
            } else if still_jailed && rolls == 0 {
                TurnOutcome::StayedInJail
            } else {
                TurnOutcome::Completed { rolls }
            }
        };

        info!(player = player.name(), position = player.position(), ?outcome, "turn ended");
        Ok(outcome)
    }

    /// Pass the turn to the next active player.
    pub fn next_players_turn(&mut self) {
        self.turns.next_player();
    }

    /// One attempt by a jailed player to get out.
    ///
    /// Tried in order:
    /// 1. After the maximum number of jail turns, release unconditionally
    /// 2. Play a community chest Get Out of Jail Free card
    /// 3. Play a chance Get Out of Jail Free card
    /// 4. Roll once: doubles release, anything else logs a jail turn
    ///
    /// A released player does not move here; movement happens in
    /// `player_take_turn`.
    pub fn jail_turn_logic(&mut self, id: PlayerId, dice: &mut Dice) -> Result<JailResolution, GameError> {
        let Game { board, turns, rules } = self;
        let player = turns.get_mut(id).ok_or(GameError::UnknownPlayer(id))?;

        if !player.is_in_jail() {
            return Ok(JailResolution::NotInJail);
        }

        let held_card = [Deck::Community, Deck::Chance]
            .into_iter()
            .find(|&deck| player.has_card(&CardKey::jail_free(deck)));

        let resolution = if player.jail_turns() >= rules.max_jail_turns {
            player.release_from_jail();
            JailResolution::ServedMaximum
        } else if let Some(deck) = held_card {
            let card = CardKey::jail_free(deck);
            player.remove_card(&card);
            board.execute_strategy(player, &StrategyKey::Card(card));
            JailResolution::UsedCard(deck)
        } else {
            let roll = dice.roll();
            if roll.is_double() {
                player.release_from_jail();
                JailResolution::RolledDoubles(roll)
            } else {
                player.increment_jail_turns();
                JailResolution::StillJailed(roll)
            }
        };

        info!(player = player.name(), jail_turns = player.jail_turns(), ?resolution, "jail turn");
        Ok(resolution)
    }

    /// Remove an eliminated player from the turn order.
    pub fn remove_player(&mut self, id: PlayerId) -> Option<Player> {
        self.turns.remove_player(id)
    }

    fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.turns.get(id).ok_or(GameError::UnknownPlayer(id))
    }
}

/// First state of the movement phase.
///
/// With a clean doubles counter a free player rolls and a jailed player
/// stays put. A counter left over from a turn that ended in
/// [`TurnState::JailEntry`] shifts this by its value: a free player
/// then skips movement, and a jailed player moves if exactly one double
/// was carried over.
fn opening_state(still_jailed: bool, carried_doubles: u8) -> TurnState {
    let required = u8::from(still_jailed);
    if carried_doubles == required {
        TurnState::AwaitingRoll
    } else {
        TurnState::TurnComplete
    }
}

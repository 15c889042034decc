//! Round controller: deals, rotates turns until someone calls Janosch, gives everybody
//! else one final turn and scores the hands.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::action::TurnOutcome;
use crate::card::{HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::GameError;
use crate::input::HumanInput;
use crate::pile::Deck;
use crate::player::{Player, PlayerId};
use crate::score::{RoundSummary, caller_penalized, round_points};
use crate::state::{LastAction, RoundPhase};
use crate::turn::{Table, play_turn};

/// One dealt round. Owns the shared cards; players are lent in for every call.
#[derive(Clone, Debug)]
pub struct Round {
    table: Table,
    phase: RoundPhase,
    seats: usize,
    current: PlayerId,
    janosch_caller: Option<PlayerId>,
    sweep: VecDeque<PlayerId>,
    total_cards: usize,
    turns: usize,
}

impl Round {
    /// Seeds the discard pile from `deck` and deals a fresh hand to every player.
    pub fn deal(
        players: &mut [Player],
        deck: Deck,
        first_player: PlayerId,
        rng: StdRng,
    ) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
            return Err(GameError::InvalidConfiguration(
                "players must be between 2 and 8",
            ));
        }
        if first_player >= players.len() {
            return Err(GameError::InvalidPlayer(first_player));
        }
        if deck.len() <= players.len() * HAND_SIZE + 1 {
            return Err(GameError::InvalidConfiguration(
                "deck does not contain enough cards to deal",
            ));
        }

        let total_cards = deck.len();
        let mut round = Self {
            table: Table::new(deck, rng),
            phase: RoundPhase::Dealing,
            seats: players.len(),
            current: first_player,
            janosch_caller: None,
            sweep: VecDeque::new(),
            total_cards,
            turns: 0,
        };
        let seed = round.table.seed_discard()?;
        for player in players.iter_mut() {
            round.table.deal_hand(player)?;
        }
        debug!(%seed, players = players.len(), first = %players[first_player].name, "round dealt");
        round.phase = RoundPhase::NormalPlay;
        Ok(round)
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Seat whose turn comes next.
    pub fn current_player(&self) -> Option<PlayerId> {
        match self.phase {
            RoundPhase::NormalPlay => Some(self.current),
            RoundPhase::JanoschSweep => self.sweep.front().copied(),
            _ => None,
        }
    }

    pub fn janosch_caller(&self) -> Option<PlayerId> {
        self.janosch_caller
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn last_action(&self) -> LastAction {
        self.table.last_action()
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Plays the next turn and advances the state machine.
    pub fn step(
        &mut self,
        players: &mut [Player],
        input: &mut dyn HumanInput,
    ) -> Result<TurnOutcome, GameError> {
        if players.len() != self.seats {
            return Err(GameError::InvalidConfiguration(
                "player list changed during the round",
            ));
        }
        let (id, janosch_open) = match self.phase {
            RoundPhase::NormalPlay => (self.current, true),
            RoundPhase::JanoschSweep => match self.sweep.front() {
                Some(&id) => (id, false),
                None => return Err(GameError::BrokenInvariant("final turn queue is empty")),
            },
            RoundPhase::Dealing => return Err(GameError::BrokenInvariant("round was not dealt")),
            RoundPhase::Scoring | RoundPhase::Done => return Err(GameError::RoundOver),
        };

        let outcome = play_turn(&mut self.table, players, id, janosch_open, input)?;
        self.turns += 1;
        self.verify_conservation(players)?;

        match self.phase {
            RoundPhase::NormalPlay if matches!(outcome, TurnOutcome::JanoschCalled) => {
                self.janosch_caller = Some(id);
                self.sweep = (1..self.seats)
                    .map(|offset| (id + offset) % self.seats)
                    .collect();
                self.phase = RoundPhase::JanoschSweep;
                info!("Janosch called, proceeding with final turns for other players");
            }
            RoundPhase::NormalPlay => {
                self.current = (id + 1) % self.seats;
                if self.current == 0 {
                    debug!(turns = self.turns, "rotation complete");
                }
            }
            RoundPhase::JanoschSweep => {
                self.sweep.pop_front();
                if self.sweep.is_empty() {
                    self.phase = RoundPhase::Scoring;
                }
            }
            _ => {}
        }
        Ok(outcome)
    }

    /// Steps until the round is ready to be scored.
    pub fn play_out(
        &mut self,
        players: &mut [Player],
        input: &mut dyn HumanInput,
        max_turns: usize,
    ) -> Result<(), GameError> {
        while matches!(self.phase, RoundPhase::NormalPlay | RoundPhase::JanoschSweep) {
            if self.turns >= max_turns {
                return Err(GameError::TurnLimit(max_turns));
            }
            self.step(players, input)?;
        }
        Ok(())
    }

    /// Adds this round's points to every player. Only possible once, after the sweep.
    pub fn score(&mut self, players: &mut [Player]) -> Result<RoundSummary, GameError> {
        match self.phase {
            RoundPhase::Scoring => {}
            RoundPhase::Done => return Err(GameError::RoundOver),
            _ => return Err(GameError::RoundInProgress),
        }
        if players.len() != self.seats {
            return Err(GameError::InvalidConfiguration(
                "player list changed during the round",
            ));
        }
        let caller = self
            .janosch_caller
            .ok_or(GameError::BrokenInvariant("scoring without a Janosch caller"))?;

        let hand_values: Vec<u32> = players.iter().map(Player::hand_value).collect();
        let points = round_points(caller, &hand_values);
        let penalized = caller_penalized(caller, &hand_values);
        if penalized {
            info!(
                player = %players[caller].name,
                penalty = points[caller],
                "called Janosch without the lowest hand and is penalized"
            );
        } else {
            info!(player = %players[caller].name, "called Janosch and won the round");
        }
        for (idx, (player, &gained)) in players.iter_mut().zip(&points).enumerate() {
            player.score += gained;
            if idx != caller {
                info!(player = %player.name, points = gained, total = player.score, "scored");
            }
        }

        self.phase = RoundPhase::Done;
        Ok(RoundSummary {
            caller,
            hand_values,
            points,
            penalized,
        })
    }

    fn verify_conservation(&self, players: &[Player]) -> Result<(), GameError> {
        let in_hands: usize = players.iter().map(|player| player.hand.len()).sum();
        if self.table.card_count() + in_hands != self.total_cards {
            return Err(GameError::BrokenInvariant("card count changed during the round"));
        }
        Ok(())
    }
}

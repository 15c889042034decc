use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::agent::AgentStrategy;
use crate::card::{Card, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::GameError;
use crate::input::HumanInput;
use crate::pile::Deck;
use crate::player::{Player, PlayerId, PlayerKind};
use crate::round::Round;
use crate::score::{RoundSummary, match_loser};
use crate::visualize::render_scoreboard;

const DEFAULT_SEED: u64 = 0x5EED_5EED_5EED_5EED;

/// Safety cap on turns per round. Agent-only rounds finish far below it.
pub const DEFAULT_MAX_TURNS: usize = 10_000;

/// Configuration required to bootstrap a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u64,
    pub max_turns_per_round: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            max_turns_per_round: DEFAULT_MAX_TURNS,
        }
    }
}

/// A named seat and who plays it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seat {
    pub name: String,
    pub kind: PlayerKind,
}

impl Seat {
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Builder that enables deterministic deck injection for testing and simulations.
pub struct MatchBuilder {
    config: GameConfig,
    seats: Vec<Seat>,
    decks: VecDeque<Vec<Card>>,
    starting_scores: Option<Vec<u32>>,
    first_player: PlayerId,
}

impl MatchBuilder {
    /// Seats `names` in order. Names listed in `agents` are played by the default agent,
    /// everybody else is human.
    pub fn new<S: AsRef<str>>(names: &[S], agents: &[S]) -> Result<Self, GameError> {
        if let Some(stranger) = agents
            .iter()
            .find(|agent| !names.iter().any(|name| name.as_ref() == agent.as_ref()))
        {
            return Err(GameError::UnknownAgent(stranger.as_ref().to_string()));
        }
        let seats = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                let kind = if agents.iter().any(|agent| agent.as_ref() == name) {
                    PlayerKind::Agent(AgentStrategy::default())
                } else {
                    PlayerKind::Human
                };
                Seat::new(name, kind)
            })
            .collect();
        Self::from_seats(seats)
    }

    pub fn from_seats(seats: Vec<Seat>) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&seats.len()) {
            return Err(GameError::InvalidConfiguration(
                "players must be between 2 and 8",
            ));
        }
        for (idx, seat) in seats.iter().enumerate() {
            if seats[..idx].iter().any(|other| other.name == seat.name) {
                return Err(GameError::DuplicatePlayer(seat.name.clone()));
            }
        }
        Ok(Self {
            config: GameConfig::default(),
            seats,
            decks: VecDeque::new(),
            starting_scores: None,
            first_player: 0,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Queues a prepared deck for the next round that has none yet; the last card is
    /// drawn first. Rounds without a queued deck shuffle a fresh one.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.decks.push_back(deck);
        self
    }

    /// Resumes a match from existing cumulative scores.
    pub fn with_starting_scores(mut self, scores: Vec<u32>) -> Self {
        self.starting_scores = Some(scores);
        self
    }

    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.config.max_turns_per_round = max_turns;
        self
    }

    pub fn with_first_player(mut self, first_player: PlayerId) -> Self {
        self.first_player = first_player;
        self
    }

    /// Switches the named agent seat to another strategy.
    pub fn with_strategy(mut self, name: &str, strategy: AgentStrategy) -> Result<Self, GameError> {
        let seat = self
            .seats
            .iter_mut()
            .find(|seat| seat.name == name && !seat.kind.is_human())
            .ok_or_else(|| GameError::UnknownAgent(name.to_string()))?;
        seat.kind = PlayerKind::Agent(strategy);
        Ok(self)
    }

    pub fn build(self) -> Result<Match, GameError> {
        Match::from_builder(self)
    }
}

/// Janosch match: rounds are played until a cumulative score reaches the loss threshold.
pub struct Match {
    config: GameConfig,
    players: Vec<Player>,
    rng: StdRng,
    first_player: PlayerId,
    decks: VecDeque<Vec<Card>>,
    rounds_played: usize,
    loser: Option<PlayerId>,
}

impl Match {
    pub fn builder<S: AsRef<str>>(names: &[S], agents: &[S]) -> Result<MatchBuilder, GameError> {
        MatchBuilder::new(names, agents)
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Seat that opens the next round.
    pub fn first_player(&self) -> PlayerId {
        self.first_player
    }

    pub fn is_finished(&self) -> bool {
        self.loser.is_some()
    }

    pub fn loser(&self) -> Option<&Player> {
        self.loser.map(|idx| &self.players[idx])
    }

    /// Deals, plays and scores one round.
    pub fn play_round(&mut self, input: &mut dyn HumanInput) -> Result<RoundSummary, GameError> {
        if self.loser.is_some() {
            return Err(GameError::MatchOver);
        }
        let deck = match self.decks.pop_front() {
            Some(cards) => Deck::from_cards(cards),
            None => Deck::shuffled(&mut self.rng),
        };
        let round_rng = StdRng::seed_from_u64(self.rng.next_u64());
        let mut round = Round::deal(&mut self.players, deck, self.first_player, round_rng)?;
        self.rounds_played += 1;
        info!(
            round = self.rounds_played,
            first = %self.players[self.first_player].name,
            "round started"
        );

        round.play_out(&mut self.players, input, self.config.max_turns_per_round)?;
        let summary = round.score(&mut self.players)?;
        debug!("scoreboard\n{}", render_scoreboard(&self.players));

        self.first_player = (summary.caller + 1) % self.players.len();
        self.loser = match_loser(self.players.iter().map(|player| player.score));
        if let Some(player) = self.loser() {
            info!(
                player = %player.name,
                score = player.score,
                "has reached or exceeded 100 points and loses the game"
            );
        }
        Ok(summary)
    }

    /// Plays rounds until somebody loses and returns the loser's name.
    pub fn run_until_loss(&mut self, input: &mut dyn HumanInput) -> Result<String, GameError> {
        loop {
            if let Some(player) = self.loser() {
                return Ok(player.name.clone());
            }
            self.play_round(input)?;
        }
    }

    fn from_builder(builder: MatchBuilder) -> Result<Self, GameError> {
        let MatchBuilder {
            config,
            seats,
            decks,
            starting_scores,
            first_player,
        } = builder;
        if first_player >= seats.len() {
            return Err(GameError::InvalidPlayer(first_player));
        }
        if config.max_turns_per_round == 0 {
            return Err(GameError::InvalidConfiguration("turn limit must be positive"));
        }
        let mut players: Vec<Player> = seats
            .into_iter()
            .map(|seat| Player::new(seat.name, seat.kind))
            .collect();
        if let Some(scores) = starting_scores {
            if scores.len() != players.len() {
                return Err(GameError::InvalidConfiguration(
                    "starting scores must match the number of players",
                ));
            }
            for (player, score) in players.iter_mut().zip(scores) {
                player.score = score;
            }
        }
        let loser = match_loser(players.iter().map(|player| player.score));

        Ok(Self {
            config,
            players,
            rng: StdRng::seed_from_u64(config.seed),
            first_player,
            decks,
            rounds_played: 0,
            loser,
        })
    }
}

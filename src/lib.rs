//! Janosch card game engine: rule validation, turn sequencing and round scoring for human
//! and agent players.

pub mod action;
pub mod agent;
pub mod card;
pub mod combination;
pub mod error;
pub mod game;
pub mod human;
pub mod input;
pub mod pile;
pub mod player;
pub mod registry;
pub mod round;
pub mod score;
pub mod state;
pub mod turn;
pub mod visualize;

pub use crate::action::{ActionKind, DrawChoice, DrawSource, TurnAction, TurnOutcome};
pub use crate::agent::AgentStrategy;
pub use crate::card::{Card, Suit};
pub use crate::combination::classify;
pub use crate::error::{GameError, InvalidAction};
pub use crate::game::{GameConfig, Match, MatchBuilder, Seat};
pub use crate::human::ConsoleInput;
pub use crate::input::{HumanInput, ScriptedInput, Unattended};
pub use crate::pile::{Deck, DiscardPile};
pub use crate::player::{Hand, Player, PlayerId, PlayerKind};
pub use crate::registry::{label_for_kind, seat_from_spec};
pub use crate::round::Round;
pub use crate::score::{RoundSummary, match_loser, round_points};
pub use crate::state::{LastAction, PlayerPublicState, RoundPhase, TurnPhase, TurnView};
pub use crate::turn::{Table, draw_window};
pub use crate::visualize::{format_cards, render_scoreboard, render_view};

use serde::{Deserialize, Serialize};

use crate::action::TurnAction;
use crate::card::Card;
use crate::player::PlayerId;

/// Stage of the round state machine.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundPhase {
    Dealing,
    NormalPlay,
    JanoschSweep,
    Scoring,
    Done,
}

/// Stage of the active turn. Decision makers receive it with every request.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitJanoschDecision,
    PlayPhase,
    DrawPhase,
    JanoschCalled,
    TurnComplete,
}

/// The most recent play that still lies on the discard pile.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum LastAction {
    /// Nothing played since the pile was seeded.
    Start,
    Played(TurnAction),
}

/// Public portion of a player's state that all opponents may observe.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerPublicState {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
    pub hand_size: usize,
    pub is_human: bool,
    pub is_current: bool,
}

/// Snapshot handed to a human decision maker.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnView {
    pub phase: TurnPhase,
    pub self_player: PlayerId,
    pub name: String,
    pub hand: Vec<Card>,
    pub hand_value: u32,
    pub discard_top: Option<Card>,
    pub discard_count: usize,
    pub deck_count: usize,
    pub janosch_called: bool,
    /// Discard cards eligible to be drawn back, oldest first. Only filled in the draw phase.
    pub window: Vec<Card>,
    pub players: Vec<PlayerPublicState>,
}

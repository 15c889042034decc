use serde::{Deserialize, Serialize};

use crate::error::InvalidAction;

/// Shape of a legal play.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Single,
    Set,
    Straight,
}

/// A validated play: what kind of combination went down and how many cards it used.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TurnAction {
    pub kind: ActionKind,
    pub count: usize,
}

impl TurnAction {
    pub fn new(kind: ActionKind, count: usize) -> Self {
        Self { kind, count }
    }

    pub fn single() -> Self {
        Self::new(ActionKind::Single, 1)
    }
}

/// Where the replacement card comes from during the draw phase.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum DrawChoice {
    /// Oldest card of the eligible discard window.
    Earlier,
    /// Newest card of the eligible discard window. With a one-card window this is the
    /// only discard option.
    Later,
    /// Random card off the deck.
    Deck,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum DrawSource {
    DiscardPile,
    Deck,
}

/// Result of a single turn as seen by the round controller.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// A valid Janosch call; the player neither played nor drew.
    JanoschCalled,
    /// Cards were played and a replacement drawn.
    Completed { action: TurnAction, source: DrawSource },
    /// The selection was rejected; the hand is unchanged and nothing was drawn.
    PlayRejected(InvalidAction),
    /// Cards were played but the draw choice was rejected; the hand stays short.
    DrawAborted {
        action: TurnAction,
        reason: InvalidAction,
    },
}

impl TurnOutcome {
    pub fn action(&self) -> Option<TurnAction> {
        match self {
            TurnOutcome::Completed { action, .. } | TurnOutcome::DrawAborted { action, .. } => {
                Some(*action)
            }
            _ => None,
        }
    }
}

use thiserror::Error;

use crate::player::PlayerId;

/// Errors that abort the requested game operation.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("player index {0} is out of range")]
    InvalidPlayer(PlayerId),
    #[error("player name {0:?} is used more than once")]
    DuplicatePlayer(String),
    #[error("agent {0:?} is not one of the seated players")]
    UnknownAgent(String),
    #[error("round is over")]
    RoundOver,
    #[error("round cannot be scored before the final turns are played")]
    RoundInProgress,
    #[error("match is already over")]
    MatchOver,
    #[error("round exceeded the limit of {0} turns")]
    TurnLimit(usize),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("card bookkeeping broken: {0}")]
    BrokenInvariant(&'static str),
}

/// Rejected player input or moves. These only forfeit the affected part of a turn.
#[derive(Debug, Error, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InvalidAction {
    #[error("could not understand input {0:?}")]
    Unparseable(String),
    #[error("no cards selected")]
    EmptySelection,
    #[error("hand index {0} is out of range")]
    HandIndex(usize),
    #[error("hand index {0} selected more than once")]
    DuplicateIndex(usize),
    #[error("{count} cards form neither a set nor a straight")]
    InvalidMove { count: usize },
    #[error("hand value {value} is above the Janosch threshold")]
    InvalidJanoschCall { value: u32 },
    #[error("unknown draw option {0:?}")]
    DrawChoice(String),
    #[error("hand is empty")]
    EmptyHand,
}

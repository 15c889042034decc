//! Boundary between the turn engine and human decision makers.
//!
//! The engine asks one question per [`TurnPhase`] and parses the raw answer itself, so
//! every implementation of [`HumanInput`] only deals with text.

use std::collections::VecDeque;

use crate::action::DrawChoice;
use crate::error::InvalidAction;
use crate::state::{TurnPhase, TurnView};

/// Blocking source of answers for human seats.
///
/// `view.phase` tells which question is asked:
/// - `AwaitJanoschDecision`: `y` or `n`.
/// - `PlayPhase`: 1-based hand indices separated by whitespace.
/// - `DrawPhase`: `1`/`2` for a one-card window, `1`/`2`/`3` otherwise.
pub trait HumanInput {
    fn respond(&mut self, view: &TurnView) -> String;
}

/// Replays prepared answers in order. Answers run dry as empty lines.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(&mut self, answer: impl Into<String>) {
        self.answers.push_back(answer.into());
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl HumanInput for ScriptedInput {
    fn respond(&mut self, _view: &TurnView) -> String {
        self.answers.pop_front().unwrap_or_default()
    }
}

/// Input for matches without human seats. Any question it does get is answered blank.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unattended;

impl HumanInput for Unattended {
    fn respond(&mut self, _view: &TurnView) -> String {
        String::new()
    }
}

/// `y`/`yes` calls Janosch, `n`/`no` or a blank line declines.
pub fn parse_janosch(raw: &str) -> Result<bool, InvalidAction> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "" | "n" | "no" => Ok(false),
        other => Err(InvalidAction::Unparseable(other.to_string())),
    }
}

/// Parses 1-based hand indices into distinct 0-based indices below `hand_len`.
pub fn parse_selection(raw: &str, hand_len: usize) -> Result<Vec<usize>, InvalidAction> {
    let mut indices = Vec::new();
    for token in raw.split_whitespace() {
        let Ok(position) = token.parse::<usize>() else {
            return Err(InvalidAction::Unparseable(token.to_string()));
        };
        if position == 0 || position > hand_len {
            return Err(InvalidAction::HandIndex(position));
        }
        let index = position - 1;
        if indices.contains(&index) {
            return Err(InvalidAction::DuplicateIndex(position));
        }
        indices.push(index);
    }
    if indices.is_empty() {
        return Err(InvalidAction::EmptySelection);
    }
    Ok(indices)
}

/// Maps the draw prompt answer to a [`DrawChoice`] for a window of `window_len` cards.
pub fn parse_draw_choice(raw: &str, window_len: usize) -> Result<DrawChoice, InvalidAction> {
    let answer = raw.trim();
    match (window_len, answer) {
        (0, _) => Ok(DrawChoice::Deck),
        (1, "1") => Ok(DrawChoice::Later),
        (1, "2") => Ok(DrawChoice::Deck),
        (_, "1") if window_len > 1 => Ok(DrawChoice::Earlier),
        (_, "2") if window_len > 1 => Ok(DrawChoice::Later),
        (_, "3") if window_len > 1 => Ok(DrawChoice::Deck),
        _ => Err(InvalidAction::DrawChoice(answer.to_string())),
    }
}

/// Prompt line shown for the question asked in `view`.
pub fn prompt_for(view: &TurnView) -> String {
    match view.phase {
        TurnPhase::AwaitJanoschDecision => String::from("Janosch? y/n: "),
        TurnPhase::PlayPhase => {
            String::from("Enter indices of the cards to discard like 1 2 3: ")
        }
        TurnPhase::DrawPhase => match view.window.as_slice() {
            [card] => format!("Draw {card} (1) or random (2)?: "),
            [first, .., last] => {
                format!("Draw one of {first} or {last} (1 / 2) or random (3)?: ")
            }
            [] => String::from("Drawing from the deck."),
        },
        TurnPhase::JanoschCalled | TurnPhase::TurnComplete => String::new(),
    }
}

//! Scripted decision making for agent seats.

use serde::{Deserialize, Serialize};

use crate::card::{Card, JANOSCH_THRESHOLD};
use crate::combination::classify;
use crate::player::Hand;

/// Largest hand for which [`AgentStrategy::Combination`] enumerates every subset.
const MAX_ENUMERATED_HAND: usize = 12;

/// Deterministic agent policies.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum AgentStrategy {
    /// Discards the single most expensive card and takes the newest window card back
    /// when it is cheaper than the most expensive card left in hand.
    #[default]
    HighestCard,
    /// Scores every legal selection by the value it sheds and plays the best one.
    /// Draws like `HighestCard`.
    Combination,
}

impl AgentStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            AgentStrategy::HighestCard => "agent",
            AgentStrategy::Combination => "combo",
        }
    }

    /// Agents stop the round as soon as the rules allow it.
    pub fn wants_janosch(&self, hand: &Hand) -> bool {
        hand.value() <= JANOSCH_THRESHOLD
    }

    /// Hand indices to play this turn, or `None` when the hand is empty.
    pub fn select_discard(&self, hand: &Hand) -> Option<Vec<usize>> {
        match self {
            AgentStrategy::HighestCard => highest_card(hand).map(|idx| vec![idx]),
            AgentStrategy::Combination => best_combination(hand),
        }
    }

    /// Whether to take `candidate` from the discard pile instead of drawing blind.
    pub fn draws_from_pile(&self, hand: &Hand, candidate: Option<Card>) -> bool {
        match (candidate, hand.highest_value()) {
            (Some(card), Some(highest)) => card.value() < highest,
            _ => false,
        }
    }
}

/// Index of the first card with the highest value.
fn highest_card(hand: &Hand) -> Option<usize> {
    hand.cards()
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, u32)>, (idx, card)| match best {
            Some((_, value)) if value >= card.value() => best,
            _ => Some((idx, card.value())),
        })
        .map(|(idx, _)| idx)
}

fn best_combination(hand: &Hand) -> Option<Vec<usize>> {
    let cards = hand.cards();
    if cards.len() > MAX_ENUMERATED_HAND {
        return highest_card(hand).map(|idx| vec![idx]);
    }
    let mut best: Option<(u32, Vec<usize>)> = None;
    for mask in 1u32..(1 << cards.len()) {
        let indices: Vec<usize> = (0..cards.len()).filter(|i| mask & (1 << i) != 0).collect();
        let selection: Vec<Card> = indices.iter().map(|&i| cards[i]).collect();
        if classify(&selection).is_err() {
            continue;
        }
        let shed: u32 = selection.iter().map(Card::value).sum();
        if best.as_ref().is_none_or(|(value, _)| shed > *value) {
            best = Some((shed, indices));
        }
    }
    best.map(|(_, indices)| indices)
}

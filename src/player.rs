use serde::{Deserialize, Serialize};

use crate::agent::AgentStrategy;
use crate::card::Card;

/// Zero-based seat of a player within a match.
pub type PlayerId = usize;

/// Who takes the decisions for a seat.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Agent(AgentStrategy),
}

impl PlayerKind {
    pub fn is_human(&self) -> bool {
        matches!(self, PlayerKind::Human)
    }
}

/// Cards currently held by a player.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sum of the card values in the hand.
    pub fn value(&self) -> u32 {
        self.cards.iter().map(Card::value).sum()
    }

    /// Value of the most expensive card, if any.
    pub fn highest_value(&self) -> Option<u32> {
        self.cards.iter().map(Card::value).max()
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Orders the hand by rank (jokers first), then suit.
    pub fn sort(&mut self) {
        self.cards.sort_by_key(|card| (card.rank(), card.suit()));
    }

    /// Removes the cards at the given distinct, in-range indices and returns them in
    /// selection order.
    pub(crate) fn remove_many(&mut self, indices: &[usize]) -> Vec<Card> {
        let taken: Vec<Card> = indices.iter().map(|&idx| self.cards[idx]).collect();
        let mut sorted = indices.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        for idx in sorted {
            self.cards.remove(idx);
        }
        taken
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }
}

/// A seated player. Identity is the name; the score carries over between rounds.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub kind: PlayerKind,
    pub score: u32,
    pub hand: Hand,
}

impl Player {
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            score: 0,
            hand: Hand::default(),
        }
    }

    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, PlayerKind::Human)
    }

    pub fn agent(name: impl Into<String>, strategy: AgentStrategy) -> Self {
        Self::new(name, PlayerKind::Agent(strategy))
    }

    pub fn is_human(&self) -> bool {
        self.kind.is_human()
    }

    pub fn hand_value(&self) -> u32 {
        self.hand.value()
    }
}

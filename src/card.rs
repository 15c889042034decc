use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_RANK: u8 = 1;
pub const MAX_RANK: u8 = 13;
pub const JOKER_COUNT: usize = 2;
pub const DECK_SIZE: usize = 4 * MAX_RANK as usize + JOKER_COUNT;
pub const HAND_SIZE: usize = 5;
pub const JANOSCH_THRESHOLD: u32 = 15;
pub const JANOSCH_PENALTY: u32 = 30;
pub const LOSS_THRESHOLD: u32 = 100;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 8;

/// Card suit. Jokers carry their own suit and act as a wildcard in combinations.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
    Joker,
}

impl Suit {
    /// The four suits that carry ranked cards.
    pub const RANKED: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn symbol(&self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
            Suit::Joker => 'K',
        }
    }
}

/// A single playing card. Rank 0 is reserved for the joker.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    pub const JOKER: Card = Card {
        suit: Suit::Joker,
        rank: 0,
    };

    /// Creates a ranked card. `rank` must lie in `1..=13` and `suit` must not be the joker suit.
    pub const fn new(suit: Suit, rank: u8) -> Self {
        debug_assert!(rank >= MIN_RANK && rank <= MAX_RANK);
        debug_assert!(!matches!(suit, Suit::Joker));
        Self { suit, rank }
    }

    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Rank between 1 (ace) and 13 (king), or 0 for the joker.
    #[inline]
    pub fn rank(&self) -> u8 {
        self.rank
    }

    #[inline]
    pub fn is_joker(&self) -> bool {
        matches!(self.suit, Suit::Joker)
    }

    /// Penalty value of the card when it is still held at the end of a round.
    #[inline]
    pub fn value(&self) -> u32 {
        match self.rank {
            0 => 0,
            11..=13 => 10,
            rank => rank as u32,
        }
    }

    fn rank_label(&self) -> &'static str {
        const LABELS: [&str; 14] = [
            "Jo", "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        LABELS[self.rank as usize]
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            return f.write_str("Jo");
        }
        write!(f, "{}{}", self.rank_label(), self.suit.symbol())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid card notation: {0}")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses notations such as `7H`, `10D`, `QS`, `AC` and `Jo`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("jo") || trimmed.eq_ignore_ascii_case("joker") {
            return Ok(Card::JOKER);
        }
        let err = || ParseCardError(trimmed.to_string());
        let mut chars = trimmed.chars();
        let suit = match chars.next_back().map(|c| c.to_ascii_uppercase()) {
            Some('H') => Suit::Hearts,
            Some('D') => Suit::Diamonds,
            Some('C') => Suit::Clubs,
            Some('S') => Suit::Spades,
            _ => return Err(err()),
        };
        let rank = match chars.as_str().to_ascii_uppercase().as_str() {
            "A" => 1,
            "J" => 11,
            "Q" => 12,
            "K" => 13,
            other => other.parse::<u8>().map_err(|_| err())?,
        };
        if !(MIN_RANK..=MAX_RANK).contains(&rank) {
            return Err(err());
        }
        Ok(Card::new(suit, rank))
    }
}

/// Builds the full 54-card deck in deterministic order (unshuffled).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::RANKED {
        for rank in MIN_RANK..=MAX_RANK {
            deck.push(Card::new(suit, rank));
        }
    }
    deck.extend(std::iter::repeat(Card::JOKER).take(JOKER_COUNT));
    deck
}

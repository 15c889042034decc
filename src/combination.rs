//! Classification of a card selection into a legal play.
//!
//! Jokers are wildcards for both rank and suit. A selection made only of jokers counts as
//! a set.

use crate::action::{ActionKind, TurnAction};
use crate::card::Card;
use crate::error::InvalidAction;

/// Classifies `cards` as a single, set or straight. Selections that are none of these
/// are rejected with [`InvalidAction::InvalidMove`].
pub fn classify(cards: &[Card]) -> Result<TurnAction, InvalidAction> {
    match cards.len() {
        0 => Err(InvalidAction::EmptySelection),
        1 => Ok(TurnAction::single()),
        count if is_set(cards) => Ok(TurnAction::new(ActionKind::Set, count)),
        count if is_straight(cards) => Ok(TurnAction::new(ActionKind::Straight, count)),
        count => Err(InvalidAction::InvalidMove { count }),
    }
}

/// Two or more cards whose non-joker members share one rank.
pub fn is_set(cards: &[Card]) -> bool {
    if cards.len() < 2 {
        return false;
    }
    let mut ranks = cards.iter().filter(|c| !c.is_joker()).map(Card::rank);
    match ranks.next() {
        Some(first) => ranks.all(|rank| rank == first),
        None => true,
    }
}

/// Three or more cards of one suit whose non-joker ranks become consecutive once the
/// jokers fill the gaps. Input order does not matter.
pub fn is_straight(cards: &[Card]) -> bool {
    if cards.len() < 3 {
        return false;
    }
    let mut non_jokers: Vec<Card> = cards.iter().copied().filter(|c| !c.is_joker()).collect();
    let jokers = cards.len() - non_jokers.len();
    if let Some(first) = non_jokers.first() {
        let suit = first.suit();
        if non_jokers.iter().any(|c| c.suit() != suit) {
            return false;
        }
    }
    non_jokers.sort_by_key(Card::rank);

    let mut gaps = 0usize;
    for pair in non_jokers.windows(2) {
        let step = pair[1].rank() - pair[0].rank();
        if step == 0 {
            return false;
        }
        gaps += usize::from(step - 1);
    }
    gaps <= jokers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit::{Diamonds, Hearts, Spades};

    fn card(suit: crate::card::Suit, rank: u8) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn single_card_is_always_valid() {
        assert_eq!(classify(&[card(Hearts, 7)]), Ok(TurnAction::single()));
        assert_eq!(classify(&[Card::JOKER]), Ok(TurnAction::single()));
    }

    #[test]
    fn set_ignores_jokers() {
        let cards = [card(Hearts, 5), Card::JOKER, card(Spades, 5)];
        assert_eq!(classify(&cards), Ok(TurnAction::new(ActionKind::Set, 3)));
    }

    #[test]
    fn jokers_only_count_as_set() {
        let cards = [Card::JOKER, Card::JOKER];
        assert_eq!(classify(&cards), Ok(TurnAction::new(ActionKind::Set, 2)));
    }

    #[test]
    fn straight_needs_three_cards() {
        assert!(!is_straight(&[card(Spades, 3), card(Spades, 4)]));
        assert_eq!(
            classify(&[card(Spades, 3), card(Spades, 4)]),
            Err(InvalidAction::InvalidMove { count: 2 })
        );
    }

    #[test]
    fn two_jokers_fill_a_double_gap() {
        let cards = [card(Diamonds, 9), Card::JOKER, card(Diamonds, 12), Card::JOKER];
        assert_eq!(classify(&cards), Ok(TurnAction::new(ActionKind::Straight, 4)));
    }

    #[test]
    fn gap_larger_than_jokers_is_rejected() {
        let cards = [card(Diamonds, 2), Card::JOKER, card(Diamonds, 6)];
        assert!(!is_straight(&cards));
    }
}

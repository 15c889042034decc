#![allow(dead_code)]

use janosch::card::full_deck;
use janosch::{Card, Player};

pub fn card(notation: &str) -> Card {
    notation.parse().expect("valid card notation")
}

pub fn cards(notations: &[&str]) -> Vec<Card> {
    notations.iter().map(|n| card(n)).collect()
}

/// Builds a full deck whose draw order is: the discard seed, each hand in seating order,
/// then `draws`, then every remaining card in `full_deck` order.
pub fn stacked_deck(seed: &str, hands: &[&[&str]], draws: &[&str]) -> Vec<Card> {
    let mut order: Vec<Card> = std::iter::once(seed)
        .chain(hands.iter().flat_map(|hand| hand.iter().copied()))
        .chain(draws.iter().copied())
        .map(card)
        .collect();
    let mut rest = full_deck();
    for used in &order {
        let pos = rest
            .iter()
            .position(|c| c == used)
            .expect("card stacked more than once");
        rest.remove(pos);
    }
    order.extend(rest);
    // The deck is drawn from the back.
    order.reverse();
    order
}

pub fn hand_of(player: &Player) -> Vec<String> {
    player.hand.cards().iter().map(|c| c.to_string()).collect()
}

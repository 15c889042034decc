//! Property tests for the card model, the combination validator and agent-only rounds.

use janosch::card::{DECK_SIZE, full_deck};
use janosch::{
    ActionKind, AgentStrategy, Card, Deck, Hand, Player, Round, RoundPhase, Suit, Unattended,
    classify, round_points,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_by_key(|c| (c.suit(), c.rank()));
    cards
}

fn any_card() -> impl Strategy<Value = Card> {
    prop::sample::select(full_deck())
}

fn ranked_suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::RANKED.to_vec())
}

fn strategy() -> impl Strategy<Value = AgentStrategy> {
    prop_oneof![
        Just(AgentStrategy::HighestCard),
        Just(AgentStrategy::Combination),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A shuffled deck yields every card exactly once, then runs dry.
    #[test]
    fn prop_shuffled_deck_is_complete(seed in any::<u64>()) {
        let mut deck = Deck::shuffled(&mut StdRng::seed_from_u64(seed));
        let mut drawn = Vec::with_capacity(DECK_SIZE);
        while let Ok(card) = deck.draw() {
            drawn.push(card);
        }
        prop_assert_eq!(sorted(drawn), sorted(full_deck()));
        prop_assert!(deck.is_empty());
    }

    #[test]
    fn prop_hand_value_is_sum_of_cards(cards in prop::collection::vec(any_card(), 0..=8)) {
        let expected: u32 = cards.iter().map(|c| c.value()).sum();
        prop_assert_eq!(Hand::new(cards).value(), expected);
    }

    /// Consecutive same-suit runs stay straights with one card swapped for a joker,
    /// whatever order they are selected in.
    #[test]
    fn prop_run_with_joker_is_a_straight(
        (cards, len) in (ranked_suit(), 1u8..=11, 3u8..=5, 0usize..5)
            .prop_filter("run must stay within the ranks", |(_, start, len, _)| start + len - 1 <= 13)
            .prop_flat_map(|(suit, start, len, joker)| {
                let mut run: Vec<Card> = (start..start + len).map(|rank| Card::new(suit, rank)).collect();
                let slot = joker % run.len();
                run[slot] = Card::JOKER;
                (Just(run).prop_shuffle(), Just(usize::from(len)))
            }),
    ) {
        let action = classify(&cards);
        prop_assert!(action.is_ok(), "{:?} rejected", cards);
        if let Ok(action) = action {
            prop_assert_eq!(action.kind, ActionKind::Straight);
            prop_assert_eq!(action.count, len);
        }
    }

    /// Agent rounds keep every card in play and score by the round rule.
    #[test]
    fn prop_agent_rounds_conserve_cards(
        seed in any::<u64>(),
        strategies in prop::collection::vec(strategy(), 2..=8),
        first in 0usize..8,
    ) {
        let mut players: Vec<Player> = strategies
            .iter()
            .enumerate()
            .map(|(idx, &strategy)| Player::agent(format!("agent-{idx}"), strategy))
            .collect();
        let first = first % players.len();
        let mut rng = StdRng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        let mut round = Round::deal(&mut players, deck, first, rng)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        round
            .play_out(&mut players, &mut Unattended, 10_000)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(round.phase(), RoundPhase::Scoring);

        let in_hands: usize = players.iter().map(|p| p.hand.len()).sum();
        prop_assert_eq!(round.table().card_count() + in_hands, DECK_SIZE);

        let values: Vec<u32> = players.iter().map(Player::hand_value).collect();
        let summary = round
            .score(&mut players)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(&summary.hand_values, &values);
        prop_assert_eq!(&summary.points, &round_points(summary.caller, &values));
        let scores: Vec<u32> = players.iter().map(|p| p.score).collect();
        prop_assert_eq!(scores, summary.points);
    }
}

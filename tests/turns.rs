mod common;

use janosch::{
    ActionKind, Deck, DrawSource, GameError, InvalidAction, LastAction, Player, Round,
    RoundPhase, ScriptedInput, TurnAction, TurnOutcome, draw_window,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

use common::{card, cards, hand_of, stacked_deck};

// Ann sorts to 1:2C 2:5H 3:5D 4:QH 5:KS, Ben to 1:3S 2:7H 3:8H 4:9H 5:JD.
fn two_humans(draws: &[&str]) -> Result<(Round, Vec<Player>), GameError> {
    let mut players = vec![Player::human("Ann"), Player::human("Ben")];
    let deck = stacked_deck(
        "9C",
        &[
            &["5H", "5D", "KS", "QH", "2C"],
            &["7H", "8H", "9H", "JD", "3S"],
        ],
        draws,
    );
    let round = Round::deal(&mut players, Deck::from_cards(deck), 0, StdRng::seed_from_u64(3))?;
    Ok((round, players))
}

fn pile(round: &Round) -> Vec<String> {
    round
        .table()
        .discard_pile()
        .cards()
        .iter()
        .map(|c| c.to_string())
        .collect()
}

#[test]
fn window_follows_the_previous_batch() -> Result<(), GameError> {
    let (mut round, mut players) = two_humans(&["AS"])?;
    let mut input = ScriptedInput::new([
        "n", "2 3", "1", // Ann: set of fives, takes the seed back
        "n", "2 3 4", "2", // Ben: straight 7H-9H, takes the later five
        "n", "4", "1", // Ann: single KS, takes the oldest card of the straight
    ]);

    let outcome = round.step(&mut players, &mut input)?;
    assert_eq!(
        outcome,
        TurnOutcome::Completed {
            action: TurnAction::new(ActionKind::Set, 2),
            source: DrawSource::DiscardPile,
        }
    );
    assert_eq!(pile(&round), ["5H", "5D"]);
    assert_eq!(hand_of(&players[0]), ["2C", "QH", "KS", "9C"]);
    assert_eq!(
        round.last_action(),
        LastAction::Played(TurnAction::new(ActionKind::Set, 2))
    );

    let outcome = round.step(&mut players, &mut input)?;
    assert_eq!(
        outcome.action(),
        Some(TurnAction::new(ActionKind::Straight, 3))
    );
    assert_eq!(pile(&round), ["5H", "7H", "8H", "9H"]);
    assert_eq!(hand_of(&players[1]), ["3S", "JD", "5D"]);

    // Ann's hand is re-sorted to 2C 9C QH KS.
    let outcome = round.step(&mut players, &mut input)?;
    assert_eq!(
        outcome,
        TurnOutcome::Completed {
            action: TurnAction::single(),
            source: DrawSource::DiscardPile,
        }
    );
    assert_eq!(pile(&round), ["5H", "8H", "9H", "KS"]);
    assert_eq!(hand_of(&players[0]), ["2C", "9C", "QH", "7H"]);
    assert_eq!(input.remaining(), 0);
    Ok(())
}

#[test]
fn drawing_from_the_deck_leaves_the_window_alone() -> Result<(), GameError> {
    let (mut round, mut players) = two_humans(&["AS"])?;
    let mut input = ScriptedInput::new(["n", "5", "2"]);
    let outcome = round.step(&mut players, &mut input)?;
    assert_eq!(
        outcome,
        TurnOutcome::Completed {
            action: TurnAction::single(),
            source: DrawSource::Deck,
        }
    );
    assert_eq!(pile(&round), ["9C", "KS"]);
    assert!(players[0].hand.cards().contains(&card("AS")));
    assert_eq!(round.current_player(), Some(1));
    Ok(())
}

#[test]
fn invalid_combination_changes_nothing() -> Result<(), GameError> {
    let (mut round, mut players) = two_humans(&[])?;
    let before = players[0].hand.clone();
    let mut input = ScriptedInput::new(["n", "1 5"]);
    let outcome = round.step(&mut players, &mut input)?;
    assert_eq!(
        outcome,
        TurnOutcome::PlayRejected(InvalidAction::InvalidMove { count: 2 })
    );
    assert_eq!(players[0].hand, before);
    assert_eq!(pile(&round), ["9C"]);
    assert_eq!(round.last_action(), LastAction::Start);
    assert_eq!(round.current_player(), Some(1));
    Ok(())
}

#[test]
fn malformed_indices_forfeit_the_play() -> Result<(), GameError> {
    let (mut round, mut players) = two_humans(&[])?;
    let mut input = ScriptedInput::new(["n", "9", "n", "2 2", "n", "x"]);
    assert_eq!(
        round.step(&mut players, &mut input)?,
        TurnOutcome::PlayRejected(InvalidAction::HandIndex(9))
    );
    assert_eq!(
        round.step(&mut players, &mut input)?,
        TurnOutcome::PlayRejected(InvalidAction::DuplicateIndex(2))
    );
    assert_eq!(
        round.step(&mut players, &mut input)?,
        TurnOutcome::PlayRejected(InvalidAction::Unparseable("x".into()))
    );
    assert!(players.iter().all(|p| p.hand.len() == 5));
    assert_eq!(round.table().card_count() + 10, 54);
    Ok(())
}

#[test]
fn rejected_janosch_call_still_plays_and_draws() -> Result<(), GameError> {
    let (mut round, mut players) = two_humans(&["AS"])?;
    let mut input = ScriptedInput::new(["y", "5", "2"]);
    let outcome = round.step(&mut players, &mut input)?;
    assert!(matches!(outcome, TurnOutcome::Completed { .. }));
    assert_eq!(round.phase(), RoundPhase::NormalPlay);
    assert_eq!(round.janosch_caller(), None);
    assert_eq!(players[0].hand.len(), 5);
    Ok(())
}

#[test]
fn unreadable_draw_choice_leaves_hand_short() -> Result<(), GameError> {
    let (mut round, mut players) = two_humans(&[])?;
    let mut input = ScriptedInput::new(["n", "2 3", "7"]);
    let outcome = round.step(&mut players, &mut input)?;
    assert_eq!(
        outcome,
        TurnOutcome::DrawAborted {
            action: TurnAction::new(ActionKind::Set, 2),
            reason: InvalidAction::DrawChoice("7".into()),
        }
    );
    assert_eq!(players[0].hand.len(), 3);
    assert_eq!(pile(&round), ["9C", "5H", "5D"]);
    // Once Ben puts a single card down, his window is Ann's set.
    assert_eq!(draw_window(4, round.last_action(), 1), 1..3);
    Ok(())
}

#[test]
fn agents_take_back_cheaper_discards() -> Result<(), GameError> {
    let mut players = vec![
        Player::agent("Alf", Default::default()),
        Player::agent("Bea", Default::default()),
    ];
    let deck = stacked_deck(
        "AS",
        &[
            &["KH", "2C", "3C", "4C", "5C"],
            &["QD", "JD", "10D", "9D", "8D"],
        ],
        &["2H", "3H"],
    );
    let mut round = Round::deal(&mut players, Deck::from_cards(deck), 0, StdRng::seed_from_u64(5))?;
    let mut input = janosch::Unattended;

    // Alf sheds KH and takes the ace back, Bea sheds 10D and ignores KH.
    assert_eq!(
        round.step(&mut players, &mut input)?,
        TurnOutcome::Completed {
            action: TurnAction::single(),
            source: DrawSource::DiscardPile,
        }
    );
    assert_eq!(players[0].hand_value(), 15);
    assert_eq!(
        round.step(&mut players, &mut input)?,
        TurnOutcome::Completed {
            action: TurnAction::single(),
            source: DrawSource::Deck,
        }
    );
    assert_eq!(pile(&round), ["KH", "10D"]);

    assert_eq!(round.step(&mut players, &mut input)?, TurnOutcome::JanoschCalled);
    assert_eq!(round.phase(), RoundPhase::JanoschSweep);
    assert_eq!(round.current_player(), Some(1));

    round.step(&mut players, &mut input)?;
    assert_eq!(round.phase(), RoundPhase::Scoring);
    assert_eq!(hand_of(&players[1]), ["2H", "8D", "9D", "QD", "3H"]);

    let summary = round.score(&mut players)?;
    assert_eq!(summary.caller, 0);
    assert!(!summary.penalized);
    assert_eq!(summary.points, vec![0, 32]);
    Ok(())
}

#[test]
fn empty_deck_reshuffles_the_discard_pile() -> Result<(), GameError> {
    let mut players = vec![
        Player::agent("Alf", Default::default()),
        Player::agent("Bea", Default::default()),
    ];
    // Seed, two hands and a single spare card, drawn from the back.
    let mut order = cards(&[
        "KS", "2C", "3C", "4C", "5C", "6C", "7D", "8D", "9D", "QD", "KD", "AH",
    ]);
    order.reverse();
    let mut round = Round::deal(&mut players, Deck::from_cards(order), 0, StdRng::seed_from_u64(9))?;
    let mut input = janosch::Unattended;

    round.step(&mut players, &mut input)?;
    assert!(round.table().deck().is_empty());
    assert_eq!(players[0].hand_value(), 15);

    let outcome = round.step(&mut players, &mut input)?;
    assert!(matches!(outcome, TurnOutcome::Completed { .. }));
    assert_eq!(round.last_action(), LastAction::Start);
    assert_eq!(players[1].hand.len(), 5);
    assert_eq!(round.table().card_count(), 2);
    assert!(round.table().discard_pile().len() <= 1);
    Ok(())
}

//! Turn engine: an optional Janosch call, then a play phase followed by a draw phase.
//!
//! After a play, the cards eligible to be drawn back form a window on the discard pile:
//! the batch the previous turn discarded, which lies directly beneath the batch just
//! played. Right after the pile is seeded there is no previous batch and the window is the
//! single seed card.

use std::ops::Range;

use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::action::{ActionKind, DrawChoice, DrawSource, TurnAction, TurnOutcome};
use crate::agent::AgentStrategy;
use crate::card::{Card, HAND_SIZE, JANOSCH_THRESHOLD};
use crate::combination::classify;
use crate::error::{GameError, InvalidAction};
use crate::input::{HumanInput, parse_draw_choice, parse_janosch, parse_selection};
use crate::pile::{Deck, DiscardPile};
use crate::player::{Player, PlayerId, PlayerKind};
use crate::state::{LastAction, PlayerPublicState, TurnPhase, TurnView};
use crate::visualize::describe_action;

/// Shared cards of a round: the deck, the discard pile and what was played last.
#[derive(Clone, Debug)]
pub struct Table {
    deck: Deck,
    discard: DiscardPile,
    last_action: LastAction,
    rng: StdRng,
}

impl Table {
    pub(crate) fn new(deck: Deck, rng: StdRng) -> Self {
        Self {
            deck,
            discard: DiscardPile::new(),
            last_action: LastAction::Start,
            rng,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn discard_pile(&self) -> &DiscardPile {
        &self.discard
    }

    pub fn last_action(&self) -> LastAction {
        self.last_action
    }

    /// Cards on the table, excluding hands.
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.discard.len()
    }

    /// Turns the top deck card face up as the first discard.
    pub(crate) fn seed_discard(&mut self) -> Result<Card, GameError> {
        let card = self.deck.draw()?;
        self.discard.push(card);
        self.last_action = LastAction::Start;
        Ok(card)
    }

    pub(crate) fn deal_hand(&mut self, player: &mut Player) -> Result<(), GameError> {
        player.hand.clear();
        for _ in 0..HAND_SIZE {
            player.hand.add(self.deck.draw()?);
        }
        Ok(())
    }

    /// Eligible window for a turn whose own `batch` cards sit on top of the pile.
    pub fn window(&self, batch: usize) -> Range<usize> {
        draw_window(self.discard.len(), self.last_action, batch)
    }

    /// Refills an exhausted deck from the discard pile and reseeds the pile.
    ///
    /// Returns how many cards of the current batch are still on the pile: `batch` when
    /// nothing happened, 0 after a reshuffle.
    fn ensure_deck(&mut self, batch: usize) -> Result<usize, GameError> {
        if !self.deck.is_empty() {
            return Ok(batch);
        }
        let cards = self.discard.drain_all();
        info!(cards = cards.len(), "deck is empty, reshuffling the discard pile");
        self.deck.refill(cards, &mut self.rng);
        let seed = self.seed_discard()?;
        debug!(%seed, "discard pile reseeded");
        Ok(0)
    }

    /// Remembers a play for the next window, unless its cards went back into the deck.
    fn record(&mut self, action: TurnAction, batch: usize) {
        if batch > 0 {
            self.last_action = LastAction::Played(action);
        }
    }
}

/// Range of pile positions eligible for a draw-back.
///
/// `pile_len` counts the whole pile including the `batch` cards discarded this turn.
pub fn draw_window(pile_len: usize, last: LastAction, batch: usize) -> Range<usize> {
    let end = pile_len.saturating_sub(batch);
    let span = match last {
        LastAction::Start => 1,
        LastAction::Played(action) => action.count,
    };
    end.saturating_sub(span)..end
}

/// Rejects a Janosch call from a hand above the threshold.
pub fn check_janosch(player: &Player) -> Result<(), InvalidAction> {
    let value = player.hand_value();
    if value > JANOSCH_THRESHOLD {
        return Err(InvalidAction::InvalidJanoschCall { value });
    }
    Ok(())
}

/// Plays one full turn for `id`. Rejected input only forfeits part of the turn and is
/// reported in the outcome; errors are reserved for broken card bookkeeping.
pub(crate) fn play_turn(
    table: &mut Table,
    players: &mut [Player],
    id: PlayerId,
    janosch_open: bool,
    input: &mut dyn HumanInput,
) -> Result<TurnOutcome, GameError> {
    let player = players.get_mut(id).ok_or(GameError::InvalidPlayer(id))?;
    player.hand.sort();
    let kind = player.kind;
    match kind {
        PlayerKind::Human => human_turn(table, players, id, janosch_open, input),
        PlayerKind::Agent(strategy) => agent_turn(table, &mut players[id], strategy, janosch_open),
    }
}

fn human_turn(
    table: &mut Table,
    players: &mut [Player],
    id: PlayerId,
    janosch_open: bool,
    input: &mut dyn HumanInput,
) -> Result<TurnOutcome, GameError> {
    if janosch_open {
        let view = turn_view(table, players, id, TurnPhase::AwaitJanoschDecision, janosch_open, Vec::new());
        match parse_janosch(&input.respond(&view)) {
            Ok(true) => match check_janosch(&players[id]) {
                Ok(()) => return Ok(announce_janosch(&players[id])),
                Err(reason) => {
                    warn!(player = %players[id].name, %reason, "Janosch call invalid, playing on")
                }
            },
            Ok(false) => {}
            Err(reason) => warn!(player = %players[id].name, %reason, "no Janosch call"),
        }
    }

    let view = turn_view(table, players, id, TurnPhase::PlayPhase, janosch_open, Vec::new());
    let answer = input.respond(&view);
    let player = &mut players[id];
    let action = match parse_selection(&answer, player.hand.len())
        .and_then(|selection| play_selection(table, player, &selection))
    {
        Ok(action) => action,
        Err(reason) => return Ok(reject_play(player, reason)),
    };

    let batch = table.ensure_deck(action.count)?;
    let window = table.window(batch);
    let choice = if window.is_empty() {
        DrawChoice::Deck
    } else {
        let cards = table.discard.cards()[window.clone()].to_vec();
        let view = turn_view(table, players, id, TurnPhase::DrawPhase, janosch_open, cards);
        match parse_draw_choice(&input.respond(&view), window.len()) {
            Ok(choice) => choice,
            Err(reason) => {
                warn!(player = %players[id].name, %reason, "invalid draw input, nothing drawn");
                table.record(action, batch);
                return Ok(TurnOutcome::DrawAborted { action, reason });
            }
        }
    };
    let source = draw(table, &mut players[id], window, choice)?;
    table.record(action, batch);
    Ok(TurnOutcome::Completed { action, source })
}

fn agent_turn(
    table: &mut Table,
    player: &mut Player,
    strategy: AgentStrategy,
    janosch_open: bool,
) -> Result<TurnOutcome, GameError> {
    if janosch_open && strategy.wants_janosch(&player.hand) && check_janosch(player).is_ok() {
        return Ok(announce_janosch(player));
    }
    let Some(selection) = strategy.select_discard(&player.hand) else {
        return Ok(reject_play(player, InvalidAction::EmptyHand));
    };
    let action = match play_selection(table, player, &selection) {
        Ok(action) => action,
        Err(reason) => return Ok(reject_play(player, reason)),
    };

    let batch = table.ensure_deck(action.count)?;
    let window = table.window(batch);
    let candidate = if window.is_empty() {
        None
    } else {
        table.discard.get(window.end - 1)
    };
    let choice = if strategy.draws_from_pile(&player.hand, candidate) {
        DrawChoice::Later
    } else {
        DrawChoice::Deck
    };
    let source = draw(table, player, window, choice)?;
    table.record(action, batch);
    Ok(TurnOutcome::Completed { action, source })
}

/// Validates the selected hand cards and moves them onto the discard pile.
/// Nothing changes when the selection is rejected.
fn play_selection(
    table: &mut Table,
    player: &mut Player,
    selection: &[usize],
) -> Result<TurnAction, InvalidAction> {
    if player.hand.is_empty() {
        return Err(InvalidAction::EmptyHand);
    }
    let mut cards = Vec::with_capacity(selection.len());
    for (pos, &idx) in selection.iter().enumerate() {
        if selection[..pos].contains(&idx) {
            return Err(InvalidAction::DuplicateIndex(idx + 1));
        }
        cards.push(player.hand.get(idx).ok_or(InvalidAction::HandIndex(idx + 1))?);
    }
    let action = classify(&cards)?;

    let mut played = player.hand.remove_many(selection);
    if action.kind == ActionKind::Straight {
        played.sort_by_key(Card::rank);
    }
    for card in played {
        info!(player = %player.name, %card, "discarded");
        table.discard.push(card);
    }
    debug!(player = %player.name, play = %describe_action(&action), "play accepted");
    Ok(action)
}

fn draw(
    table: &mut Table,
    player: &mut Player,
    window: Range<usize>,
    choice: DrawChoice,
) -> Result<DrawSource, GameError> {
    let (card, source) = match choice {
        DrawChoice::Earlier if !window.is_empty() => {
            (table.discard.take(window.start)?, DrawSource::DiscardPile)
        }
        DrawChoice::Later if !window.is_empty() => {
            (table.discard.take(window.end - 1)?, DrawSource::DiscardPile)
        }
        _ => (table.deck.draw()?, DrawSource::Deck),
    };
    match source {
        DrawSource::DiscardPile => info!(player = %player.name, %card, "drew from the discard pile"),
        DrawSource::Deck => info!(player = %player.name, %card, "drew from the deck"),
    }
    player.hand.add(card);
    Ok(source)
}

fn announce_janosch(player: &Player) -> TurnOutcome {
    info!(player = %player.name, hand_value = player.hand_value(), "called Janosch!");
    TurnOutcome::JanoschCalled
}

fn reject_play(player: &Player, reason: InvalidAction) -> TurnOutcome {
    warn!(player = %player.name, %reason, "play rejected, turn forfeited");
    TurnOutcome::PlayRejected(reason)
}

fn turn_view(
    table: &Table,
    players: &[Player],
    id: PlayerId,
    phase: TurnPhase,
    janosch_open: bool,
    window: Vec<Card>,
) -> TurnView {
    let player = &players[id];
    TurnView {
        phase,
        self_player: id,
        name: player.name.clone(),
        hand: player.hand.cards().to_vec(),
        hand_value: player.hand_value(),
        discard_top: table.discard.top(),
        discard_count: table.discard.len(),
        deck_count: table.deck.len(),
        janosch_called: !janosch_open,
        window,
        players: players
            .iter()
            .enumerate()
            .map(|(idx, other)| PlayerPublicState {
                id: idx,
                name: other.name.clone(),
                score: other.score,
                hand_size: other.hand.len(),
                is_human: other.is_human(),
                is_current: idx == id,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_after_set_is_the_set() {
        let last = LastAction::Played(TurnAction::new(ActionKind::Set, 2));
        // Pile of 10 whose top card is this turn's single discard.
        assert_eq!(draw_window(10, last, 1), 7..9);
    }

    #[test]
    fn window_at_round_start_is_the_seed() {
        assert_eq!(draw_window(4, LastAction::Start, 3), 0..1);
    }

    #[test]
    fn window_never_underflows() {
        let last = LastAction::Played(TurnAction::new(ActionKind::Straight, 5));
        assert_eq!(draw_window(3, last, 1), 0..2);
        assert_eq!(draw_window(1, LastAction::Start, 1), 0..0);
    }
}

use std::fmt::Write;

use crate::action::{ActionKind, TurnAction};
use crate::card::Card;
use crate::player::Player;
use crate::state::TurnView;

pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn describe_action(action: &TurnAction) -> String {
    match action.kind {
        ActionKind::Single => String::from("a single card"),
        ActionKind::Set => format!("a set of {}", action.count),
        ActionKind::Straight => format!("a straight of {}", action.count),
    }
}

/// Renders what a human needs to see before deciding: the table and their own hand.
pub fn render_view(view: &TurnView) -> String {
    let mut out = String::new();
    let top = view
        .discard_top
        .map(|card| card.to_string())
        .unwrap_or_else(|| String::from("--"));
    let _ = writeln!(
        out,
        "Deck: {}  |  Discard pile: {} (top: {})",
        view.deck_count, view.discard_count, top
    );
    if view.janosch_called {
        let _ = writeln!(out, "Janosch was called: this is your final turn.");
    }
    let _ = writeln!(out, "Players:");
    for player in &view.players {
        let label_you = if player.id == view.self_player {
            " (You)"
        } else {
            ""
        };
        let kind = if player.is_human { "" } else { " [agent]" };
        let _ = writeln!(
            out,
            "  {}{}{} - score {}, {} cards",
            player.name, kind, label_you, player.score, player.hand_size
        );
    }
    if view.hand.is_empty() {
        let _ = writeln!(out, "Hand: (empty)");
    } else {
        let entries = view
            .hand
            .iter()
            .enumerate()
            .map(|(idx, card)| format!("{}:{}", idx + 1, card))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "Hand: {entries}  (value {})", view.hand_value);
    }
    out.trim_end().to_string()
}

pub fn render_scoreboard(players: &[Player]) -> String {
    let mut out = String::new();
    for player in players {
        let _ = writeln!(
            out,
            "{:<12} score {:>3}  hand [{}]",
            player.name,
            player.score,
            format_cards(player.hand.cards())
        );
    }
    out.trim_end().to_string()
}

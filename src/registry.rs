use std::error::Error;

use crate::agent::AgentStrategy;
use crate::game::Seat;
use crate::player::PlayerKind;

/// Returns a normalized label for a seat kind, used to group statistics.
pub fn label_for_kind(kind: &PlayerKind) -> &'static str {
    match kind {
        PlayerKind::Human => "human",
        PlayerKind::Agent(strategy) => strategy.label(),
    }
}

/// Create a seat from a CLI-style spec.
/// Supported specs:
/// - name            (agent playing the highest-card strategy)
/// - name:agent
/// - name:combo
/// - name:human
pub fn seat_from_spec(spec: &str) -> Result<Seat, Box<dyn Error>> {
    let (name, kind) = match spec.split_once(':') {
        Some((name, kind)) => (name.trim(), kind.trim().to_ascii_lowercase()),
        None => (spec.trim(), String::from("agent")),
    };
    if name.is_empty() {
        return Err(format!("seat spec {spec:?} has no player name").into());
    }
    let kind = match kind.as_str() {
        "agent" | "highest" => PlayerKind::Agent(AgentStrategy::HighestCard),
        "combo" | "combination" => PlayerKind::Agent(AgentStrategy::Combination),
        "human" => PlayerKind::Human,
        other => return Err(format!("unrecognized seat kind: {other}").into()),
    };
    Ok(Seat::new(name, kind))
}

//! Scoring rules for Janosch rounds and matches.
//!
//! Round rule:
//!   every player except the caller adds the value of the cards left in hand.
//!   The caller adds nothing when no other hand is strictly cheaper than theirs,
//!   otherwise 30 + their own hand value.
//! A match ends as soon as any cumulative score reaches 100; that player loses.

use serde::{Deserialize, Serialize};

use crate::card::{JANOSCH_PENALTY, LOSS_THRESHOLD};
use crate::player::PlayerId;

/// What a finished round did to the score sheet.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSummary {
    pub caller: PlayerId,
    pub hand_values: Vec<u32>,
    pub points: Vec<u32>,
    pub penalized: bool,
}

/// True when some other player ended the round with a cheaper hand than the caller.
pub fn caller_penalized(caller: PlayerId, hand_values: &[u32]) -> bool {
    let Some(&caller_value) = hand_values.get(caller) else {
        return false;
    };
    hand_values
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != caller)
        .map(|(_, value)| *value)
        .min()
        .is_some_and(|lowest| caller_value > lowest)
}

/// Points each seat adds this round, indexed like `hand_values`.
pub fn round_points(caller: PlayerId, hand_values: &[u32]) -> Vec<u32> {
    let penalized = caller_penalized(caller, hand_values);
    hand_values
        .iter()
        .enumerate()
        .map(|(idx, &value)| match (idx == caller, penalized) {
            (false, _) => value,
            (true, true) => JANOSCH_PENALTY + value,
            (true, false) => 0,
        })
        .collect()
}

/// First seat, in seating order, whose cumulative score reached the loss threshold.
pub fn match_loser<I>(scores: I) -> Option<PlayerId>
where
    I: IntoIterator<Item = u32>,
{
    scores.into_iter().position(|score| score >= LOSS_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_above_minimum_is_penalized() {
        // Caller 10 against a cheapest opponent of 8 => 30 + 10.
        let values = [10, 8, 14, 20];
        assert!(caller_penalized(0, &values));
        assert_eq!(round_points(0, &values), vec![40, 8, 14, 20]);
    }

    #[test]
    fn caller_below_minimum_scores_nothing() {
        let values = [12, 10, 15];
        assert!(!caller_penalized(1, &values));
        assert_eq!(round_points(1, &values), vec![12, 0, 15]);
    }

    #[test]
    fn tie_with_cheapest_opponent_is_a_win() {
        let values = [7, 7];
        assert_eq!(round_points(0, &values), vec![0, 7]);
    }

    #[test]
    fn loser_is_first_over_threshold() {
        assert_eq!(match_loser([40, 105, 60, 70]), Some(1));
        assert_eq!(match_loser([100, 120]), Some(0));
        assert_eq!(match_loser([99, 0, 42]), None);
    }
}

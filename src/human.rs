use std::io::{self, Write};

use crate::input::{HumanInput, prompt_for};
use crate::state::{TurnPhase, TurnView};
use crate::visualize::render_view;

/// Interactive input that queries a human via standard input.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleInput;

impl HumanInput for ConsoleInput {
    fn respond(&mut self, view: &TurnView) -> String {
        // The Janosch question is skipped once someone called, so the play prompt opens the turn.
        let opens_turn = match view.phase {
            TurnPhase::AwaitJanoschDecision => true,
            TurnPhase::PlayPhase => view.janosch_called,
            _ => false,
        };
        if opens_turn {
            println!("\n=== {}'s turn (player {}) ===", view.name, view.self_player);
            println!("{}", render_view(view));
        }
        loop {
            print!("{}", prompt_for(view));
            if io::stdout().flush().is_err() {
                eprintln!("failed to flush stdout");
            }
            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_err() {
                eprintln!("failed to read input");
                continue;
            }
            let trimmed = input.trim();
            if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
                println!("Exiting game at user's request.");
                std::process::exit(0);
            }
            if trimmed.eq_ignore_ascii_case("help") {
                println!("Cards are numbered from 1 in the order shown under 'Hand'.");
                println!("Sets share a rank, straights share a suit; jokers fill in for either.");
                continue;
            }
            return trimmed.to_string();
        }
    }
}

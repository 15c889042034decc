use std::error::Error;
use std::process;

use clap::Parser;

use janosch::{ConsoleInput, GameError, MatchBuilder, render_scoreboard, seat_from_spec};

const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

#[derive(Parser, Debug)]
#[command(name = "play", about = "Play a single Janosch match in the terminal.")]
struct Args {
    /// Seed for shuffling
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Only report warnings (rejected moves)
    #[arg(long, conflicts_with = "verbose")]
    silent: bool,

    /// Also report dealing, reshuffles and the scoreboard after every round
    #[arg(short, long)]
    verbose: bool,

    /// Safety cap on turns per round
    #[arg(long = "max-turns", default_value_t = 10_000)]
    max_turns: usize,

    /// Seats in turn order: name[:human|agent|combo] (2-8 total, bare names are agents)
    seats: Vec<String>,
}

fn main() {
    let args = Args::parse();
    let filter = if args.verbose {
        "debug"
    } else if args.silent {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let specs = if args.seats.is_empty() {
        vec![
            String::from("You:human"),
            String::from("Enno"),
            String::from("Dani"),
            String::from("Caro"),
        ]
    } else {
        args.seats
    };
    let seats = specs
        .iter()
        .map(|spec| seat_from_spec(spec))
        .collect::<Result<Vec<_>, _>>()?;

    let mut game = MatchBuilder::from_seats(seats)?
        .with_seed(args.seed)
        .with_max_turns(args.max_turns)
        .build()?;

    println!(
        "Starting Janosch with {} players.\n",
        game.players().len()
    );
    let mut input = ConsoleInput;
    let loser = match game.run_until_loss(&mut input) {
        Ok(loser) => loser,
        Err(GameError::TurnLimit(limit)) => {
            println!("Round exceeded {limit} turns. Stopping the match.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    println!("\n{}", render_scoreboard(game.players()));
    println!(
        "Match finished after {} rounds. {loser} loses.",
        game.rounds_played()
    );
    Ok(())
}

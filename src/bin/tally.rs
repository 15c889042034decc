use std::collections::HashMap;
use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use plotters::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{info, warn};

use janosch::{GameError, MatchBuilder, Seat, label_for_kind, seat_from_spec};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0xC0FFEE_u64 << 32 | 0x5EED_u64;

const DEFAULT_SEATS: [&str; 4] = ["Enno", "Dani", "Caro", "Mariia"];

#[derive(Parser, Debug)]
#[command(
    name = "tally",
    about = "Run many agent-only Janosch matches and count how often each player loses."
)]
struct Args {
    /// Number of matches to simulate
    #[arg(short = 'g', long = "games", default_value_t = 200)]
    games: usize,

    /// Base RNG seed (deck and seating orders are derived deterministically)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Output chart file (png)
    #[arg(short = 'o', long = "out", default_value = "losses.png")]
    out: PathBuf,

    /// Show a textual summary only (no chart)
    #[arg(long = "no-chart", action = ArgAction::SetTrue)]
    no_chart: bool,

    /// Safety cap on turns per round; matches exceeding it are aborted (no loser counted)
    #[arg(long = "max-turns", default_value_t = 2000)]
    max_turns: usize,

    /// Report every match event instead of warnings only
    #[arg(short, long)]
    verbose: bool,

    /// Seats: name[:agent|combo] (2-8 total, defaults to the original four roommates)
    seats: Vec<String>,
}

fn main() {
    let args = Args::parse();
    let filter = if args.verbose { "info" } else { "warn" };
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
    let specs: Vec<String> = if args.seats.is_empty() {
        DEFAULT_SEATS.iter().map(|name| name.to_string()).collect()
    } else {
        args.seats.clone()
    };
    let seats = specs
        .iter()
        .map(|spec| seat_from_spec(spec))
        .collect::<Result<Vec<Seat>, _>>()?;

    // Disallow humans in batch runs; they would block waiting for input.
    if seats.iter().any(|seat| seat.kind.is_human()) {
        return Err("human players are not supported in tally runs".into());
    }

    let mut losses_per_name: HashMap<String, usize> = HashMap::new();
    let mut rounds_total = 0usize;
    let mut aborted_games = 0usize;

    for game_idx in 0..args.games {
        // Shuffle the seating every match so nobody keeps the opening seat.
        let mut order = seats.clone();
        let mut seat_rng = StdRng::seed_from_u64(args.seed ^ 0x9E37_79B9 ^ (game_idx as u64));
        order.shuffle(&mut seat_rng);

        let mut game = MatchBuilder::from_seats(order)?
            .with_seed(mix_seed(args.seed, game_idx as u64, 0x5EED_15))
            .with_max_turns(args.max_turns)
            .build()?;

        match game.run_until_loss(&mut janosch::Unattended) {
            Ok(loser) => {
                info!(game = game_idx, %loser, rounds = game.rounds_played(), "match finished");
                *losses_per_name.entry(loser).or_default() += 1;
                rounds_total += game.rounds_played();
            }
            Err(GameError::TurnLimit(limit)) => {
                warn!(game = game_idx, limit, "match aborted at the turn limit");
                aborted_games += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }

    let mut results: Vec<(String, &'static str, usize, f64)> = seats
        .iter()
        .map(|seat| {
            let losses = *losses_per_name.get(&seat.name).unwrap_or(&0);
            let rate = if args.games > 0 {
                losses as f64 / args.games as f64
            } else {
                0.0
            };
            (seat.name.clone(), label_for_kind(&seat.kind), losses, rate)
        })
        .collect();
    results.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(&b.0)));

    println!("Losses over {} matches:", args.games);
    for (name, label, losses, rate) in &results {
        println!("  {name:<12} [{label:<5}]  {losses:>5}  ({:.2}%)", rate * 100.0);
    }
    let finished = args.games - aborted_games;
    if finished > 0 {
        println!(
            "\nAverage rounds per match: {:.2}",
            rounds_total as f64 / finished as f64
        );
    }
    if aborted_games > 0 {
        println!("\nNote: {aborted_games} match(es) hit the turn limit without a loser.");
    }

    if !args.no_chart {
        render_bar_chart(&args.out, &results)?;
        println!("\nChart written to {}", args.out.display());
    }
    Ok(())
}

fn mix_seed(base: u64, a: u64, b: u64) -> u64 {
    let mut z =
        base ^ (a.wrapping_mul(0x9E37_79B97F4A7C15)) ^ (b.wrapping_mul(0xBF58_476D1CE4E5B9));
    z ^= z >> 12;
    z ^= z << 25;
    z ^= z >> 27;
    z
}

fn render_bar_chart(
    out: &PathBuf,
    data: &[(String, &'static str, usize, f64)],
) -> Result<(), Box<dyn Error>> {
    let labels: Vec<String> = data.iter().map(|(name, _, _, _)| name.clone()).collect();
    let values: Vec<f64> = data.iter().map(|(_, _, _, rate)| rate * 100.0).collect();
    let max_value = values.iter().cloned().fold(0.0_f64, f64::max).max(10.0);

    let root = BitMapBackend::new(out, (1000, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| format!("{e}"))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Janosch loss rates", ("sans-serif", 28).into_font())
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0..labels.len(), 0.0f64..max_value)
        .map_err(|e| format!("{e}"))?;

    chart
        .configure_mesh()
        .y_desc("Loss rate (%)")
        .x_desc("Player")
        .x_labels(labels.len())
        .x_label_formatter(&|idx| {
            if *idx < labels.len() {
                labels[*idx].clone()
            } else {
                idx.to_string()
            }
        })
        .y_label_formatter(&|v| format!("{v:.0}"))
        .light_line_style(&WHITE.mix(0.0))
        .draw()
        .map_err(|e| format!("{e}"))?;

    for (i, value) in values.iter().enumerate() {
        let rect = Rectangle::new([(i, 0.0), (i + 1, *value)], RED.mix(0.7).filled());
        chart
            .draw_series(std::iter::once(rect))
            .map_err(|e| format!("{e}"))?;
    }

    root.present().map_err(|e| format!("{e}"))?;
    Ok(())
}

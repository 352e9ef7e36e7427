use seabattle::{
    domain::{MatchId, PlayerId},
    init_logging, print_player_view, render_board, validate_layout, BoardState,
    FleetLayoutGenerator, HuntPlayer, InMemoryBoardStore, MatchService, MatchStatus, Player,
    RandomPlayer, BOARD_SIZE,
};

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random fleet layout and print it.
    Generate {
        #[arg(long, help = "Fix RNG seed for a reproducible layout (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print JSON instead of a text grid")]
        json: bool,
    },
    /// Play an automated match, hunt/target player against random player.
    Simulate {
        #[arg(long, help = "Fix RNG seed for a reproducible match (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print JSON instead of text")]
        json: bool,
        #[arg(long, help = "Print both final boards")]
        show_boards: bool,
    },
}

/// Hard stop for the simulation loop; a match never needs this many turns.
const MAX_TURNS: usize = 4 * BOARD_SIZE * BOARD_SIZE;

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { seed, json } => {
            init_logging(json);
            let mut rng = make_rng(seed);
            let layout = FleetLayoutGenerator::new().generate(&mut rng)?;
            let validation = validate_layout(&layout);
            if json {
                let out = json!({
                    "seed": seed,
                    "grid": layout.rows(),
                    "valid": validation.is_ok(),
                });
                println!("{}", serde_json::to_string(&out)?);
            } else {
                print!("{}", render_board(&BoardState::new(layout), true));
                match validation {
                    Ok(()) => println!("Layout is valid."),
                    Err(e) => println!("Layout is invalid: {}", e),
                }
            }
        }
        Commands::Simulate {
            seed,
            json,
            show_boards,
        } => {
            init_logging(json);
            if let Some(s) = seed {
                log::info!("Using fixed seed: {} (match will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let service = MatchService::new(InMemoryBoardStore::new());
            let players = [PlayerId(1), PlayerId(2)];
            let id = service.create_match(players[0], players[1]).await?;
            service.start_match(id, &mut rng).await?;

            let mut strategies: [Box<dyn Player>; 2] =
                [Box::new(HuntPlayer::new()), Box::new(RandomPlayer::new())];
            run_match(&service, id, players, &mut strategies, &mut rng).await?;

            let summary = service.summary(id).await?;
            let boards = [
                service.board(id, players[0]).await?,
                service.board(id, players[1]).await?,
            ];
            if json {
                let out = json!({
                    "seed": seed,
                    "winner": summary.winner,
                    "shots_fired": summary.shots_fired,
                    "ships_remaining": [boards[0].ships_remaining(), boards[1].ships_remaining()],
                });
                println!("{}", serde_json::to_string(&out)?);
            } else {
                match summary.winner {
                    Some(winner) if winner == players[0] => {
                        println!("{} (hunt/target) wins after {} shots", winner, summary.shots_fired)
                    }
                    Some(winner) => {
                        println!("{} (random) wins after {} shots", winner, summary.shots_fired)
                    }
                    None => println!("No winner after {} shots", summary.shots_fired),
                }
                if show_boards {
                    print_player_view(&boards[0], &boards[1]);
                }
            }
        }
    }
    Ok(())
}

async fn run_match(
    service: &MatchService<InMemoryBoardStore>,
    id: MatchId,
    players: [PlayerId; 2],
    strategies: &mut [Box<dyn Player>; 2],
    rng: &mut SmallRng,
) -> anyhow::Result<()> {
    for _ in 0..MAX_TURNS {
        let summary = service.summary(id).await?;
        if summary.status == MatchStatus::Finished {
            return Ok(());
        }
        let seat = if summary.current_turn == players[0] { 0 } else { 1 };
        let target = service.board(id, players[1 - seat]).await?;
        let (x, y) = strategies[seat].select_target(rng, target.shots());
        let outcome = service
            .fire(id, summary.current_turn, x as i32, y as i32)
            .await?;
        strategies[seat].handle_outcome((x, y), outcome);
    }
    Err(anyhow::anyhow!("match did not finish within {} turns", MAX_TURNS))
}

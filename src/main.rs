/// Solve a Set board from the command line: load the card data, search for
/// the expected number of valid sets, and report each one as it is found.
///
/// CLI Usage:
///   set-solver --cards board.json                 # raw card data, 9 or 12 cards
///   set-solver --cards board.json --matches 2     # stop after 2 sets
///   set-solver --cards board.json --canonical     # already-decoded card data
///   set-solver --cards board.json --seed 42       # reproducible sampling order

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use set_solver::utils::{banner, init_log_file, report_print};
use set_solver::{Card, CardPool, RawCard, SolveSession, count_all_sets, decode_pool};

/// CLI arguments structure
#[derive(Parser, Debug)]
#[command(name = "set-solver")]
#[command(about = "Finds the valid Set triples hidden in a card board", long_about = None)]
struct Args {
    /// JSON file with the board's card data
    #[arg(short, long)]
    cards: PathBuf,

    /// Number of sets to find (default: 4 for a 9-card board, 6 for 12)
    #[arg(short, long)]
    matches: Option<usize>,

    /// Card data is already canonical (decoded), not raw presentation values
    #[arg(long)]
    canonical: bool,

    /// RNG seed for a reproducible sampling order
    #[arg(short, long)]
    seed: Option<u64>,
}

fn load_pool(args: &Args) -> Result<CardPool, String> {
    let data = std::fs::read_to_string(&args.cards)
        .map_err(|e| format!("cannot read {}: {}", args.cards.display(), e))?;
    if args.canonical {
        let cards: Vec<Card> =
            serde_json::from_str(&data).map_err(|e| format!("bad card data: {}", e))?;
        return Ok(CardPool::new(cards));
    }
    // Raw data comes as one [color, shape, shading, count] tuple per card,
    // exactly as scraped from the board.
    let raw: Vec<[String; 4]> =
        serde_json::from_str(&data).map_err(|e| format!("bad card data: {}", e))?;
    let raw_cards: Vec<RawCard> = raw
        .into_iter()
        .map(|[color, shape, shading, count]| RawCard {
            color,
            shape,
            shading,
            count,
        })
        .collect();
    decode_pool(&raw_cards).map_err(|e| e.to_string())
}

/// Target for the supported game modes: basic deck 9 cards / 4 sets,
/// advanced deck 12 cards / 6 sets.
fn default_target(card_count: usize) -> Option<usize> {
    match card_count {
        9 => Some(4),
        12 => Some(6),
        _ => None,
    }
}

fn run(args: &Args) -> Result<(), String> {
    let pool = load_pool(args)?;
    let target = match args.matches.or_else(|| default_target(pool.len())) {
        Some(t) => t,
        None => {
            return Err(format!(
                "{} is an unfamiliar number of cards, use --matches to set a target",
                pool.len()
            ));
        }
    };

    // Best-effort pre-check so an unreachable target fails up front instead
    // of after exhausting the combination space.
    let true_count = count_all_sets(&pool);
    if target > true_count {
        return Err(format!(
            "the board only contains {} valid sets, {} were requested",
            true_count, target
        ));
    }

    let mut rng = match args.seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_entropy(),
    };

    let mut session = SolveSession::new(pool);
    let mut reported = 0usize;
    session
        .find_all_sets(target, &mut rng, |valid_set| {
            reported += 1;
            report_print(&format!("SET Nº {}:", reported));
            for (slot, card) in valid_set.cards.iter().enumerate() {
                report_print(&format!(
                    " > Card Nº {} (board position {}) - {}",
                    slot + 1,
                    valid_set.indexes[slot] + 1,
                    card
                ));
            }
        })
        .map_err(|e| e.to_string())?;

    report_print(&format!(
        "Tried {} different sets combinations!",
        session.tried_count()
    ));
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_log_file();
    banner("Set Solver");
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            ExitCode::FAILURE
        }
    }
}

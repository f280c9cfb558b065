use clap::Parser;
use poker_hand_rank::core::{Card, Category, Hand, sort_strongest_first};
use serde::Serialize;
use tracing::{Level, event};
use tracing_subscriber::EnvFilter;

/// Hands ranked when none are given on the command line.
const DEMO_HANDS: [&str; 5] = [
    "KS 2H 5C JD TD",
    "2C 3C AC 4C 5C",
    "TC KC QC JC AC",
    "3S 3H 3C 5D 5H",
    "4S 4H 4C 2D 2H",
];

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(name = "rank-hands")]
#[command(about = "Classify five card poker hands and print them strongest first")]
struct Cli {
    /// Hands to rank, each five cards like "KS 2H 5C JD TD"
    hands: Vec<String>,

    /// Print one JSON object per hand
    #[arg(long)]
    json: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct HandReport<'a> {
    place: usize,
    hand: String,
    category: Category,
    combination: &'a [Card],
    kickers: &'a [Card],
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let inputs: Vec<String> = if cli.hands.is_empty() {
        DEMO_HANDS.iter().map(|h| h.to_string()).collect()
    } else {
        cli.hands
    };

    let mut hands = Vec::with_capacity(inputs.len());
    for input in &inputs {
        match Hand::new_from_str(input) {
            Ok(hand) => hands.push(hand),
            Err(e) => {
                eprintln!("Error parsing hand {:?}: {}", input, e);
                std::process::exit(1);
            }
        }
    }
    event!(Level::DEBUG, count = hands.len(), "Parsed hands");

    sort_strongest_first(&mut hands);

    for (place, hand) in places(&hands).into_iter().zip(hands.iter()) {
        if cli.json {
            print_json(place, hand);
        } else {
            println!("{:>2}. {}  {}", place, hand, hand.classified());
        }
    }
}

/// Finishing place of each sorted hand. Hands of equal strength
/// share a place.
fn places(sorted: &[Hand]) -> Vec<usize> {
    let mut places = Vec::with_capacity(sorted.len());
    for (i, hand) in sorted.iter().enumerate() {
        let place = match i {
            0 => 1,
            _ if hand.cmp_strength(&sorted[i - 1]).is_eq() => places[i - 1],
            _ => i + 1,
        };
        places.push(place);
    }
    places
}

fn print_json(place: usize, hand: &Hand) {
    let classified = hand.classified();
    let report = HandReport {
        place,
        hand: hand.to_string(),
        category: classified.category(),
        combination: classified.combination(),
        kickers: classified.kickers(),
    };
    match serde_json::to_string(&report) {
        Ok(line) => println!("{}", line),
        Err(e) => {
            eprintln!("Error serializing hand {}: {}", hand, e);
            std::process::exit(1);
        }
    }
}

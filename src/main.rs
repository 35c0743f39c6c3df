mod card;
mod rng;
mod simulation;

use card::CardDatabase;
use clap::Parser;
use rng::SimRng;
use simulation::combo::ComboConfig;
use simulation::deck::load_deck_file;
use simulation::engine::{run_trials, DEFAULT_TRIES};

#[derive(Parser)]
#[command(name = "ygo-combo-sim")]
#[command(about = "Cyber combo opening-hand odds simulator", long_about = None)]
struct Cli {
    /// Deck file (.ydk) to analyze
    #[arg(short, long)]
    deck: String,

    /// Number of trials to run
    #[arg(short, long, default_value_t = DEFAULT_TRIES)]
    tries: usize,

    /// Card database file
    #[arg(long, default_value = "database.json")]
    database: String,

    /// Seed for the random number generator (for reproducibility)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    let db = match CardDatabase::from_file(&cli.database) {
        Ok(db) => {
            eprintln!("✓ Loaded {} cards from {}", db.card_count(), cli.database);
            db
        }
        Err(e) => {
            eprintln!("✗ Failed to load cards: {}", e);
            std::process::exit(1);
        }
    };

    let deck = match load_deck_file(&cli.deck, &db) {
        Ok(deck) => deck,
        Err(e) => {
            eprintln!("✗ Failed to read deck file '{}': {}", cli.deck, e);
            std::process::exit(1);
        }
    };
    eprintln!(
        "✓ Resolved deck '{}': {} main / {} side / {} extra",
        cli.deck,
        deck.main.len(),
        deck.side.len(),
        deck.extra.len()
    );

    let config = ComboConfig::default();
    let mut rng = SimRng::new(cli.seed);
    let stats = run_trials(&deck, cli.tries, &config, &mut rng);

    println!("{} {} {}", stats.successes, stats.failures, stats.percentage());
}

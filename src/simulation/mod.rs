pub mod combo;
pub mod deck;
pub mod engine;
pub mod hand;

pub use combo::{evaluate_trial, ComboConfig};
pub use deck::{load_deck_file, parse_ydk, resolve_deck, DeckError, DeckList, RawDeck};
pub use engine::{run_trials, TrialStats, DEFAULT_TRIES};
pub use hand::{draw_five, draw_six, Draw};

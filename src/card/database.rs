use crate::card::types::Card;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardDatabaseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load-once card reference table, keyed by passcode.
pub struct CardDatabase {
    cards: HashMap<u32, Card>,
}

impl CardDatabase {
    /// Load cards from a JSON array file.
    pub fn from_file(path: &str) -> Result<Self, CardDatabaseError> {
        let content = std::fs::read_to_string(path)?;
        let cards: Vec<Card> = serde_json::from_str(&content)?;
        Ok(Self::from_cards(cards))
    }

    /// Build a database from in-memory records. Later duplicates of an id
    /// replace earlier ones, matching last-write-wins JSON ordering.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let cards = cards.into_iter().map(|c| (c.id, c)).collect();
        CardDatabase { cards }
    }

    /// Look up a card by id. Missing ids are a normal outcome: deck
    /// resolution drops them rather than erroring.
    pub fn get(&self, id: u32) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Total number of cards loaded.
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}

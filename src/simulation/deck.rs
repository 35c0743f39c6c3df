use crate::card::{Card, CardDatabase};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Raw `.ydk` sections before database resolution: decimal id strings in
/// file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDeck {
    pub main: Vec<String>,
    pub side: Vec<String>,
    pub extra: Vec<String>,
}

/// A deck after id resolution. Only `main` is drawn from during trials;
/// `side` and `extra` are carried for completeness.
#[derive(Debug, Clone, Default)]
pub struct DeckList {
    pub main: Vec<Card>,
    pub side: Vec<Card>,
    pub extra: Vec<Card>,
}

#[derive(Clone, Copy)]
enum Section {
    Main,
    Side,
    Extra,
}

/// Parse `.ydk` text into raw id lists.
///
/// Lines starting with `#` or `!` are section markers; only `main`, `side`
/// and `extra` are recognized, anything else (including `#created by ...`
/// comments) leaves the current section unchanged. Ids that appear before
/// the first recognized marker have no section and are dropped. Parsing
/// never fails.
pub fn parse_ydk(contents: &str) -> RawDeck {
    let mut raw = RawDeck::default();
    let mut current: Option<Section> = None;

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(marker) = line.strip_prefix('#').or_else(|| line.strip_prefix('!')) {
            match marker {
                "main" => current = Some(Section::Main),
                "side" => current = Some(Section::Side),
                "extra" => current = Some(Section::Extra),
                _ => {}
            }
            continue;
        }

        match current {
            Some(Section::Main) => raw.main.push(line.to_string()),
            Some(Section::Side) => raw.side.push(line.to_string()),
            Some(Section::Extra) => raw.extra.push(line.to_string()),
            None => {}
        }
    }

    raw
}

fn resolve_section(ids: &[String], database: &CardDatabase) -> Vec<Card> {
    ids.iter()
        .filter_map(|s| s.parse::<u32>().ok())
        .filter(|&id| id != 0)
        .filter_map(|id| database.get(id).cloned())
        .collect()
}

/// Resolve raw id strings against the card database. Unparsable ids, id 0,
/// and ids the database does not know are dropped, so a resolved section may
/// be shorter than its raw list.
pub fn resolve_deck(raw: &RawDeck, database: &CardDatabase) -> DeckList {
    DeckList {
        main: resolve_section(&raw.main, database),
        side: resolve_section(&raw.side, database),
        extra: resolve_section(&raw.extra, database),
    }
}

/// Read, parse and resolve a `.ydk` deck file. Only the file read can fail.
pub fn load_deck_file(path: &str, database: &CardDatabase) -> Result<DeckList, DeckError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(resolve_deck(&parse_ydk(&contents), database))
}

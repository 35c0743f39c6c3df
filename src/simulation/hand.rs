use crate::card::Card;
use crate::rng::SimRng;

/// One hand/deck split of a shuffled main deck.
///
/// `deck` is the FULL shuffled sequence and `hand` aliases its front:
/// nothing is removed when drawing. "Is it still in the deck" checks
/// intentionally scan the whole sequence, hand included.
pub struct Draw<'a> {
    pub hand: &'a [Card],
    pub deck: &'a [Card],
}

fn split(deck: &[Card], hand_size: usize) -> Draw<'_> {
    let n = deck.len().min(hand_size);
    Draw {
        hand: &deck[..n],
        deck,
    }
}

/// Shuffle and draw the five-card opening hand.
///
/// The deck is shuffled twice before the draw. Decks with fewer than five
/// cards yield a correspondingly smaller hand rather than panicking.
pub fn draw_five<'a>(deck: &'a mut [Card], rng: &mut SimRng) -> Draw<'a> {
    rng.shuffle(deck);
    rng.shuffle(deck);
    split(deck, 5)
}

/// Draw a six-card hand (going-second draw rule) from an already shuffled
/// deck.
pub fn draw_six(deck: &[Card]) -> Draw<'_> {
    split(deck, 6)
}

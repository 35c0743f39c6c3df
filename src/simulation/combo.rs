use crate::card::{is_cyber_form, Card, CardCategory};
use crate::rng::SimRng;
use crate::simulation::deck::DeckList;
use crate::simulation::hand::draw_five;

// Passcodes of the cards the evaluator keys on.
pub const POWER_BOND: u32 = 37_630_732;
pub const CYBER_DRAGON_CORE: u32 = 23_893_227;
pub const CYBER_EMERGENCY: u32 = 60_600_126;
pub const CYBERDARK_REALM: u32 = 60_764_609;
pub const CYBERNETIC_HORIZON: u32 = 50_588_353;
pub const CYBERDARK_CLAW: u32 = 23_299_957;
pub const CYBERDARK_CANNON: u32 = 82_632_000;

/// Archetype codes ("Cyber" and "Cyberdark") as stored in packed set-codes.
pub const CYBER_ARCHETYPE: u64 = 0x93;
pub const CYBERDARK_ARCHETYPE: u64 = 0x4093;

/// Race flags tested against the type bitmask.
pub const MACHINE: u32 = 32;
pub const DRAGON: u32 = 8192;

/// The id/flag table the combo evaluator runs against.
///
/// Built once at startup and passed explicitly into evaluation, never read
/// as ambient globals. `Default` carries the production constants.
#[derive(Debug, Clone)]
pub struct ComboConfig {
    /// Fusion spell that must still be findable in the deck.
    pub fusion_enabler: u32,
    pub dragon_core: u32,
    pub emergency: u32,
    pub cyberdark_realm: u32,
    pub cybernetic_horizon: u32,
    pub cyberdark_claw: u32,
    pub cyberdark_cannon: u32,
    pub cyber_archetype: u64,
    pub cyberdark_archetype: u64,
    pub machine_flag: u32,
    pub dragon_flag: u32,
}

impl Default for ComboConfig {
    fn default() -> Self {
        ComboConfig {
            fusion_enabler: POWER_BOND,
            dragon_core: CYBER_DRAGON_CORE,
            emergency: CYBER_EMERGENCY,
            cyberdark_realm: CYBERDARK_REALM,
            cybernetic_horizon: CYBERNETIC_HORIZON,
            cyberdark_claw: CYBERDARK_CLAW,
            cyberdark_cannon: CYBERDARK_CANNON,
            cyber_archetype: CYBER_ARCHETYPE,
            cyberdark_archetype: CYBERDARK_ARCHETYPE,
            machine_flag: MACHINE,
            dragon_flag: DRAGON,
        }
    }
}

impl ComboConfig {
    /// A card whose presence in the opening hand can start a combo line.
    pub fn is_starter(&self, card: &Card) -> bool {
        card.id == self.dragon_core
            || card.id == self.emergency
            || card.id == self.cyberdark_realm
            || card.id == self.cybernetic_horizon
    }

    fn is_cyber(&self, card: &Card) -> bool {
        is_cyber_form(card, self.machine_flag, self.dragon_flag, self.cyber_archetype)
    }

    fn is_cyberdark(&self, card: &Card) -> bool {
        is_cyber_form(
            card,
            self.machine_flag,
            self.dragon_flag,
            self.cyberdark_archetype,
        )
    }
}

fn starter_position(hand: &[Card], config: &ComboConfig) -> Option<usize> {
    hand.iter().position(|card| config.is_starter(card))
}

fn has_spell_or_trap(cards: &[Card]) -> bool {
    cards.iter().any(|card| {
        card.is_category(CardCategory::Spell) || card.is_category(CardCategory::Trap)
    })
}

/// The fusion enabler must still be findable. The scan deliberately covers
/// the whole shuffled sequence, hand cards included (see `Draw`).
fn enabler_in_deck(deck: &[Card], config: &ComboConfig) -> bool {
    deck.iter().any(|card| card.id == config.fusion_enabler)
}

/// Primary engine line: core/emergency/horizon starter plus a second cyber
/// machine-or-dragon body (or a spare Cyber Emergency) in the support pool.
fn primary_engine_path(
    starter: &Card,
    support: &[Card],
    deck: &[Card],
    config: &ComboConfig,
) -> bool {
    let applies = starter.id == config.dragon_core
        || starter.id == config.emergency
        || starter.id == config.cybernetic_horizon;

    applies
        && enabler_in_deck(deck, config)
        && has_spell_or_trap(support)
        && support
            .iter()
            .any(|card| card.id == config.emergency || config.is_cyber(card))
}

/// Cyberdark Realm line: needs the claw in hand, or a wider board of two
/// cyber bodies plus a cyberdark one.
fn claw_variant_path(
    starter: &Card,
    support: &[Card],
    deck: &[Card],
    config: &ComboConfig,
) -> bool {
    if starter.id != config.cyberdark_realm {
        return false;
    }
    if !enabler_in_deck(deck, config) || !has_spell_or_trap(support) {
        return false;
    }
    if support.iter().any(|card| card.id == config.cyberdark_claw) {
        return true;
    }

    let cyber_bodies = support.iter().filter(|card| config.is_cyber(card)).count();
    let has_cyberdark = support.iter().any(|card| config.is_cyberdark(card));
    cyber_bodies >= 2 && has_cyberdark
}

/// Fallback line off a core/emergency starter: any of the alternate
/// enablers in hand keeps the combo live.
fn pseudo_combo_path(
    starter: &Card,
    support: &[Card],
    deck: &[Card],
    config: &ComboConfig,
) -> bool {
    let applies = starter.id == config.dragon_core || starter.id == config.emergency;
    let alternates = [
        config.cyberdark_claw,
        config.cybernetic_horizon,
        config.cyberdark_realm,
        config.cyberdark_cannon,
    ];

    applies
        && enabler_in_deck(deck, config)
        && has_spell_or_trap(support)
        && support.iter().any(|card| alternates.contains(&card.id))
}

/// One full trial: shuffle a working copy of the main deck, draw five, and
/// check whether any combo path completes.
///
/// The deck list itself is never mutated; every trial shuffles its own copy.
pub fn evaluate_trial(deck_list: &DeckList, config: &ComboConfig, rng: &mut SimRng) -> bool {
    let mut library = deck_list.main.clone();
    let draw = draw_five(&mut library, rng);

    let mut hand = draw.hand.to_vec();
    let position = match starter_position(&hand, config) {
        Some(position) => position,
        None => return false,
    };
    let starter = hand.remove(position);
    let support = hand;

    primary_engine_path(&starter, &support, draw.deck, config)
        || claw_variant_path(&starter, &support, draw.deck, config)
        || pseudo_combo_path(&starter, &support, draw.deck, config)
}

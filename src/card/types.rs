use serde::{Deserialize, Serialize};

// Type bitmask flags, as stored in the card database.
pub const TYPE_MONSTER: u32 = 0x1;
pub const TYPE_SPELL: u32 = 0x2;
pub const TYPE_TRAP: u32 = 0x4;
pub const TYPE_FUSION: u32 = 0x40;
pub const TYPE_RITUAL: u32 = 0x80;
pub const TYPE_SYNCHRO: u32 = 0x2000;
/// Combined mask: token cards carry both the 0x10 and 0x4000 bits.
pub const TYPE_TOKEN: u32 = 0x4010;
pub const TYPE_XYZ: u32 = 0x800000;
pub const TYPE_LINK: u32 = 0x4000000;

/// Card categories the classifier can test for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardCategory {
    Monster,
    Spell,
    Trap,
    Fusion,
    Ritual,
    Synchro,
    Token,
    Xyz,
    Link,
}

/// A single card record from the database.
///
/// Immutable reference data: the simulator only ever clones and inspects
/// cards, it never rewrites them. Fields beyond these are present in the
/// database JSON and ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    /// Type bitmask (monster/spell/trap/fusion/... flags).
    #[serde(rename = "type")]
    pub card_type: u32,
    #[serde(default)]
    pub race: u32,
    #[serde(default)]
    pub level: u32,
    /// Zero for non-monsters.
    #[serde(default)]
    pub attribute: u32,
    /// Up to four packed 16-bit archetype codes.
    #[serde(default)]
    pub setcode: u64,
    /// Link markers; empty for anything that is not a link monster.
    #[serde(default)]
    pub links: Vec<String>,
}

impl Card {
    /// Category test over the type bitmask.
    ///
    /// Monsters are special-cased: older database rows sometimes lack the
    /// monster type bit but carry race/level/attribute data, so either
    /// signal counts.
    pub fn is_category(&self, category: CardCategory) -> bool {
        match category {
            CardCategory::Monster => {
                self.race != 0
                    || self.level != 0
                    || self.attribute != 0
                    || self.card_type & TYPE_MONSTER == TYPE_MONSTER
            }
            CardCategory::Spell => self.card_type & TYPE_SPELL == TYPE_SPELL,
            CardCategory::Trap => self.card_type & TYPE_TRAP == TYPE_TRAP,
            CardCategory::Fusion => self.card_type & TYPE_FUSION == TYPE_FUSION,
            CardCategory::Ritual => self.card_type & TYPE_RITUAL == TYPE_RITUAL,
            CardCategory::Synchro => self.card_type & TYPE_SYNCHRO == TYPE_SYNCHRO,
            CardCategory::Token => self.card_type & TYPE_TOKEN == TYPE_TOKEN,
            CardCategory::Xyz => self.card_type & TYPE_XYZ == TYPE_XYZ,
            CardCategory::Link => {
                !self.links.is_empty() || self.card_type & TYPE_LINK == TYPE_LINK
            }
        }
    }

    /// True if any bit of `mask` is set in the type bitmask. Used for coarse
    /// group membership (Machine, Dragon) against the type field.
    pub fn has_type_flag(&self, mask: u32) -> bool {
        self.card_type & mask != 0
    }

    /// Archetype membership over the packed set-code.
    ///
    /// A set-code packs up to four 16-bit codes, and legacy rows store a
    /// single bare code, so a target may appear as the whole value, in the
    /// low 16 or low 8 bits, or anywhere above bit 16.
    pub fn matches_archetype(&self, code: u64) -> bool {
        let setcode = self.setcode;
        setcode == code
            || setcode & 0xFFFF == code
            || setcode & 0xFF == code
            || setcode >> 16 == code
    }
}

/// Composite predicate: a monster of the given archetype whose type bitmask
/// carries either of the two race flags.
pub fn is_cyber_form(card: &Card, machine_flag: u32, dragon_flag: u32, archetype: u64) -> bool {
    card.is_category(CardCategory::Monster)
        && (card.has_type_flag(machine_flag) || card.has_type_flag(dragon_flag))
        && card.matches_archetype(archetype)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(card_type: u32) -> Card {
        Card {
            id: 1,
            card_type,
            race: 0,
            level: 0,
            attribute: 0,
            setcode: 0,
            links: vec![],
        }
    }

    #[test]
    fn monster_via_type_bit_alone() {
        // race/level/attribute all zero; bit 0 must still classify as monster
        let c = card(TYPE_MONSTER);
        assert!(c.is_category(CardCategory::Monster));
    }

    #[test]
    fn monster_via_attribute_alone() {
        let c = Card {
            attribute: 0x20,
            ..card(0)
        };
        assert!(c.is_category(CardCategory::Monster));
    }

    #[test]
    fn monster_via_race_and_level() {
        let c = Card {
            race: 32,
            level: 5,
            ..card(0)
        };
        assert!(c.is_category(CardCategory::Monster));
    }

    #[test]
    fn plain_spell_is_not_a_monster() {
        let c = card(TYPE_SPELL);
        assert!(!c.is_category(CardCategory::Monster));
        assert!(c.is_category(CardCategory::Spell));
        assert!(!c.is_category(CardCategory::Trap));
    }

    #[test]
    fn single_bit_categories() {
        assert!(card(TYPE_TRAP).is_category(CardCategory::Trap));
        assert!(card(TYPE_MONSTER | TYPE_FUSION).is_category(CardCategory::Fusion));
        assert!(card(TYPE_MONSTER | TYPE_RITUAL).is_category(CardCategory::Ritual));
        assert!(card(TYPE_MONSTER | TYPE_SYNCHRO).is_category(CardCategory::Synchro));
        assert!(card(TYPE_MONSTER | TYPE_XYZ).is_category(CardCategory::Xyz));
    }

    #[test]
    fn token_needs_both_bits() {
        assert!(card(TYPE_TOKEN).is_category(CardCategory::Token));
        assert!(!card(0x10).is_category(CardCategory::Token));
        assert!(!card(0x4000).is_category(CardCategory::Token));
    }

    #[test]
    fn link_via_markers_or_type_bit() {
        let by_bit = card(TYPE_MONSTER | TYPE_LINK);
        assert!(by_bit.is_category(CardCategory::Link));

        let by_markers = Card {
            links: vec!["Bottom-Left".into(), "Bottom-Right".into()],
            ..card(TYPE_MONSTER)
        };
        assert!(by_markers.is_category(CardCategory::Link));

        assert!(!card(TYPE_MONSTER).is_category(CardCategory::Link));
    }

    #[test]
    fn type_flag_any_bit() {
        let c = card(TYPE_MONSTER | 32);
        assert!(c.has_type_flag(32));
        assert!(!c.has_type_flag(8192));
    }

    #[test]
    fn archetype_exact_match() {
        let c = Card {
            setcode: 0x93,
            ..card(TYPE_MONSTER)
        };
        assert!(c.matches_archetype(0x93));
    }

    #[test]
    fn archetype_low_sixteen_slot() {
        let c = Card {
            setcode: 0x1093,
            ..card(TYPE_MONSTER)
        };
        assert!(c.matches_archetype(0x1093));
        // 0x93 is not the low-16 value, but it is the low byte
        assert!(c.matches_archetype(0x93));
    }

    #[test]
    fn archetype_high_slot() {
        // code packed above bit 16 only
        let c = Card {
            setcode: 0x93_0000,
            ..card(TYPE_MONSTER)
        };
        assert!(c.matches_archetype(0x93));
    }

    #[test]
    fn archetype_no_match() {
        let c = Card {
            setcode: 0x1045,
            ..card(TYPE_MONSTER)
        };
        assert!(!c.matches_archetype(0x93));
    }

    #[test]
    fn cyber_form_requires_all_three() {
        let machine = 32;
        let dragon = 8192;

        let full = Card {
            setcode: 0x93,
            ..card(TYPE_MONSTER | machine)
        };
        assert!(is_cyber_form(&full, machine, dragon, 0x93));

        let dragon_form = Card {
            setcode: 0x93,
            ..card(TYPE_MONSTER | dragon)
        };
        assert!(is_cyber_form(&dragon_form, machine, dragon, 0x93));

        let wrong_archetype = Card {
            setcode: 0x45,
            ..card(TYPE_MONSTER | machine)
        };
        assert!(!is_cyber_form(&wrong_archetype, machine, dragon, 0x93));

        let not_a_monster = Card {
            setcode: 0x93,
            ..card(TYPE_SPELL | machine)
        };
        assert!(!is_cyber_form(&not_a_monster, machine, dragon, 0x93));
    }
}

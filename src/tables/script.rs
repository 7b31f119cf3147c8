//! Script groups (`spec.md` §3 "Script Group", §4.4 step 8).

use crate::Codepoint;
use crate::tables::classify::{
    is_arabic_letter, is_arabic_mark, is_cyrillic_lower as cy_lower, is_cyrillic_upper as cy_upper,
    is_greek_lower as gr_lower, is_greek_upper as gr_upper, is_hebrew_letter, is_hebrew_mark,
    is_latin1_lower as la_lower, is_latin1_upper as la_upper,
};
use crate::tables::nfc::{is_hangul_jamo, is_hangul_syllable};
use crate::tables::nsm;

#[derive(Debug, Clone, Copy)]
pub struct ScriptGroup {
    pub name: &'static str,
    /// Per-group combining marks permitted after a base of this group
    /// (`spec.md` §3: "`cm`: combining marks permitted after bases of
    /// this group").
    pub cm: &'static [Codepoint],
    /// Whether NSM run-length tightenings from `spec.md` §4.4 step 10
    /// apply to this group.
    pub check_nsm: bool,
    /// Per-group NSM run-length cap, when tighter than the global
    /// `nsm_max` of 4.
    pub nsm_max: usize,
    pub membership: fn(Codepoint) -> bool,
}

fn ascii_membership(cp: Codepoint) -> bool {
    matches!(cp, 0x61..=0x7A | 0x30..=0x39 | 0x5F | 0x2D)
}

fn latin_membership(cp: Codepoint) -> bool {
    matches!(cp, 0x61..=0x7A)
        || la_lower(cp)
        || la_upper(cp)
        || LATIN_CM.contains(&cp)
        || LATIN_CONFUSABLE.contains(&cp)
}

/// The Cyrillic lookalikes from `tables::confusable::CONFUSABLE_SETS`
/// targeting a Latin letter (а/е/о/р). Deliberately admitted into the
/// Latin group's membership: without this, a label mixing `a` with
/// cyrillic `а` would fail script-group determination outright
/// (`DisallowedCharacter`) before ever reaching the dedicated
/// whole-script-confusable check in `validate.rs`, hiding the more
/// specific signal behind a generic one. Greek omicron (also a
/// `latin-o` confusable) is deliberately excluded here — it's a
/// legitimate Greek letter and belongs to that group instead.
static LATIN_CONFUSABLE: [Codepoint; 4] = [0x0430, 0x0435, 0x043E, 0x0440];

fn greek_membership(cp: Codepoint) -> bool {
    gr_lower(cp) || gr_upper(cp) || GREEK_CM.contains(&cp)
}

fn cyrillic_membership(cp: Codepoint) -> bool {
    cy_lower(cp) || cy_upper(cp) || CYRILLIC_CM.contains(&cp)
}

fn arabic_membership(cp: Codepoint) -> bool {
    is_arabic_letter(cp) || is_arabic_mark(cp)
}

fn hebrew_membership(cp: Codepoint) -> bool {
    is_hebrew_letter(cp) || is_hebrew_mark(cp)
}

fn hangul_membership(cp: Codepoint) -> bool {
    is_hangul_syllable(cp) || is_hangul_jamo(cp)
}

/// Acute, grave, circumflex, tilde, macron, diaeresis, ring above, cedilla,
/// ogonek, caron — the Latin-script combining diacritics.
static LATIN_CM: [Codepoint; 10] = [
    0x0300, 0x0301, 0x0302, 0x0303, 0x0304, 0x0308, 0x030A, 0x0327, 0x0328, 0x030C,
];
/// Tonos, dialytika, perispomeni, psili, dasia — the Greek polytonic marks.
static GREEK_CM: [Codepoint; 5] = [0x0301, 0x0308, 0x0342, 0x0313, 0x0314];
/// Breve, diaeresis, double grave, inverted breve — marks seen over Cyrillic bases.
static CYRILLIC_CM: [Codepoint; 4] = [0x0306, 0x0308, 0x030F, 0x0311];
/// Fathatan..sukun — the Arabic harakat, also this group's NSM set.
static ARABIC_CM: [Codepoint; 8] = nsm::ARABIC_NSM_EXTRA;
/// Sheva..dagesh — the Hebrew niqqud, also this group's NSM set.
static HEBREW_CM: [Codepoint; 5] = nsm::HEBREW_NSM_EXTRA;

/// `spec.md` §4.4 step 8's "unique script group whose `primary ∪ secondary
/// ∪ cm` is a superset". Groups are listed in the fixed tie-break order
/// required by that step; ASCII-only labels never reach this table (they
/// take the §4.4 step 3 fast path), so `Ascii` exists here only so every
/// label, including mixed emoji+ASCII-script labels, has a named group to
/// report.
pub static SCRIPT_GROUPS: &[ScriptGroup] = &[
    ScriptGroup {
        name: "ASCII",
        cm: &[],
        check_nsm: false,
        nsm_max: super::nsm::NSM_MAX,
        membership: ascii_membership,
    },
    ScriptGroup {
        name: "Latin",
        cm: &LATIN_CM,
        check_nsm: false,
        nsm_max: super::nsm::NSM_MAX,
        membership: latin_membership,
    },
    ScriptGroup {
        name: "Greek",
        cm: &GREEK_CM,
        check_nsm: false,
        nsm_max: super::nsm::NSM_MAX,
        membership: greek_membership,
    },
    ScriptGroup {
        name: "Cyrillic",
        cm: &CYRILLIC_CM,
        check_nsm: false,
        nsm_max: super::nsm::NSM_MAX,
        membership: cyrillic_membership,
    },
    ScriptGroup {
        name: "Arabic",
        cm: &ARABIC_CM,
        check_nsm: true,
        nsm_max: 3,
        membership: arabic_membership,
    },
    ScriptGroup {
        name: "Hebrew",
        cm: &HEBREW_CM,
        check_nsm: true,
        nsm_max: 2,
        membership: hebrew_membership,
    },
    ScriptGroup {
        name: "Hangul",
        cm: &[],
        check_nsm: false,
        nsm_max: super::nsm::NSM_MAX,
        membership: hangul_membership,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greek_letters_belong_to_greek_group_only() {
        let greek = SCRIPT_GROUPS.iter().find(|g| g.name == "Greek").unwrap();
        assert!((greek.membership)(0x3B1)); // alpha
        let latin = SCRIPT_GROUPS.iter().find(|g| g.name == "Latin").unwrap();
        assert!(!(latin.membership)(0x3B1));
    }
}

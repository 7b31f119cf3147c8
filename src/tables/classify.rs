//! Per-codepoint character classification (`spec.md` §3 "Character Class").
//!
//! The partition is total: every codepoint is classified as exactly one
//! of `Valid`, `Mapped`, `Ignored`, `Disallowed`, or `Stop`. Bulk regular
//! ranges (ASCII, Latin-1, Greek, Cyrillic, fullwidth forms) are handled
//! arithmetically, following the teacher crate's
//! `unicode::fullwidth_to_halfwidth` pattern of range checks plus a fixed
//! offset rather than a lookup table per codepoint. Irregular one-off
//! mappings live in a small `phf::Map`.

use crate::Codepoint;
use crate::tables::nfc::{is_hangul_jamo, is_hangul_syllable};
use crate::tables::nsm::{ARABIC_NSM_EXTRA, HEBREW_NSM_EXTRA};
use crate::token::CpVec;
use phf::phf_map;

pub const CP_STOP: Codepoint = 0x002E; // '.'
pub const CP_UNDERSCORE: Codepoint = 0x005F; // '_'
pub const CP_HYPHEN: Codepoint = 0x002D; // '-'

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharClass {
    Valid,
    Mapped(CpVec),
    Ignored,
    Disallowed,
    Stop,
}

/// Irregular single-codepoint-to-sequence mappings that aren't expressible
/// as an arithmetic offset: symbols, roman numerals, a few presentation
/// forms. Every target codepoint here must itself classify as `Valid`.
static MAPPED_EXTRA: phf::Map<u32, &'static [u32]> = phf_map! {
    // Accented uppercase Greek letters: the tonos/dialytika shift isn't a
    // uniform offset from the plain uppercase block the way the rest of
    // Greek case-folding is, so each pairs with its lowercase letter.
    0x0386u32 => &[0x03AC], // Ά -> ά
    0x0388u32 => &[0x03AD], // Έ -> έ
    0x0389u32 => &[0x03AE], // Ή -> ή
    0x038Au32 => &[0x03AF], // Ί -> ί
    0x038Cu32 => &[0x03CC], // Ό -> ό
    0x038Eu32 => &[0x03CD], // Ύ -> ύ
    0x038Fu32 => &[0x03CE], // Ώ -> ώ
    0x03AAu32 => &[0x03CA], // Ϊ -> ϊ
    0x03ABu32 => &[0x03CB], // Ϋ -> ϋ
    0x2122u32 => &[0x74, 0x6D],       // ™ -> tm
    0x2160u32 => &[0x69],             // Ⅰ -> i
    0x2161u32 => &[0x69, 0x69],       // Ⅱ -> ii
    0x2162u32 => &[0x69, 0x69, 0x69], // Ⅲ -> iii
    0x2163u32 => &[0x69, 0x76],       // Ⅳ -> iv
    0x2164u32 => &[0x76],             // Ⅴ -> v
    0x2165u32 => &[0x76, 0x69],       // Ⅵ -> vi
    0x2166u32 => &[0x76, 0x69, 0x69], // Ⅶ -> vii
    0x2167u32 => &[0x76, 0x69, 0x69, 0x69], // Ⅷ -> viii
    0x2168u32 => &[0x69, 0x78],       // Ⅸ -> ix
    0x2169u32 => &[0x78],             // Ⅹ -> x
    0x216Au32 => &[0x78, 0x69],       // Ⅺ -> xi
    0x216Bu32 => &[0x78, 0x69, 0x69], // Ⅻ -> xii
    0xFB00u32 => &[0x66, 0x66],       // ﬀ -> ff
    0xFB01u32 => &[0x66, 0x69],       // ﬁ -> fi
    0xFB02u32 => &[0x66, 0x6C],       // ﬂ -> fl
    0xFB03u32 => &[0x66, 0x66, 0x69], // ﬃ -> ffi
    0xFB04u32 => &[0x66, 0x66, 0x6C], // ﬄ -> ffl
};

#[inline]
pub(crate) fn is_ascii_letter(cp: Codepoint) -> bool {
    (0x61..=0x7A).contains(&cp)
}

#[inline]
pub(crate) fn is_ascii_digit(cp: Codepoint) -> bool {
    (0x30..=0x39).contains(&cp)
}

#[inline]
pub(crate) fn is_ascii_upper(cp: Codepoint) -> bool {
    (0x41..=0x5A).contains(&cp)
}

/// Latin-1 Supplement letters, lowercase block (à-ÿ), excluding ÷ (0xF7).
#[inline]
pub(crate) fn is_latin1_lower(cp: Codepoint) -> bool {
    matches!(cp, 0xDF..=0xFF if cp != 0xF7) || matches!(cp, 0xAA | 0xB5 | 0xBA)
}

/// Latin-1 Supplement letters, uppercase block (À-Þ), excluding × (0xD7).
#[inline]
pub(crate) fn is_latin1_upper(cp: Codepoint) -> bool {
    matches!(cp, 0xC0..=0xDE if cp != 0xD7)
}

#[inline]
pub(crate) fn is_greek_lower(cp: Codepoint) -> bool {
    matches!(cp, 0x3B1..=0x3C9 | 0x3AC..=0x3AF | 0x3CA..=0x3CE | 0x390 | 0x3B0)
}

/// The plain uppercase block, Α-Ω, whose lowercase fold is a uniform
/// `+0x20` offset (handled arithmetically in [`classify`]).
#[inline]
fn is_greek_upper_plain(cp: Codepoint) -> bool {
    matches!(cp, 0x391..=0x3A9)
}

/// Accented uppercase letters (tonos/dialytika), whose lowercase fold is
/// irregular and lives in `MAPPED_EXTRA` instead.
#[inline]
fn is_greek_upper_accented(cp: Codepoint) -> bool {
    matches!(cp, 0x386 | 0x388..=0x38F | 0x3AA | 0x3AB)
}

/// Combined predicate for script-group membership, where the case-fold
/// mechanism doesn't matter — only "is this an uppercase Greek letter".
#[inline]
pub(crate) fn is_greek_upper(cp: Codepoint) -> bool {
    is_greek_upper_plain(cp) || is_greek_upper_accented(cp)
}

#[inline]
pub(crate) fn is_cyrillic_lower(cp: Codepoint) -> bool {
    matches!(cp, 0x430..=0x45F)
}

/// The standard uppercase block, А-Я, whose lowercase fold is a uniform
/// `+0x20` offset.
#[inline]
fn is_cyrillic_upper_plain(cp: Codepoint) -> bool {
    matches!(cp, 0x410..=0x42F)
}

/// The extended uppercase block (Ѐ-Џ: Ukrainian/Serbian/Macedonian
/// letters plus Ё), whose lowercase fold is a uniform `+0x50` offset —
/// a different constant from the standard block, not the same rule.
#[inline]
fn is_cyrillic_upper_extended(cp: Codepoint) -> bool {
    matches!(cp, 0x400..=0x40F)
}

#[inline]
pub(crate) fn is_cyrillic_upper(cp: Codepoint) -> bool {
    is_cyrillic_upper_plain(cp) || is_cyrillic_upper_extended(cp)
}

/// Arabic letters (main block, excluding the combining marks below).
#[inline]
pub(crate) fn is_arabic_letter(cp: Codepoint) -> bool {
    matches!(cp, 0x0621..=0x063A | 0x0641..=0x064A)
}

#[inline]
pub(crate) fn is_arabic_mark(cp: Codepoint) -> bool {
    ARABIC_NSM_EXTRA.contains(&cp)
}

/// Hebrew letters (consonants, main block).
#[inline]
pub(crate) fn is_hebrew_letter(cp: Codepoint) -> bool {
    matches!(cp, 0x05D0..=0x05EA)
}

#[inline]
pub(crate) fn is_hebrew_mark(cp: Codepoint) -> bool {
    HEBREW_NSM_EXTRA.contains(&cp)
}

#[inline]
pub(crate) fn is_fullwidth_letter_or_digit(cp: Codepoint) -> bool {
    matches!(cp, 0xFF10..=0xFF19 | 0xFF21..=0xFF3A | 0xFF41..=0xFF5A)
}

/// Diacritic combining marks, U+0300..=U+036F — the non-spacing-mark
/// block used by [`super::nsm`] and the per-group `cm` sets.
#[inline]
pub fn is_combining_diacritic(cp: Codepoint) -> bool {
    (0x0300..=0x036F).contains(&cp)
}

/// Classify one input codepoint into exactly one `CharClass` bucket.
pub fn classify(cp: Codepoint) -> CharClass {
    if cp == CP_STOP {
        return CharClass::Stop;
    }

    // Soft hyphen, FE0E (text variation selector) and a standalone FE0F
    // (emoji variation selector not consumed by an emoji match) are
    // silently dropped.
    if cp == 0x00AD || cp == 0xFE0E || cp == 0xFE0F {
        return CharClass::Ignored;
    }

    if is_ascii_letter(cp) || is_ascii_digit(cp) || cp == CP_UNDERSCORE || cp == CP_HYPHEN {
        return CharClass::Valid;
    }
    if is_ascii_upper(cp) {
        return CharClass::Mapped(CpVec::from_slice(&[cp + 0x20]));
    }

    if is_latin1_lower(cp) || is_combining_diacritic(cp) {
        return CharClass::Valid;
    }
    if is_latin1_upper(cp) {
        return CharClass::Mapped(CpVec::from_slice(&[cp + 0x20]));
    }

    if is_greek_lower(cp) {
        return CharClass::Valid;
    }
    // Plain uppercase folds by a uniform +0x20 offset; accented uppercase
    // (tonos/dialytika) doesn't follow that arithmetic and is handled by
    // the MAPPED_EXTRA lookup below instead.
    if is_greek_upper_plain(cp) {
        return CharClass::Mapped(CpVec::from_slice(&[cp + 0x20]));
    }

    if is_cyrillic_lower(cp) {
        return CharClass::Valid;
    }
    if is_cyrillic_upper_plain(cp) {
        return CharClass::Mapped(CpVec::from_slice(&[cp + 0x20]));
    }
    // The extended block (Ѐ-Џ) folds by +0x50, a different constant from
    // the standard block above.
    if is_cyrillic_upper_extended(cp) {
        return CharClass::Mapped(CpVec::from_slice(&[cp + 0x50]));
    }

    if is_arabic_letter(cp) || is_arabic_mark(cp) || is_hebrew_letter(cp) || is_hebrew_mark(cp) {
        return CharClass::Valid;
    }

    if is_hangul_syllable(cp) || is_hangul_jamo(cp) {
        return CharClass::Valid;
    }

    if is_fullwidth_letter_or_digit(cp) {
        // Fullwidth uppercase additionally folds to lowercase, matching
        // the ASCII-upper case above; fullwidth lowercase and digits only
        // need the halfwidth offset.
        let halfwidth = cp - 0xFEE0;
        let folded = if is_ascii_upper(halfwidth) {
            halfwidth + 0x20
        } else {
            halfwidth
        };
        return CharClass::Mapped(CpVec::from_slice(&[folded]));
    }

    if let Some(seq) = MAPPED_EXTRA.get(&cp) {
        return CharClass::Mapped(CpVec::from_slice(seq));
    }

    CharClass::Disallowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_upper_maps_to_lower() {
        assert_eq!(
            classify('A' as Codepoint),
            CharClass::Mapped(CpVec::from_slice(&['a' as Codepoint]))
        );
        assert_eq!(classify('a' as Codepoint), CharClass::Valid);
    }

    #[test]
    fn stop_is_dot_only() {
        assert_eq!(classify('.' as Codepoint), CharClass::Stop);
        assert_ne!(classify(',' as Codepoint), CharClass::Stop);
    }

    #[test]
    fn soft_hyphen_is_ignored() {
        assert_eq!(classify(0x00AD), CharClass::Ignored);
    }

    #[test]
    fn roman_numeral_maps_to_ascii_letters() {
        assert_eq!(
            classify(0x2165),
            CharClass::Mapped(CpVec::from_slice(&[0x76, 0x69]))
        );
    }

    #[test]
    fn zero_width_space_is_disallowed() {
        assert_eq!(classify(0x200B), CharClass::Disallowed);
    }

    #[test]
    fn zwj_standalone_is_disallowed() {
        assert_eq!(classify(0x200D), CharClass::Disallowed);
    }

    #[test]
    fn fullwidth_letter_maps_to_ascii() {
        assert_eq!(
            classify(0xFF21),
            CharClass::Mapped(CpVec::from_slice(&['a' as Codepoint]))
        );
    }

    #[test]
    fn greek_upper_maps_to_lower() {
        assert_eq!(
            classify(0x391),
            CharClass::Mapped(CpVec::from_slice(&[0x3B1]))
        );
        assert_eq!(classify(0x3B1), CharClass::Valid);
    }

    #[test]
    fn cyrillic_upper_maps_to_lower() {
        assert_eq!(
            classify(0x410),
            CharClass::Mapped(CpVec::from_slice(&[0x430]))
        );
    }

    #[test]
    fn accented_greek_upper_folds_irregularly() {
        // Ά (0x386) doesn't fold by the plain block's uniform +0x20.
        assert_eq!(
            classify(0x386),
            CharClass::Mapped(CpVec::from_slice(&[0x3AC]))
        );
    }

    #[test]
    fn cyrillic_extended_upper_folds_by_different_offset() {
        // Ё (0x401) folds by +0x50, not the standard block's +0x20 —
        // 0x401 + 0x20 would land on 0x421 (С), a different letter.
        assert_eq!(
            classify(0x401),
            CharClass::Mapped(CpVec::from_slice(&[0x451]))
        );
    }
}

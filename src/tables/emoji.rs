//! Emoji sequence table and greedy longest-match lookup (`spec.md` §3
//! "Emoji Entry", §4.2 step 1).
//!
//! `spec.md` §9 allows either a prefix trie keyed by codepoint with an
//! "FE0F-optional" edge marker, or a perfect hash from the canonical
//! no-FE0F key plus an on-the-fly FE0F-stripping pass at lookup. This
//! implementation takes the second approach: entries are stored as plain
//! `&'static [Codepoint]` no-FE0F keys in a list ordered longest-first,
//! and matching strips FE0F from the candidate window before comparing.
//! At the label sizes this crate processes (`spec.md` §9: "< 64
//! codepoints") and the modest size of the embedded table, a linear scan
//! per position is the same complexity class as a trie lookup and is far
//! simpler to keep correct.

use crate::Codepoint;
use crate::token::CpVec;

/// One emoji sequence as stored in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiEntry {
    /// Canonical form with FE0F already stripped; also the trie/lookup key.
    pub no_fe0f: &'static [Codepoint],
    /// Canonical form including every FE0F the reference renderer expects,
    /// used for beautified output (`spec.md` §4.5).
    pub normalized: &'static [Codepoint],
}

const EMOJI_TABLE: &[EmojiEntry] = &[
    // Family: man, woman, girl, boy (ZWJ sequence, no FE0F in this entry).
    EmojiEntry {
        no_fe0f: &[0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F467, 0x200D, 0x1F466],
        normalized: &[0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F467, 0x200D, 0x1F466],
    },
    // Person biking + male sign, ZWJ sequence with a required trailing FE0F.
    EmojiEntry {
        no_fe0f: &[0x1F6B4, 0x200D, 0x2642],
        normalized: &[0x1F6B4, 0x200D, 0x2642, 0xFE0F],
    },
    // Person blond hair, dark skin tone + female sign.
    EmojiEntry {
        no_fe0f: &[0x1F471, 0x1F3FF, 0x200D, 0x2640],
        normalized: &[0x1F471, 0x1F3FF, 0x200D, 0x2640, 0xFE0F],
    },
    // Person kneeling + female sign.
    EmojiEntry {
        no_fe0f: &[0x26F9, 0x200D, 0x2640],
        normalized: &[0x26F9, 0xFE0F, 0x200D, 0x2640],
    },
    // Man technologist.
    EmojiEntry {
        no_fe0f: &[0x1F468, 0x200D, 0x1F4BB],
        normalized: &[0x1F468, 0x200D, 0x1F4BB],
    },
    EmojiEntry {
        no_fe0f: &[0x1F468, 0x1F3FB],
        normalized: &[0x1F468, 0x1F3FB],
    },
    EmojiEntry {
        no_fe0f: &[0x1F600],
        normalized: &[0x1F600],
    },
    EmojiEntry {
        no_fe0f: &[0x1F4A9],
        normalized: &[0x1F4A9, 0xFE0F],
    },
    EmojiEntry {
        no_fe0f: &[0x2618],
        normalized: &[0x2618, 0xFE0F],
    },
];

/// Digit/`#`/`*` keycap sequences: `<basic cp> FE0F 20E3`.
const KEYCAP_BASES: &[Codepoint] = &[
    0x23, 0x2A, 0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39,
];

fn keycap_entry(base: Codepoint) -> ([Codepoint; 2], [Codepoint; 3]) {
    ([base, 0x20E3], [base, 0xFE0F, 0x20E3])
}

/// Greedily match the longest emoji sequence starting at `cps[0]`,
/// tolerating an FE0F inserted between any two codepoints of the
/// candidate's no-FE0F key (`spec.md` §4.2 step 1).
///
/// Returns the matched input length (in codepoints, FE0F included where
/// present) and the matched [`EmojiEntry`]-equivalent `(no_fe0f,
/// normalized)` pair.
pub fn longest_emoji_match(cps: &[Codepoint]) -> Option<(usize, CpVec, CpVec)> {
    let mut best: Option<(usize, CpVec, CpVec)> = None;

    for base in KEYCAP_BASES {
        let (no_fe0f, normalized) = keycap_entry(*base);
        if let Some(len) = match_fe0f_tolerant(cps, &no_fe0f)
            && best.as_ref().map(|(l, ..)| len > *l).unwrap_or(true) {
                best = Some((
                    len,
                    CpVec::from_slice(&no_fe0f),
                    CpVec::from_slice(&normalized),
                ));
            }
    }

    for entry in EMOJI_TABLE {
        if let Some(len) = match_fe0f_tolerant(cps, entry.no_fe0f)
            && best.as_ref().map(|(l, ..)| len > *l).unwrap_or(true) {
                best = Some((
                    len,
                    CpVec::from_slice(entry.no_fe0f),
                    CpVec::from_slice(entry.normalized),
                ));
            }
    }

    best
}

/// Try to match `key` against the start of `cps`, allowing an optional
/// FE0F to appear in the input between any two codepoints of `key` (and
/// before the first or after the last). Returns the number of input
/// codepoints consumed on success.
fn match_fe0f_tolerant(cps: &[Codepoint], key: &[Codepoint]) -> Option<usize> {
    let mut ci = 0; // cursor into cps
    let mut ki = 0; // cursor into key

    while ki < key.len() {
        if ci >= cps.len() {
            return None;
        }
        // `key` is always an FE0F-stripped canonical form, so any FE0F
        // seen in the input is an optional insertion to skip over.
        if cps[ci] == 0xFE0F {
            ci += 1;
            continue;
        }
        if cps[ci] != key[ki] {
            return None;
        }
        ci += 1;
        ki += 1;
    }
    // A trailing FE0F right after the fully-matched key is also consumed,
    // matching the reference behaviour of optional FE0F at sequence end.
    if ci < cps.len() && cps[ci] == 0xFE0F {
        ci += 1;
    }
    Some(ci)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_simple_emoji() {
        let cps = [0x1F600u32, 'x' as u32];
        let (len, no_fe0f, normalized) = longest_emoji_match(&cps).unwrap();
        assert_eq!(len, 1);
        assert_eq!(&no_fe0f[..], &[0x1F600]);
        assert_eq!(&normalized[..], &[0x1F600]);
    }

    #[test]
    fn matches_family_zwj_sequence() {
        let cps = [0x1F468u32, 0x200D, 0x1F469, 0x200D, 0x1F467, 0x200D, 0x1F466];
        let (len, ..) = longest_emoji_match(&cps).unwrap();
        assert_eq!(len, cps.len());
    }

    #[test]
    fn fe0f_insertion_does_not_break_match() {
        let base = [0x1F4A9u32];
        let with_fe0f = [0x1F4A9u32, 0xFE0F];
        let (len_a, ..) = longest_emoji_match(&base).unwrap();
        let (len_b, ..) = longest_emoji_match(&with_fe0f).unwrap();
        assert_eq!(len_a, 1);
        assert_eq!(len_b, 2);
    }

    #[test]
    fn matches_keycap_sequence() {
        let cps = [0x31u32, 0xFE0F, 0x20E3];
        let (len, no_fe0f, normalized) = longest_emoji_match(&cps).unwrap();
        assert_eq!(len, 3);
        assert_eq!(&no_fe0f[..], &[0x31, 0x20E3]);
        assert_eq!(&normalized[..], &[0x31, 0xFE0F, 0x20E3]);
    }

    #[test]
    fn non_emoji_does_not_match() {
        assert!(longest_emoji_match(&['a' as u32]).is_none());
    }
}

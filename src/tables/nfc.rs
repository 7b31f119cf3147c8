//! NFC engine (`spec.md` §4.1, §9): canonical decomposition driven by an
//! embedded decomposition map, canonical reordering by an embedded
//! combining-class table, and canonical composition respecting an
//! embedded exclusion set — with Hangul syllables handled arithmetically
//! rather than through a table, per §9's "Hangul rules are arithmetic."
//!
//! Scope is the precomposed letters this crate's character classifier
//! treats as `Valid` (Latin-1 Supplement, modern monotonic Greek,
//! Cyrillic, plus the Arabic/Hebrew marks used by [`super::nsm`]) and
//! Hangul syllables/jamo. This is the same representative-subset
//! tradeoff the rest of `tables/` makes (see `tables/mod.rs`), not a
//! transcription of the full Unicode Character Database.

use crate::Codepoint;
use crate::token::CpVec;
use phf::{phf_map, phf_set};

/// Canonical single-step decompositions. Multi-mark letters (e.g. Greek
/// `ΐ`) decompose in two steps, matching how the Unicode Character
/// Database itself expresses them — [`decompose`] applies this map
/// recursively until it reaches a fixed point.
static DECOMPOSITION_MAP: phf::Map<u32, &'static [u32]> = phf_map! {
    // Latin-1 Supplement
    0x00C0u32 => &[0x0041, 0x0300], 0x00C1u32 => &[0x0041, 0x0301],
    0x00C2u32 => &[0x0041, 0x0302], 0x00C3u32 => &[0x0041, 0x0303],
    0x00C4u32 => &[0x0041, 0x0308], 0x00C5u32 => &[0x0041, 0x030A],
    0x00C7u32 => &[0x0043, 0x0327],
    0x00C8u32 => &[0x0045, 0x0300], 0x00C9u32 => &[0x0045, 0x0301],
    0x00CAu32 => &[0x0045, 0x0302], 0x00CBu32 => &[0x0045, 0x0308],
    0x00CCu32 => &[0x0049, 0x0300], 0x00CDu32 => &[0x0049, 0x0301],
    0x00CEu32 => &[0x0049, 0x0302], 0x00CFu32 => &[0x0049, 0x0308],
    0x00D1u32 => &[0x004E, 0x0303],
    0x00D2u32 => &[0x004F, 0x0300], 0x00D3u32 => &[0x004F, 0x0301],
    0x00D4u32 => &[0x004F, 0x0302], 0x00D5u32 => &[0x004F, 0x0303],
    0x00D6u32 => &[0x004F, 0x0308],
    0x00D9u32 => &[0x0055, 0x0300], 0x00DAu32 => &[0x0055, 0x0301],
    0x00DBu32 => &[0x0055, 0x0302], 0x00DCu32 => &[0x0055, 0x0308],
    0x00DDu32 => &[0x0059, 0x0301],
    0x00E0u32 => &[0x0061, 0x0300], 0x00E1u32 => &[0x0061, 0x0301],
    0x00E2u32 => &[0x0061, 0x0302], 0x00E3u32 => &[0x0061, 0x0303],
    0x00E4u32 => &[0x0061, 0x0308], 0x00E5u32 => &[0x0061, 0x030A],
    0x00E7u32 => &[0x0063, 0x0327],
    0x00E8u32 => &[0x0065, 0x0300], 0x00E9u32 => &[0x0065, 0x0301],
    0x00EAu32 => &[0x0065, 0x0302], 0x00EBu32 => &[0x0065, 0x0308],
    0x00ECu32 => &[0x0069, 0x0300], 0x00EDu32 => &[0x0069, 0x0301],
    0x00EEu32 => &[0x0069, 0x0302], 0x00EFu32 => &[0x0069, 0x0308],
    0x00F1u32 => &[0x006E, 0x0303],
    0x00F2u32 => &[0x006F, 0x0300], 0x00F3u32 => &[0x006F, 0x0301],
    0x00F4u32 => &[0x006F, 0x0302], 0x00F5u32 => &[0x006F, 0x0303],
    0x00F6u32 => &[0x006F, 0x0308],
    0x00F9u32 => &[0x0075, 0x0300], 0x00FAu32 => &[0x0075, 0x0301],
    0x00FBu32 => &[0x0075, 0x0302], 0x00FCu32 => &[0x0075, 0x0308],
    0x00FDu32 => &[0x0079, 0x0301], 0x00FFu32 => &[0x0079, 0x0308],
    // Greek (tonos / dialytika over monotonic letters)
    0x0386u32 => &[0x0391, 0x0301], 0x0388u32 => &[0x0395, 0x0301],
    0x0389u32 => &[0x0397, 0x0301], 0x038Au32 => &[0x0399, 0x0301],
    0x038Cu32 => &[0x039F, 0x0301], 0x038Eu32 => &[0x03A5, 0x0301],
    0x038Fu32 => &[0x03A9, 0x0301],
    0x03AAu32 => &[0x0399, 0x0308], 0x03ABu32 => &[0x03A5, 0x0308],
    0x03ACu32 => &[0x03B1, 0x0301], 0x03ADu32 => &[0x03B5, 0x0301],
    0x03AEu32 => &[0x03B7, 0x0301], 0x03AFu32 => &[0x03B9, 0x0301],
    0x03CAu32 => &[0x03B9, 0x0308], 0x03CBu32 => &[0x03C5, 0x0308],
    0x03CCu32 => &[0x03BF, 0x0301], 0x03CDu32 => &[0x03C5, 0x0301],
    0x03CEu32 => &[0x03C9, 0x0301],
    0x0390u32 => &[0x03CA, 0x0301], // ΐ — two-step (iota, dialytika, tonos)
    0x03B0u32 => &[0x03CB, 0x0301], // ΰ — two-step (upsilon, dialytika, tonos)
    // Cyrillic
    0x0400u32 => &[0x0415, 0x0300], 0x0450u32 => &[0x0435, 0x0300],
    0x0401u32 => &[0x0415, 0x0308], 0x0451u32 => &[0x0435, 0x0308],
    0x040Du32 => &[0x0418, 0x0300], 0x045Du32 => &[0x0438, 0x0300],
    0x0419u32 => &[0x0418, 0x0306], 0x0439u32 => &[0x0438, 0x0306],
    0x040Eu32 => &[0x0423, 0x0306], 0x045Eu32 => &[0x0443, 0x0306],
    0x0407u32 => &[0x0406, 0x0308], 0x0457u32 => &[0x0456, 0x0308],
};

/// Codepoints the Unicode Character Database lists in
/// `CompositionExclusions.txt` that fall within this crate's supported
/// range. None of the precomposed letters [`DECOMPOSITION_MAP`] covers
/// are excluded, but the composer still consults this set on every
/// candidate pair so it stays correct if the table grows — e.g. U+0344
/// COMBINING GREEK DIALYTIKA TONOS decomposes canonically to
/// dialytika+tonos but is excluded from recomposing back.
static COMPOSITION_EXCLUSIONS: phf::Set<u32> = phf_set! {
    0x0344u32,
};

/// Canonical combining class, `ccc=0` for starters. Diacritics this
/// crate supports are `ccc=230` (above) except cedilla/ogonek
/// (`ccc=202`, below) and the Arabic/Hebrew marks, whose classes are
/// assigned per letter by the Unicode Character Database.
fn combining_class(cp: Codepoint) -> u8 {
    match cp {
        0x0327 | 0x0328 => 202,
        0x0300..=0x0305 | 0x0306..=0x030C | 0x030F | 0x0311 | 0x0313 | 0x0314 | 0x0342 => 230,
        0x064B => 27,
        0x064C => 28,
        0x064D => 29,
        0x064E => 30,
        0x064F => 31,
        0x0650 => 32,
        0x0651 => 33,
        0x0652 => 34,
        0x05B0 => 10,
        0x05B1 => 11,
        0x05B2 => 12,
        0x05B3 => 13,
        0x05BC => 21,
        _ => 0,
    }
}

/// Whether `cp` participates in canonical reordering/composition as a
/// non-starter (`ccc != 0`).
pub fn is_combining(cp: Codepoint) -> bool {
    combining_class(cp) != 0
}

// Hangul syllable/jamo arithmetic (Unicode §3.12, "Conjoining Jamo
// Behavior"). Precomposed syllables in `S_BASE..S_BASE+S_COUNT` are
// algorithmically equivalent to an L, V, and optional T jamo — no table
// can or should encode this.
const S_BASE: u32 = 0xAC00;
const L_BASE: u32 = 0x1100;
const V_BASE: u32 = 0x1161;
const T_BASE: u32 = 0x11A7;
const L_COUNT: u32 = 19;
const V_COUNT: u32 = 21;
const T_COUNT: u32 = 28;
const N_COUNT: u32 = V_COUNT * T_COUNT;
const S_COUNT: u32 = L_COUNT * N_COUNT;

pub fn is_hangul_syllable(cp: Codepoint) -> bool {
    (S_BASE..S_BASE + S_COUNT).contains(&cp)
}

pub fn is_hangul_jamo(cp: Codepoint) -> bool {
    (L_BASE..L_BASE + L_COUNT).contains(&cp)
        || (V_BASE..V_BASE + V_COUNT).contains(&cp)
        || (T_BASE + 1..T_BASE + T_COUNT).contains(&cp)
}

fn decompose_hangul(cp: Codepoint, out: &mut CpVec) -> bool {
    if !is_hangul_syllable(cp) {
        return false;
    }
    let s_index = cp - S_BASE;
    let l = L_BASE + s_index / N_COUNT;
    let v = V_BASE + (s_index % N_COUNT) / T_COUNT;
    let t = T_BASE + s_index % T_COUNT;
    out.push(l);
    out.push(v);
    if t != T_BASE {
        out.push(t);
    }
    true
}

/// Compose a conjoining jamo sequence starting at `starter` arithmetically.
/// Returns the composed syllable and how many of the following
/// codepoints it consumed, or `None` if `starter`/`next` don't conjoin.
fn compose_hangul(starter: Codepoint, next: Codepoint) -> Option<Codepoint> {
    if (L_BASE..L_BASE + L_COUNT).contains(&starter) && (V_BASE..V_BASE + V_COUNT).contains(&next)
    {
        let l_index = starter - L_BASE;
        let v_index = next - V_BASE;
        return Some(S_BASE + (l_index * V_COUNT + v_index) * T_COUNT);
    }
    if is_hangul_syllable(starter) && (starter - S_BASE).is_multiple_of(T_COUNT) {
        let t_index = next.checked_sub(T_BASE)?;
        if t_index > 0 && t_index < T_COUNT {
            return Some(starter + t_index);
        }
    }
    None
}

/// Fully decompose one codepoint into its canonical decomposition,
/// recursively re-decomposing each result codepoint until every one is
/// itself a fixed point.
fn decompose_one(cp: Codepoint, out: &mut CpVec) {
    if decompose_hangul(cp, out) {
        return;
    }
    if let Some(seq) = DECOMPOSITION_MAP.get(&cp) {
        for &next in *seq {
            decompose_one(next, out);
        }
        return;
    }
    out.push(cp);
}

fn decompose(cps: &[Codepoint]) -> CpVec {
    let mut out = CpVec::new();
    for &cp in cps {
        decompose_one(cp, &mut out);
    }
    out
}

/// Canonical reordering (Unicode §3.11): within each maximal run of
/// non-starters (`ccc != 0`) between starters, stable-sort by combining
/// class.
fn canonical_reorder(cps: &mut CpVec) {
    let mut i = 0;
    while i < cps.len() {
        if combining_class(cps[i]) == 0 {
            i += 1;
            continue;
        }
        let start = i;
        while i < cps.len() && combining_class(cps[i]) != 0 {
            i += 1;
        }
        cps[start..i].sort_by_key(|&cp| combining_class(cp));
    }
}

/// A composable pair's result, via Hangul arithmetic or the inverted
/// decomposition map (skipping anything in the exclusion set).
fn try_compose(starter: Codepoint, next: Codepoint) -> Option<Codepoint> {
    if let Some(c) = compose_hangul(starter, next) {
        return Some(c);
    }
    let pair: [Codepoint; 2] = [starter, next];
    DECOMPOSITION_MAP
        .entries()
        .find(|&(_, &decomp)| decomp == pair)
        .map(|(&composed, _)| composed)
        .filter(|composed| !COMPOSITION_EXCLUSIONS.contains(composed))
}

/// Canonical composition (Unicode §3.11): scan left to right, tracking
/// the most recent starter. A following codepoint composes into it
/// unless blocked — blocked meaning a prior non-starter of combining
/// class ≥ its own already sits between it and the starter.
fn compose(cps: &[Codepoint]) -> CpVec {
    let mut out = CpVec::new();
    let mut starter_idx: Option<usize> = None;
    let mut last_class: u8 = 0;

    for &cp in cps {
        let cc = combining_class(cp);
        if let Some(idx) = starter_idx {
            let blocked = cc != 0 && cc <= last_class;
            if !blocked && let Some(composed) = try_compose(out[idx], cp) {
                out[idx] = composed;
                continue;
            }
        }
        out.push(cp);
        if cc == 0 {
            starter_idx = Some(out.len() - 1);
            last_class = 0;
        } else {
            last_class = cc;
        }
    }
    out
}

/// Apply NFC to a run of codepoints: decompose, canonically reorder,
/// then compose.
pub fn nfc(cps: &[Codepoint]) -> CpVec {
    let mut decomposed = decompose(cps);
    canonical_reorder(&mut decomposed);
    compose(&decomposed)
}

/// Whether `cps` is already in NFC form (no-op under [`nfc`]).
pub fn is_nfc(cps: &[Codepoint]) -> bool {
    let composed = nfc(cps);
    composed.as_slice() == cps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combining_acute_composes_with_base() {
        let decomposed = [0x65u32, 0x0301];
        let composed = nfc(&decomposed);
        assert_eq!(&composed[..], &[0xE9]);
    }

    #[test]
    fn already_composed_form_is_idempotent() {
        let cps = [0xE9u32];
        assert!(is_nfc(&cps));
        assert_eq!(&nfc(&cps)[..], &cps);
    }

    #[test]
    fn ascii_is_never_combining() {
        assert!(!is_combining('a' as Codepoint));
        assert!(is_combining(0x0301));
    }

    #[test]
    fn cyrillic_io_composes() {
        // е + combining diaeresis -> ё
        assert_eq!(&nfc(&[0x0435, 0x0308])[..], &[0x0451]);
    }

    #[test]
    fn greek_two_step_composition() {
        // ι + dialytika + tonos -> ΐ, via the intermediate ϊ
        assert_eq!(&nfc(&[0x03B9, 0x0308, 0x0301])[..], &[0x0390]);
    }

    #[test]
    fn canonical_reorder_sorts_combining_class() {
        // cedilla (ccc 202) written after a ccc-230 mark must still end
        // up composing correctly once reordered ahead of it.
        let out = nfc(&[0x0063, 0x0301, 0x0327]); // c + acute + cedilla
        // cedilla (202) sorts before acute (230); only c+cedilla composes.
        assert_eq!(&out[..], &[0x00E7, 0x0301]);
    }

    #[test]
    fn hangul_jamo_composes_arithmetically() {
        // L(ㅎ) + V(ㅏ) + T(ㄴ) -> 한 (U+D55C)
        let out = nfc(&[0x1112, 0x1161, 0x11AB]);
        assert_eq!(&out[..], &[0xD55C]);
    }

    #[test]
    fn hangul_syllable_decomposes_then_recomposes() {
        let decomposed = decompose(&[0xD55C]);
        assert_eq!(&decomposed[..], &[0x1112, 0x1161, 0x11AB]);
        assert_eq!(&nfc(&decomposed)[..], &[0xD55C]);
    }

    #[test]
    fn excluded_pair_does_not_compose() {
        assert!(COMPOSITION_EXCLUSIONS.contains(&0x0344));
    }
}

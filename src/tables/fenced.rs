//! Fenced codepoints (`spec.md` §3 "Fenced Set", §4.4 step 9).
//!
//! A fenced codepoint may not appear as the first or last codepoint of a
//! label, nor adjacent to another fenced codepoint. ASCII `-` is
//! deliberately excluded: the label-extension rule (§4.4 step 6) already
//! governs hyphens at positions 3-4, and including it here would make
//! ordinary hyphenated labels like `foo-bar` fail on the adjacency/edge
//! checks for the wrong reason.

use crate::Codepoint;

static FENCED: &[Codepoint] = &[
    0x2019, // right single quotation mark
    0x2010, // hyphen
    0x00B7, // middle dot
    0x2044, // fraction slash
    0x30FB, // katakana middle dot
];

pub fn is_fenced(cp: Codepoint) -> bool {
    FENCED.contains(&cp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_dot_is_fenced() {
        assert!(is_fenced(0x00B7));
    }

    #[test]
    fn ascii_hyphen_is_not_fenced() {
        assert!(!is_fenced(0x2D));
    }
}

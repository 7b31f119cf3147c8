//! Token stream produced by the tokenizer (`spec.md` §3 "Token", §4.2).
//!
//! Modeled as a tagged sum type with exhaustive matching, per `spec.md` §9:
//! each variant carries only the fields the spec lists for it.

use crate::Codepoint;
use smallvec::SmallVec;

/// Small, usually-stack-allocated codepoint buffer. Most tokens hold one
/// to a handful of codepoints; `SmallVec` avoids a heap allocation for
/// the common case, matching the teacher crate's use of `smallvec` for
/// its hot-path buffers.
pub type CpVec = SmallVec<[Codepoint; 8]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A maximal run of valid codepoints from a single input region.
    Valid { cps: CpVec },
    /// One input codepoint, mapped to one or more output codepoints.
    Mapped { src: Codepoint, cps: CpVec },
    /// One silently-dropped input codepoint.
    Ignored { src: Codepoint },
    /// One codepoint that is outright disallowed; retained for diagnostics.
    Disallowed { src: Codepoint },
    /// The label separator, U+002E.
    Stop,
    /// A run of codepoints that required NFC composition to reach its
    /// canonical form.
    Nfc { input_cps: CpVec, output_cps: CpVec },
    /// One matched emoji sequence from the emoji trie.
    Emoji {
        input_cps: CpVec,
        normalized_cps: CpVec,
        no_fe0f_cps: CpVec,
    },
}

impl Token {
    /// Number of input codepoints this token consumed, for byte-coverage
    /// bookkeeping (`spec.md` §8 "tokenize(x) preserves input byte coverage").
    pub fn input_len(&self) -> usize {
        match self {
            Token::Valid { cps } => cps.len(),
            Token::Mapped { .. } => 1,
            Token::Ignored { .. } => 1,
            Token::Disallowed { .. } => 1,
            Token::Stop => 1,
            Token::Nfc { input_cps, .. } => input_cps.len(),
            Token::Emoji { input_cps, .. } => input_cps.len(),
        }
    }

    /// True for tokens that contribute codepoints to a label's canonical
    /// output (`Valid`, `Mapped`, `Nfc`, `Emoji`); false for `Ignored`,
    /// `Disallowed`, `Stop`.
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            Token::Valid { .. } | Token::Mapped { .. } | Token::Nfc { .. }
        )
    }

    pub fn is_emoji(&self) -> bool {
        matches!(self, Token::Emoji { .. })
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Token::Ignored { .. })
    }

    pub fn is_disallowed(&self) -> bool {
        matches!(self, Token::Disallowed { .. })
    }

    pub fn is_stop(&self) -> bool {
        matches!(self, Token::Stop)
    }

    /// Canonical output codepoints this token contributes to `normalize`,
    /// in order. For `Emoji` this is the FE0F-stripped form (`spec.md`
    /// §4.5: "normalize ... strips emoji presentation selectors"); empty
    /// for `Ignored`/`Disallowed`/`Stop`.
    pub fn output_cps(&self) -> &[Codepoint] {
        match self {
            Token::Valid { cps } => cps,
            Token::Mapped { cps, .. } => cps,
            Token::Nfc { output_cps, .. } => output_cps,
            Token::Emoji { no_fe0f_cps, .. } => no_fe0f_cps,
            Token::Ignored { .. } | Token::Disallowed { .. } | Token::Stop => &[],
        }
    }

    /// Display codepoints this token contributes to `beautify`, in order.
    /// Identical to [`Token::output_cps`] except for `Emoji`, which restores
    /// the FE0F presentation selectors (`spec.md` §4.5: "beautify ... restores
    /// emoji presentation selectors").
    pub fn display_cps(&self) -> &[Codepoint] {
        match self {
            Token::Emoji { normalized_cps, .. } => normalized_cps,
            _ => self.output_cps(),
        }
    }
}

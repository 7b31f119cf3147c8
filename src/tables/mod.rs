//! Static reference data driving the tokenizer and validator.
//!
//! `spec.md` §1 places the on-disk encoding of this data out of scope and
//! §6 says the core "consumes the data through the abstract interfaces...
//! the encoding is an implementation detail." This module is that detail:
//! `phf`-backed maps/sets for irregular lookups (matching the teacher
//! crate's `lang::data` use of `phf_map!` for per-language tables) plus
//! plain `&'static` slices and arithmetic range checks for the bulk,
//! regular data (ASCII/Latin/Greek/Cyrillic case folding, fullwidth
//! folding), mirroring `spec.md` §9's guidance that "naive ... is
//! acceptable at label sizes seen in practice" and that Hangul-style
//! arithmetic rules "should not sit in tables."
//!
//! The embedded data here is a representative, internally-consistent
//! subset of the official ENSIP-15 dataset (full coverage of ASCII,
//! Latin-1, Greek, Cyrillic, and a sample of ZWJ/keycap emoji sequences)
//! rather than a transcription of the ~100k-codepoint reference file —
//! see `SPEC_FULL.md` §10.3.

pub mod classify;
pub mod confusable;
pub mod emoji;
pub mod fenced;
pub mod nfc;
pub mod nsm;
pub mod script;

pub use classify::{CharClass, classify};
pub use confusable::{CONFUSABLE_SETS, ConfusableSet};
pub use emoji::{EmojiEntry, longest_emoji_match};
pub use fenced::is_fenced;
pub use nfc::{is_combining, is_hangul_jamo, is_hangul_syllable, is_nfc, nfc};
pub use nsm::{NSM_MAX, is_nsm};
pub use script::{SCRIPT_GROUPS, ScriptGroup};

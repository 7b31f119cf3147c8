//! Error taxonomy for the ENSIP-15 normalization core.
//!
//! One flat `thiserror` enum per crate boundary, matching the teacher
//! crate's `NormyError`/`StageError` split: `ProcessError` covers every
//! failure a call to `normalize`/`beautify`/`tokenize`/`process` can
//! produce, `TableError` covers static-table construction only and is
//! never returned from a normalization call.

use crate::Codepoint;
use thiserror::Error;

/// Failure building the embedded static reference tables.
///
/// Construction of the tables embedded in this crate cannot actually fail
/// at runtime (they are compiled-in `phf` literals), but the type exists
/// so callers who substitute fixture tables (see `spec.md` §9 "Shared
/// static tables") have a place to report their own construction errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("static table inconsistency: {0}")]
    Inconsistent(&'static str),
}

/// Every way a label or name can fail to normalize.
///
/// Each variant that names an offending codepoint carries it so callers
/// can highlight the input (`spec.md` §7). `label_index` is attached by
/// the top-level driver, not by the validator itself, since the validator
/// operates on a single label at a time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProcessErrorKind {
    #[error("invalid UTF-8 input")]
    InvalidUtf8,

    #[error("label is empty")]
    EmptyLabel,

    #[error("disallowed character U+{0:04X}")]
    DisallowedCharacter(Codepoint),

    #[error("disallowed sequence")]
    DisallowedSequence,

    #[error("invalid label extension (chars 3-4 are both hyphen)")]
    InvalidLabelExtension,

    #[error("underscore may only appear at the start of a label")]
    UnderscoreInMiddle,

    #[error("label starts with a combining mark")]
    LeadingCombiningMark,

    #[error("combining mark directly follows an emoji")]
    CombiningMarkAfterEmoji,

    #[error("combining mark directly follows a fenced character")]
    CombiningMarkAfterFenced,

    #[error("combining mark U+{0:04X} is not permitted in this script group")]
    DisallowedCombiningMark(Codepoint),

    #[error("label starts with a non-spacing mark")]
    LeadingNSM,

    #[error("duplicate non-spacing mark U+{0:04X} in one run")]
    DuplicateNSM(Codepoint),

    #[error("too many consecutive non-spacing marks")]
    ExcessiveNSM,

    #[error("non-spacing mark is not valid after this base character")]
    InvalidNSMBase,

    #[error("fenced character cannot begin a label")]
    FencedLeading,

    #[error("fenced character cannot end a label")]
    FencedTrailing,

    #[error("two fenced characters cannot be adjacent")]
    FencedAdjacent,

    #[error("label mixes codepoints from more than one script group")]
    MixedScriptGroups,

    #[error("label is a whole-script confusable")]
    WholeScriptConfusable,

    #[error(transparent)]
    BadStaticData(#[from] TableError),
}

/// Top-level error returned by `normalize`/`beautify`/`process`.
///
/// Wraps a [`ProcessErrorKind`] with the one-based index of the label that
/// failed, as required by `spec.md` §4.4 "Failure semantics".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("label {label_index}: {kind}")]
pub struct ProcessError {
    pub label_index: usize,
    pub kind: ProcessErrorKind,
}

impl ProcessError {
    pub fn new(label_index: usize, kind: ProcessErrorKind) -> Self {
        Self { label_index, kind }
    }
}

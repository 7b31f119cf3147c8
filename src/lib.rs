#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! ENSIP-15 name normalization core: tokenizer, NFC engine, script-group
//! validator, and output assembler.
//!
//! The public surface is four functions — [`normalize`], [`beautify`],
//! [`tokenize`], and [`process`] — all synchronous and single-threaded
//! per call, operating over the static reference tables in [`tables`].

pub mod error;
pub mod label;
pub mod output;
pub mod tables;
pub mod token;
pub mod tokenizer;
pub mod validate;

/// A Unicode scalar value, U+0000..=U+10FFFF excluding surrogates.
pub type Codepoint = u32;

pub use error::{ProcessError, ProcessErrorKind, TableError};
pub use output::Processed;
pub use token::Token;
pub use validate::ValidatedLabel;

use std::borrow::Cow;

use label::split_labels;
use tokenizer::tokenize as tokenize_raw;
use validate::validate_label;

/// Tokenize, split, and validate `input`, returning every label in
/// validated form or the first failure with its one-based label index.
fn run(input: &[u8]) -> Result<Vec<ValidatedLabel>, ProcessError> {
    let tokens = tokenize_raw(input, true).map_err(|kind| ProcessError::new(0, kind))?;
    let labels = split_labels(tokens)
        .map_err(|idx| ProcessError::new(idx + 1, ProcessErrorKind::EmptyLabel))?;

    let mut validated = Vec::with_capacity(labels.len());
    for (i, label) in labels.into_iter().enumerate() {
        let v = validate_label(label).map_err(|kind| ProcessError::new(i + 1, kind))?;
        validated.push(v);
    }
    Ok(validated)
}

/// Normalize `text` to its canonical form. Returned borrowed, with no
/// allocation, when `text` already equals its canonical form.
pub fn normalize(text: &str) -> Result<Cow<'_, str>, ProcessError> {
    let labels = run(text.as_bytes())?;
    let out = output::assemble(&labels, false);
    Ok(borrow_if_unchanged(text, out))
}

/// As [`normalize`], but applies the xi-capitalization beautification
/// rule to non-Greek labels and restores emoji presentation selectors.
pub fn beautify(text: &str) -> Result<Cow<'_, str>, ProcessError> {
    let labels = run(text.as_bytes())?;
    let out = output::assemble(&labels, true);
    Ok(borrow_if_unchanged(text, out))
}

fn borrow_if_unchanged(text: &str, out: String) -> Cow<'_, str> {
    if out == text {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(out)
    }
}

/// [`normalize`] over raw bytes, for callers that have not yet validated
/// UTF-8 (`spec.md` §7's `InvalidUtf8` error path).
pub fn normalize_bytes(input: &[u8]) -> Result<Vec<u8>, ProcessError> {
    let labels = run(input)?;
    Ok(output::assemble(&labels, false).into_bytes())
}

/// [`beautify`] over raw bytes, for callers that have not yet validated
/// UTF-8.
pub fn beautify_bytes(input: &[u8]) -> Result<Vec<u8>, ProcessError> {
    let labels = run(input)?;
    Ok(output::assemble(&labels, true).into_bytes())
}

/// Expose the raw token stream for `text`, without label splitting or
/// validation.
pub fn tokenize(text: &str) -> Vec<Token> {
    tokenize_raw(text.as_bytes(), true).expect("str is already valid UTF-8")
}

/// [`tokenize`] over raw bytes, for callers that have not yet validated
/// UTF-8.
pub fn tokenize_bytes(input: &[u8]) -> Result<Vec<Token>, ProcessError> {
    tokenize_raw(input, true).map_err(|kind| ProcessError::new(0, kind))
}

/// Tokenize, split, and validate `text`, returning structured label
/// metadata without materializing a string.
pub fn process(text: &str) -> Result<Processed, ProcessError> {
    let labels = run(text.as_bytes())?;
    Ok(Processed { labels })
}

/// [`process`] over raw bytes, for callers that have not yet validated
/// UTF-8.
pub fn process_bytes(input: &[u8]) -> Result<Processed, ProcessError> {
    let labels = run(input)?;
    Ok(Processed { labels })
}

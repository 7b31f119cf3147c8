//! Tokenizer: UTF-8 decode, greedy emoji-first scan, character
//! classification, optional NFC coalescing (`spec.md` §4.2).

use crate::Codepoint;
use crate::error::ProcessErrorKind;
use crate::tables::{self, CharClass};
use crate::token::{CpVec, Token};

/// Decode `raw` as UTF-8 and walk it into a token stream.
///
/// At every cursor position the first of these that applies wins: a
/// greedy longest emoji match, the stop codepoint, a valid codepoint
/// (extending a pending `Valid` run), a mapped codepoint (flushing the
/// pending run first), an ignored codepoint, or else `Disallowed`. When
/// `apply_nfc` is set, any `Valid`/`Mapped` run that isn't already in NFC
/// is collapsed into an `Nfc` token after the scan.
pub fn tokenize(raw: &[u8], apply_nfc: bool) -> Result<Vec<Token>, ProcessErrorKind> {
    let text = simdutf8::basic::from_utf8(raw).map_err(|_| ProcessErrorKind::InvalidUtf8)?;
    let cps: Vec<Codepoint> = text.chars().map(|c| c as Codepoint).collect();

    let mut tokens: Vec<Token> = Vec::new();
    let mut pending_valid: CpVec = CpVec::new();
    let mut i = 0usize;

    while i < cps.len() {
        if let Some((len, no_fe0f_cps, normalized_cps)) = tables::longest_emoji_match(&cps[i..]) {
            flush_valid(&mut pending_valid, &mut tokens);
            let input_cps = CpVec::from_slice(&cps[i..i + len]);
            tokens.push(Token::Emoji {
                input_cps,
                normalized_cps,
                no_fe0f_cps,
            });
            i += len;
            continue;
        }

        let cp = cps[i];
        match tables::classify(cp) {
            CharClass::Stop => {
                flush_valid(&mut pending_valid, &mut tokens);
                tokens.push(Token::Stop);
            }
            CharClass::Valid => pending_valid.push(cp),
            CharClass::Mapped(seq) => {
                flush_valid(&mut pending_valid, &mut tokens);
                tokens.push(Token::Mapped { src: cp, cps: seq });
            }
            CharClass::Ignored => {
                flush_valid(&mut pending_valid, &mut tokens);
                tokens.push(Token::Ignored { src: cp });
            }
            CharClass::Disallowed => {
                flush_valid(&mut pending_valid, &mut tokens);
                tokens.push(Token::Disallowed { src: cp });
            }
        }
        i += 1;
    }
    flush_valid(&mut pending_valid, &mut tokens);

    if apply_nfc {
        tokens = coalesce_nfc_runs(tokens);
    }

    Ok(tokens)
}

/// Merge each maximal run of `Valid`/`Mapped` tokens — skipping over any
/// `Ignored` tokens interleaved in it, which contribute no text — into a
/// single `Nfc` token when the run's concatenated text isn't already in
/// NFC (`spec.md` §4.2: "a following combining mark must be checked
/// against the base it composes with, not in isolation"). A composed
/// sequence that the tokenizer only ever sees split across adjacent
/// tokens (e.g. an uppercase letter folded by `Mapped` immediately
/// followed by a combining mark as its own `Valid` run) would otherwise
/// never reach the NFC check.
fn coalesce_nfc_runs(tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        if !matches!(tokens[i], Token::Valid { .. } | Token::Mapped { .. }) {
            out.push(tokens[i].clone());
            i += 1;
            continue;
        }
        let start = i;
        let mut j = i;
        while j < tokens.len() && is_text_or_ignored(&tokens[j]) {
            j += 1;
        }
        let run = &tokens[start..j];

        let mut text_cps = CpVec::new();
        for tok in run {
            match tok {
                Token::Valid { cps } => text_cps.extend(cps.iter().copied()),
                Token::Mapped { cps, .. } => text_cps.extend(cps.iter().copied()),
                Token::Ignored { .. } => {}
                _ => unreachable!("run only contains Valid/Mapped/Ignored"),
            }
        }

        if tables::is_nfc(&text_cps) {
            out.extend_from_slice(run);
        } else {
            let mut input_cps = CpVec::new();
            for tok in run {
                match tok {
                    Token::Valid { cps } => input_cps.extend(cps.iter().copied()),
                    Token::Mapped { src, .. } => input_cps.push(*src),
                    Token::Ignored { src } => input_cps.push(*src),
                    _ => unreachable!("run only contains Valid/Mapped/Ignored"),
                }
            }
            let output_cps = tables::nfc(&text_cps);
            out.push(Token::Nfc {
                input_cps,
                output_cps,
            });
        }
        i = j;
    }
    out
}

fn is_text_or_ignored(tok: &Token) -> bool {
    matches!(
        tok,
        Token::Valid { .. } | Token::Mapped { .. } | Token::Ignored { .. }
    )
}

fn flush_valid(pending: &mut CpVec, tokens: &mut Vec<Token>) {
    if !pending.is_empty() {
        tokens.push(Token::Valid {
            cps: std::mem::take(pending),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_run_becomes_one_valid_token() {
        let tokens = tokenize(b"hello", false).unwrap();
        assert_eq!(tokens, vec![Token::Valid { cps: CpVec::from_slice(&[
            'h' as u32, 'e' as u32, 'l' as u32, 'l' as u32, 'o' as u32
        ]) }]);
    }

    #[test]
    fn dot_splits_into_stop_token() {
        let tokens = tokenize(b"a.b", false).unwrap();
        assert!(tokens.iter().any(|t| t.is_stop()));
    }

    #[test]
    fn uppercase_becomes_mapped() {
        let tokens = tokenize(b"A", false).unwrap();
        assert_eq!(
            tokens,
            vec![Token::Mapped {
                src: 'A' as u32,
                cps: CpVec::from_slice(&['a' as u32])
            }]
        );
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let err = tokenize(&[0xFF, 0xFE], false).unwrap_err();
        assert_eq!(err, ProcessErrorKind::InvalidUtf8);
    }

    #[test]
    fn family_zwj_emoji_is_one_token() {
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
        let tokens = tokenize(family.as_bytes(), false).unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_emoji());
    }

    #[test]
    fn soft_hyphen_is_dropped_as_ignored() {
        let tokens = tokenize("test\u{00AD}name".as_bytes(), false).unwrap();
        assert!(tokens.iter().any(|t| t.is_ignored()));
    }

    #[test]
    fn decomposed_accent_collapses_to_nfc_token() {
        let input = "cafe\u{0301}"; // cafe + combining acute
        let tokens = tokenize(input.as_bytes(), true).unwrap();
        assert!(tokens.iter().any(|t| matches!(t, Token::Nfc { .. })));
    }

    #[test]
    fn mapped_letter_composes_with_following_combining_mark() {
        // "E" folds via a standalone `Mapped` token; the combining acute
        // that follows is its own `Valid` run. Neither is NFC in
        // isolation, so only a cross-token check composes them into é.
        let input = "E\u{0301}";
        let tokens = tokenize(input.as_bytes(), true).unwrap();
        assert_eq!(
            tokens,
            vec![Token::Nfc {
                input_cps: CpVec::from_slice(&['E' as u32, 0x0301]),
                output_cps: CpVec::from_slice(&[0x00E9]),
            }]
        );
    }
}

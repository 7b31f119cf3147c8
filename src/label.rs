//! Label Splitter: groups a token stream into labels on `Stop` tokens,
//! rejecting empty labels (`spec.md` §4.3).

use crate::token::{CpVec, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Ascii,
    Emoji,
    Greek,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub tokens: Vec<Token>,
    pub input_cps: CpVec,
    /// `normalize`'s output: canonical codepoints, FE0F-stripped emoji.
    pub normalized_cps: CpVec,
    /// `beautify`'s output: canonical codepoints with FE0F-bearing emoji
    /// (the xi-to-capital swap is applied later, in `output::assemble`,
    /// since it depends on the label's script group).
    pub display_cps: CpVec,
}

/// Split `tokens` on `Stop` into labels. A label is empty, and therefore
/// rejected, when every token in it is `Ignored` (or it holds no tokens
/// at all) — this covers a leading stop, a trailing stop, and two
/// consecutive stops alike.
///
/// On failure returns the zero-based index of the offending label.
pub fn split_labels(tokens: Vec<Token>) -> Result<Vec<Label>, usize> {
    let mut labels = Vec::new();
    let mut current: Vec<Token> = Vec::new();

    for tok in tokens {
        if tok.is_stop() {
            finish_label(&mut current, &mut labels).map_err(|()| labels.len())?;
        } else {
            current.push(tok);
        }
    }
    finish_label(&mut current, &mut labels).map_err(|()| labels.len())?;

    Ok(labels)
}

fn finish_label(current: &mut Vec<Token>, labels: &mut Vec<Label>) -> Result<(), ()> {
    let has_content = current.iter().any(|t| !t.is_ignored());
    if !has_content {
        return Err(());
    }
    let input_cps: CpVec = current.iter().flat_map(input_cps_of).collect();
    let normalized_cps: CpVec = current
        .iter()
        .flat_map(|t| t.output_cps().iter().copied())
        .collect();
    let display_cps: CpVec = current
        .iter()
        .flat_map(|t| t.display_cps().iter().copied())
        .collect();
    labels.push(Label {
        tokens: std::mem::take(current),
        input_cps,
        normalized_cps,
        display_cps,
    });
    Ok(())
}

fn input_cps_of(tok: &Token) -> CpVec {
    match tok {
        Token::Valid { cps } => cps.clone(),
        Token::Mapped { src, .. } => CpVec::from_slice(&[*src]),
        Token::Ignored { src } => CpVec::from_slice(&[*src]),
        Token::Disallowed { src } => CpVec::from_slice(&[*src]),
        Token::Stop => CpVec::new(),
        Token::Nfc { input_cps, .. } => input_cps.clone(),
        Token::Emoji { input_cps, .. } => input_cps.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_stop_is_rejected() {
        let tokens = vec![Token::Stop, Token::Valid { cps: CpVec::from_slice(&['a' as u32]) }];
        assert_eq!(split_labels(tokens), Err(0));
    }

    #[test]
    fn two_labels_split_on_stop() {
        let tokens = vec![
            Token::Valid { cps: CpVec::from_slice(&['a' as u32]) },
            Token::Stop,
            Token::Valid { cps: CpVec::from_slice(&['b' as u32]) },
        ];
        let labels = split_labels(tokens).unwrap();
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn double_stop_yields_empty_middle_label() {
        let tokens = vec![
            Token::Valid { cps: CpVec::from_slice(&['a' as u32]) },
            Token::Stop,
            Token::Stop,
            Token::Valid { cps: CpVec::from_slice(&['b' as u32]) },
        ];
        assert_eq!(split_labels(tokens), Err(1));
    }
}

//! Output Assembler: canonical and beautified string rendering, and the
//! structured `process` result (`spec.md` §4.5).

use crate::Codepoint;
use crate::validate::ValidatedLabel;

const XI_LOWER: Codepoint = 0x03BE;
const XI_UPPER: Codepoint = 0x039E;

/// Concatenate each label's codepoint sequence with `.` separators and
/// UTF-8-encode the result. `beautify` selects each label's `display_cps`
/// (FE0F-bearing emoji) over its `normalized_cps` (FE0F-stripped), and
/// additionally renders every lowercase xi (U+03BE) in a non-Greek label
/// as capital xi (U+039E).
pub fn assemble(labels: &[ValidatedLabel], beautify: bool) -> String {
    let mut out = String::new();
    for (i, validated) in labels.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        let swap_xi = beautify
            && validated
                .script_group
                .is_none_or(|group| group.name != "Greek");
        let cps = if beautify {
            &validated.label.display_cps
        } else {
            &validated.label.normalized_cps
        };
        for &cp in cps.iter() {
            let cp = if swap_xi && cp == XI_LOWER { XI_UPPER } else { cp };
            out.push(char::from_u32(cp).expect("scalar value"));
        }
    }
    out
}

/// Structured result of [`crate::process`]: every label's kind, script
/// group, and token stream, without materializing a string.
pub struct Processed {
    pub labels: Vec<ValidatedLabel>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::split_labels;
    use crate::tokenizer::tokenize;
    use crate::validate::validate_label;

    fn validated(s: &str) -> Vec<ValidatedLabel> {
        let tokens = tokenize(s.as_bytes(), true).unwrap();
        split_labels(tokens)
            .unwrap()
            .into_iter()
            .map(|l| validate_label(l).unwrap())
            .collect()
    }

    #[test]
    fn ascii_round_trips_unchanged() {
        let labels = validated("hello");
        assert_eq!(assemble(&labels, false), "hello");
    }

    #[test]
    fn two_labels_join_with_dot() {
        let labels = validated("brantly.eth");
        assert_eq!(assemble(&labels, false), "brantly.eth");
    }

    #[test]
    fn pure_greek_label_never_swaps_xi() {
        let labels = validated("\u{03BE}");
        assert_eq!(assemble(&labels, false), "\u{03BE}");
        assert_eq!(assemble(&labels, true), "\u{03BE}");
    }

    /// The xi swap is keyed on `script_group`, not on input content; this
    /// builds a label directly (bypassing the validator's script-group
    /// check, which would never itself assign a xi-bearing label to a
    /// non-Greek group) to exercise the swap in isolation.
    #[test]
    fn non_greek_script_group_swaps_xi_only_when_beautified() {
        use crate::label::{Label, LabelKind};
        use crate::token::{CpVec, Token};

        let ascii_group = crate::tables::SCRIPT_GROUPS
            .iter()
            .find(|g| g.name == "ASCII")
            .unwrap();
        let label = Label {
            tokens: vec![Token::Valid {
                cps: CpVec::from_slice(&[0x03BE]),
            }],
            input_cps: CpVec::from_slice(&[0x03BE]),
            normalized_cps: CpVec::from_slice(&[0x03BE]),
            display_cps: CpVec::from_slice(&[0x03BE]),
        };
        let validated = ValidatedLabel {
            label,
            kind: LabelKind::Other,
            script_group: Some(ascii_group),
        };

        assert_eq!(assemble(&[validated], false), "\u{03BE}");
        let label2 = Label {
            tokens: vec![Token::Valid {
                cps: CpVec::from_slice(&[0x03BE]),
            }],
            input_cps: CpVec::from_slice(&[0x03BE]),
            normalized_cps: CpVec::from_slice(&[0x03BE]),
            display_cps: CpVec::from_slice(&[0x03BE]),
        };
        let validated2 = ValidatedLabel {
            label: label2,
            kind: LabelKind::Other,
            script_group: Some(ascii_group),
        };
        assert_eq!(assemble(&[validated2], true), "\u{039E}");
    }
}

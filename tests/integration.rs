//! End-to-end scenarios against the public API.

use ens_normalize_core::{ProcessErrorKind, beautify, normalize};

fn norm(s: &str) -> Result<String, ProcessErrorKind> {
    normalize(s).map(|c| c.into_owned()).map_err(|e| e.kind)
}

fn beaut(s: &str) -> Result<String, ProcessErrorKind> {
    beautify(s).map(|c| c.into_owned()).map_err(|e| e.kind)
}

#[test]
fn uppercase_folds_to_lowercase() {
    assert_eq!(norm("bRAnTlY.eTh").unwrap(), "brantly.eth");
}

#[test]
fn underscore_leading_ok_middle_rejected() {
    assert_eq!(norm("hello").unwrap(), "hello");
    assert_eq!(norm("_hello").unwrap(), "_hello");
    assert_eq!(norm("hel_lo").unwrap_err(), ProcessErrorKind::UnderscoreInMiddle);
}

#[test]
fn label_extension_rule_rejects_double_hyphen() {
    assert_eq!(
        norm("ab--cd").unwrap_err(),
        ProcessErrorKind::InvalidLabelExtension
    );
    assert_eq!(
        norm("xn--test").unwrap_err(),
        ProcessErrorKind::InvalidLabelExtension
    );
}

#[test]
fn decomposed_accent_composes_and_is_idempotent() {
    let decomposed = format!("cafe{}", '\u{0301}');
    let composed = norm(&decomposed).unwrap();
    assert_eq!(composed, "café");
    assert_eq!(norm(&composed).unwrap(), composed);
}

#[test]
fn empty_and_degenerate_labels_are_rejected() {
    assert_eq!(norm("").unwrap_err(), ProcessErrorKind::EmptyLabel);
    assert_eq!(norm(".").unwrap_err(), ProcessErrorKind::EmptyLabel);
    assert_eq!(norm(".eth").unwrap_err(), ProcessErrorKind::EmptyLabel);
    assert_eq!(norm("eth.").unwrap_err(), ProcessErrorKind::EmptyLabel);
    assert_eq!(norm("a..b").unwrap_err(), ProcessErrorKind::EmptyLabel);
}

#[test]
fn zero_width_space_is_disallowed() {
    let input = format!("hello{}world", '\u{200B}');
    assert_eq!(
        norm(&input).unwrap_err(),
        ProcessErrorKind::DisallowedCharacter(0x200B)
    );
}

#[test]
fn pure_greek_label_lowercases_and_mixed_script_fails() {
    assert_eq!(norm("ελληνικά").unwrap(), "ελληνικά");
    assert_eq!(
        norm("helloελληνικά").unwrap_err(),
        ProcessErrorKind::DisallowedCharacter('h' as u32)
    );
}

#[test]
fn family_zwj_emoji_passes_through_as_one_token() {
    let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
    assert_eq!(norm(family).unwrap(), family);
}

#[test]
fn soft_hyphen_is_ignored_zwj_outside_emoji_is_disallowed() {
    let input = format!("test{}name", '\u{00AD}');
    assert_eq!(norm(&input).unwrap(), "testname");

    let zwj_input = format!("test{}name", '\u{200D}');
    assert!(norm(&zwj_input).is_err());
}

#[test]
fn beautify_applies_only_to_display_form() {
    assert_eq!(norm("brantly.eth").unwrap(), beaut("brantly.eth").unwrap());
}

#[test]
fn normalize_strips_fe0f_but_beautify_restores_it() {
    let shamrock_with_fe0f = "\u{2618}\u{FE0F}";
    assert_eq!(norm(shamrock_with_fe0f).unwrap(), "\u{2618}");
    assert_eq!(beaut(shamrock_with_fe0f).unwrap(), "\u{2618}\u{FE0F}");
}

//! Validator: the ordered per-label rule cascade (`spec.md` §4.4).

use std::collections::HashSet;

use crate::Codepoint;
use crate::error::ProcessErrorKind as Kind;
use crate::label::{Label, LabelKind};
use crate::tables::classify::{CP_HYPHEN, CP_UNDERSCORE};
use crate::tables::{self, ScriptGroup};
use crate::token::Token;

#[derive(Debug)]
pub struct ValidatedLabel {
    pub label: Label,
    pub kind: LabelKind,
    pub script_group: Option<&'static ScriptGroup>,
}

/// Run every structural, script-group, NSM, combining-mark, fenced and
/// confusable check over one label, in the order `spec.md` §4.4 lists
/// them. The first failing check aborts with its specific error kind.
pub fn validate_label(label: Label) -> Result<ValidatedLabel, Kind> {
    let full_cps: Vec<Codepoint> = label.normalized_cps.iter().copied().collect();
    if full_cps.is_empty() {
        return Err(Kind::EmptyLabel);
    }

    if let Some(Token::Disallowed { src }) = label.tokens.iter().find(|t| t.is_disallowed()) {
        return Err(Kind::DisallowedCharacter(*src));
    }

    let has_emoji = label.tokens.iter().any(Token::is_emoji);

    let is_ascii_only = !has_emoji
        && full_cps.iter().all(|&cp| {
            (0x30..=0x39).contains(&cp)
                || (0x61..=0x7A).contains(&cp)
                || cp == CP_UNDERSCORE
                || cp == CP_HYPHEN
        });

    if is_ascii_only {
        check_underscore_rule(&full_cps)?;
        check_label_extension_rule(&full_cps)?;
        let group = tables::SCRIPT_GROUPS.iter().find(|g| g.name == "ASCII");
        return Ok(ValidatedLabel {
            label,
            kind: LabelKind::Ascii,
            script_group: group,
        });
    }

    check_underscore_rule(&full_cps)?;
    check_label_extension_rule(&full_cps)?;
    check_fenced_rule(&full_cps)?;

    let entries = annotate(&label.tokens);
    let non_emoji_cps: Vec<Codepoint> = entries
        .iter()
        .filter(|(_, is_emoji)| !is_emoji)
        .map(|(cp, _)| *cp)
        .collect();
    let group = determine_script_group(&non_emoji_cps)?;

    check_combining_marks(&entries, group)?;
    check_nsm(&non_emoji_cps, group)?;
    check_confusable(&non_emoji_cps)?;

    let kind = if has_emoji {
        LabelKind::Emoji
    } else if group.name == "Greek" {
        LabelKind::Greek
    } else {
        LabelKind::Other
    };

    Ok(ValidatedLabel {
        label,
        kind,
        script_group: Some(group),
    })
}

/// `cp` paired with whether it came from an `Emoji` token — emoji
/// codepoints are transparent to script/combining-mark determination.
fn annotate(tokens: &[Token]) -> Vec<(Codepoint, bool)> {
    let mut out = Vec::new();
    for tok in tokens {
        if let Token::Emoji { normalized_cps, .. } = tok {
            out.extend(normalized_cps.iter().map(|&cp| (cp, true)));
        } else {
            out.extend(tok.output_cps().iter().map(|&cp| (cp, false)));
        }
    }
    out
}

fn check_underscore_rule(cps: &[Codepoint]) -> Result<(), Kind> {
    let mut seen_non_underscore = false;
    for &cp in cps {
        if cp == CP_UNDERSCORE {
            if seen_non_underscore {
                return Err(Kind::UnderscoreInMiddle);
            }
        } else {
            seen_non_underscore = true;
        }
    }
    Ok(())
}

fn check_label_extension_rule(cps: &[Codepoint]) -> Result<(), Kind> {
    if cps.len() >= 4 && cps[2] == CP_HYPHEN && cps[3] == CP_HYPHEN {
        return Err(Kind::InvalidLabelExtension);
    }
    Ok(())
}

fn check_fenced_rule(cps: &[Codepoint]) -> Result<(), Kind> {
    if tables::is_fenced(cps[0]) {
        return Err(Kind::FencedLeading);
    }
    if tables::is_fenced(*cps.last().unwrap()) {
        return Err(Kind::FencedTrailing);
    }
    for w in cps.windows(2) {
        if tables::is_fenced(w[0]) && tables::is_fenced(w[1]) {
            return Err(Kind::FencedAdjacent);
        }
    }
    Ok(())
}

/// Unique script group whose membership covers every non-emoji codepoint,
/// first match wins under the fixed ordering in `tables::SCRIPT_GROUPS`
/// (`spec.md` §4.4 step 8).
fn determine_script_group(non_emoji_cps: &[Codepoint]) -> Result<&'static ScriptGroup, Kind> {
    tables::SCRIPT_GROUPS
        .iter()
        .find(|g| non_emoji_cps.iter().all(|&cp| (g.membership)(cp)))
        .ok_or_else(|| Kind::DisallowedCharacter(non_emoji_cps.first().copied().unwrap_or(0)))
}

fn check_combining_marks(
    entries: &[(Codepoint, bool)],
    group: &'static ScriptGroup,
) -> Result<(), Kind> {
    let mut first_idx = 0;
    while first_idx < entries.len()
        && entries[first_idx].0 == CP_UNDERSCORE
        && !entries[first_idx].1
    {
        first_idx += 1;
    }
    if let Some(&(cp, is_emoji)) = entries.get(first_idx)
        && !is_emoji && tables::is_combining(cp) {
            return Err(Kind::LeadingCombiningMark);
        }

    for w in entries.windows(2) {
        let (prev_cp, prev_emoji) = w[0];
        let (cp, is_emoji) = w[1];
        if is_emoji || !tables::is_combining(cp) {
            continue;
        }
        if prev_emoji {
            return Err(Kind::CombiningMarkAfterEmoji);
        }
        if tables::is_fenced(prev_cp) {
            return Err(Kind::CombiningMarkAfterFenced);
        }
        if !group.cm.contains(&cp) {
            return Err(Kind::DisallowedCombiningMark(cp));
        }
    }
    Ok(())
}

fn check_nsm(cps: &[Codepoint], group: &'static ScriptGroup) -> Result<(), Kind> {
    // Script-specific tightenings (Arabic ≤3, Hebrew ≤2, ...) apply only
    // when the group opts in; every other group falls back to the
    // global nsm_max (`spec.md` §4.4 step 10).
    let limit = if group.check_nsm {
        group.nsm_max
    } else {
        tables::NSM_MAX
    };
    let mut i = 0;
    while i < cps.len() {
        if !tables::is_nsm(cps[i]) {
            i += 1;
            continue;
        }
        if i == 0 {
            return Err(Kind::LeadingNSM);
        }
        let start = i;
        let mut seen = HashSet::new();
        while i < cps.len() && tables::is_nsm(cps[i]) {
            if !seen.insert(cps[i]) {
                return Err(Kind::DuplicateNSM(cps[i]));
            }
            i += 1;
        }
        if i - start > limit {
            return Err(Kind::ExcessiveNSM);
        }
    }
    Ok(())
}

fn check_confusable(cps: &[Codepoint]) -> Result<(), Kind> {
    let hits: Vec<(&str, bool, bool)> = tables::CONFUSABLE_SETS
        .iter()
        .filter_map(|set| {
            let hit_valid = cps.iter().any(|cp| set.valid.contains(cp));
            let hit_confused = cps.iter().any(|cp| set.confused.contains(cp));
            (hit_valid || hit_confused).then_some((set.target, hit_valid, hit_confused))
        })
        .collect();

    for (i, &(_, hv, hc)) in hits.iter().enumerate() {
        if hv && hc && hits.iter().enumerate().any(|(j, &(_, _, ohc))| j != i && ohc) {
            return Err(Kind::WholeScriptConfusable);
        }
    }
    Ok(())
}

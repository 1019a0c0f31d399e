// Copyright 2026 Figdex Project
// SPDX-License-Identifier: MIT

/// British/American spelling pairs expanded at search time. Detected
/// spellings produce extra query variants with the counterpart swapped in;
/// the caller merges per-figure scores with max, never sum.
const SPELLING_PAIRS: &[(&str, &str)] = &[
    ("colour", "color"),
    ("centre", "center"),
    ("grey", "gray"),
    ("analyse", "analyze"),
    ("labour", "labor"),
    ("metre", "meter"),
    ("organise", "organize"),
    ("programme", "program"),
    ("catalogue", "catalog"),
    ("honour", "honor"),
    ("theatre", "theater"),
];

/// The query itself plus every case-preserving substitution variant. Variants
/// are re-expanded until no new one appears, so a query carrying several
/// detectable spellings ("colour labour") also yields the fully swapped form
/// ("color labor"), not just one substitution at a time.
pub fn spelling_variants(text: &str) -> Vec<String> {
    let mut out = vec![text.to_string()];
    let mut next = 0;
    while next < out.len() {
        let current = out[next].clone();
        next += 1;
        for (british, american) in SPELLING_PAIRS {
            for (from, to) in [(british, american), (american, british)] {
                if let Some(v) = swap_spelling(&current, from, to) {
                    if !out.contains(&v) {
                        out.push(v);
                    }
                }
            }
        }
    }
    out
}

/// Replace whole-word occurrences of `from` (matched case-insensitively)
/// with `to`, preserving leading-capital and all-caps casing. Word boundaries
/// matter: "program" must not fire inside "programme". Returns None when the
/// text does not contain the spelling, or when lowercasing shifts byte
/// offsets (non-ascii edge, where offset-based splicing would be unsafe).
fn swap_spelling(text: &str, from: &str, to: &str) -> Option<String> {
    let lower = text.to_lowercase();
    if lower.len() != text.len() {
        return None;
    }
    let bytes = lower.as_bytes();
    let bounded = |pos: usize| {
        let before_ok = pos == 0 || !bytes[pos - 1].is_ascii_alphanumeric();
        let end = pos + from.len();
        let after_ok = end >= bytes.len() || !bytes[end].is_ascii_alphanumeric();
        before_ok && after_ok
    };
    let mut out = String::with_capacity(text.len());
    let mut rest = 0usize;
    let mut swapped = false;
    for (pos, _) in lower.match_indices(from) {
        if pos < rest || !bounded(pos) {
            continue;
        }
        out.push_str(&text[rest..pos]);
        out.push_str(&preserve_case(&text[pos..pos + from.len()], to));
        rest = pos + from.len();
        swapped = true;
    }
    if !swapped {
        return None;
    }
    out.push_str(&text[rest..]);
    Some(out)
}

fn preserve_case(matched: &str, to: &str) -> String {
    let has_upper = matched.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = matched.chars().any(|c| c.is_ascii_lowercase());
    if has_upper && !has_lower {
        return to.to_uppercase();
    }
    if matched.chars().next().map_or(false, |c| c.is_ascii_uppercase()) {
        let mut s = String::with_capacity(to.len());
        let mut chars = to.chars();
        if let Some(first) = chars.next() {
            s.extend(first.to_uppercase());
        }
        s.extend(chars);
        return s;
    }
    to.to_string()
}

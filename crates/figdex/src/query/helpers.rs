// Copyright 2026 Figdex Project
// SPDX-License-Identifier: MIT

// Small helper: split on whitespace, honoring double quotes so
// `work:"Human problems in industry"` stays one token (quotes stripped).
pub(crate) fn quote_split(input: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut buf = String::new();
    let mut in_d = false;
    for ch in input.chars() {
        match ch {
            '"' => {
                in_d = !in_d;
            }
            c if c.is_whitespace() && !in_d => {
                if !buf.is_empty() {
                    out.push(std::mem::take(&mut buf));
                }
            }
            c => buf.push(c),
        }
    }
    if !buf.is_empty() {
        out.push(buf);
    }
    out
}

/// Slug form used everywhere facet ids come from labels: lowercase, `&`
/// becomes " and ", runs of non-alphanumerics collapse to one hyphen, edges
/// trimmed.
pub fn slugify(s: &str) -> String {
    let lowered = s.trim().to_lowercase().replace('&', " and ");
    let mut out = String::with_capacity(lowered.len());
    let mut gap = false;
    for ch in lowered.chars() {
        if ch.is_ascii_alphanumeric() {
            if gap && !out.is_empty() {
                out.push('-');
            }
            gap = false;
            out.push(ch);
        } else {
            gap = true;
        }
    }
    out
}

/// Case/punctuation-insensitive form for substring matching (series, work
/// titles): lowercase, punctuation runs collapse to single spaces.
pub fn normalize_match(s: &str) -> String {
    let lowered = s.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut gap = false;
    for ch in lowered.chars() {
        if ch.is_alphanumeric() {
            if gap && !out.is_empty() {
                out.push(' ');
            }
            gap = false;
            out.push(ch);
        } else {
            gap = true;
        }
    }
    out
}

pub(crate) fn push_unique(list: &mut Vec<String>, value: String) {
    if !value.is_empty() && !list.contains(&value) {
        list.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_split_keeps_quoted_spans() {
        assert_eq!(
            quote_split(r#"work:"Human problems in industry" accidents"#),
            vec!["work:Human problems in industry", "accidents"]
        );
        assert_eq!(quote_split("  a   b "), vec!["a", "b"]);
    }

    #[test]
    fn slugify_rules() {
        assert_eq!(slugify("Flow & Process"), "flow-and-process");
        assert_eq!(slugify("  Bar chart!! "), "bar-chart");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn normalize_match_collapses_punctuation() {
        assert_eq!(normalize_match("Human Problems, in-Industry"), "human problems in industry");
    }
}

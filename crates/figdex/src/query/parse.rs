// Copyright 2026 Figdex Project
// SPDX-License-Identifier: MIT

use once_cell::sync::Lazy;
use regex::Regex;

use super::ast::{ParsedQuery, StructuredFilters};
use super::helpers::{normalize_match, push_unique, quote_split, slugify};
use crate::catalog::{normalize_work_id, Vocab, Work};

static WORK_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^w\d{1,4}$").unwrap());

const CLAUSE_KEYS: [&str; 6] = ["color", "type", "work", "year", "feature", "series"];

/// Split a raw query into free text and structured `key:value[,value...]`
/// clauses, resolving value tokens against the facet vocabularies. No clause
/// is ever rejected: an unresolvable value falls back to a slugified literal
/// that simply matches nothing.
pub fn parse(raw: &str, vocab: &Vocab, works: &[Work]) -> ParsedQuery {
    let mut filters = StructuredFilters::default();
    let mut text_parts: Vec<String> = Vec::new();

    for tok in quote_split(raw) {
        let clause = tok
            .split_once(':')
            .filter(|(k, v)| CLAUSE_KEYS.contains(&k.to_lowercase().as_str()) && !v.is_empty());
        let (key, value) = match clause {
            Some((k, v)) => (k.to_lowercase(), v),
            None => {
                text_parts.push(tok);
                continue;
            }
        };
        for part in value.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            match key.as_str() {
                "color" => push_unique(&mut filters.colors, resolve_color(vocab, part)),
                "type" => push_unique(
                    &mut filters.types,
                    vocab.resolve_type(part).unwrap_or_else(|| slugify(part)),
                ),
                "feature" => push_unique(
                    &mut filters.features,
                    vocab.resolve_feature(part).unwrap_or_else(|| slugify(part)),
                ),
                "work" => resolve_work(&mut filters, works, part),
                "year" => {
                    // Non-numeric year values are silently dropped.
                    if let Ok(y) = part.parse::<i32>() {
                        if !filters.years.contains(&y) {
                            filters.years.push(y);
                        }
                    }
                }
                "series" => push_unique(&mut filters.series, normalize_match(part)),
                _ => unreachable!("key checked against CLAUSE_KEYS"),
            }
        }
    }

    let has_filters = !filters.is_empty();
    ParsedQuery {
        text: text_parts.join(" "),
        filters,
        has_filters,
    }
}

fn resolve_color(vocab: &Vocab, token: &str) -> String {
    let lowered = token.to_lowercase();
    if lowered == "black" || lowered == "only black" || lowered == "only-black" {
        return "only-black".to_string();
    }
    vocab
        .resolve_color(token)
        .unwrap_or_else(|| slugify(token))
}

/// `work:` values that look like a work id (`w` + up to four digits) resolve
/// directly; anything else substring-matches against work titles and series,
/// expanding to every matching work's id. A value matching no work is kept as
/// a normalized literal matcher so it cleanly matches nothing.
fn resolve_work(filters: &mut StructuredFilters, works: &[Work], token: &str) {
    if WORK_TOKEN_RE.is_match(token) {
        push_unique(&mut filters.work_ids, normalize_work_id(token));
        return;
    }
    let term = normalize_match(token);
    if term.is_empty() {
        return;
    }
    let mut found = false;
    for work in works {
        let title_hit = normalize_match(&work.title).contains(&term);
        let series_hit = work
            .series
            .as_deref()
            .map(|s| normalize_match(s).contains(&term))
            .unwrap_or(false);
        if title_hit || series_hit {
            push_unique(&mut filters.work_ids, work.work_id.clone());
            found = true;
        }
    }
    if !found {
        push_unique(&mut filters.work_terms, term);
    }
}

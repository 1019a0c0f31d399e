// Copyright 2026 Figdex Project
// SPDX-License-Identifier: MIT

mod variants;

pub use variants::spelling_variants;

use std::collections::HashMap;

use crate::catalog::FigureView;

/// Ranked output of a full-text search.
#[derive(Debug, Clone, Default)]
pub struct RankedMatches {
    /// Figure ids in descending score order.
    pub ids: Vec<String>,
    pub score_by_id: HashMap<String, f32>,
}

/// The opaque full-text capability the engine is written against. Any
/// conforming ranked-match implementation (trigram, BM25, inverted index)
/// satisfies it; nothing downstream depends on `TextIndex` specifically.
pub trait FullText {
    fn search(&self, text: &str) -> RankedMatches;
}

/// Field weights applied at index time.
const WEIGHT_TITLE: f32 = 2.0;
const WEIGHT_WORK_TITLE: f32 = 1.6;
const WEIGHT_THEMES: f32 = 1.2;
const WEIGHT_DEFAULT: f32 = 1.0;

/// Default `FullText` implementation: a small in-memory inverted index
/// (token -> weighted postings) over the figure's text fields, with prefix
/// matching on the trailing query token.
#[derive(Debug, Default)]
pub struct TextIndex {
    doc_ids: Vec<String>,
    /// token -> (doc, weight); one entry per (token, doc), max field weight.
    postings: HashMap<String, Vec<(u32, f32)>>,
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

impl TextIndex {
    pub fn build(views: &[FigureView]) -> TextIndex {
        let mut doc_ids = Vec::with_capacity(views.len());
        let mut acc: HashMap<String, HashMap<u32, f32>> = HashMap::new();
        for (doc, view) in views.iter().enumerate() {
            let doc = doc as u32;
            doc_ids.push(view.figure.id.clone());
            let mut add = |text: &str, weight: f32| {
                for tok in tokenize(text) {
                    let per_doc = acc.entry(tok).or_default();
                    let w = per_doc.entry(doc).or_insert(0.0);
                    if weight > *w {
                        *w = weight;
                    }
                }
            };
            if let Some(t) = &view.figure.title {
                add(t, WEIGHT_TITLE);
            }
            if let Some(t) = &view.work_title {
                add(t, WEIGHT_WORK_TITLE);
            }
            for theme in &view.figure.themes {
                add(theme, WEIGHT_THEMES);
            }
            if let Some(t) = &view.figure.ocr_text {
                add(t, WEIGHT_DEFAULT);
            }
            if let Some(t) = &view.figure.ai_description {
                add(t, WEIGHT_DEFAULT);
            }
            for ty in &view.figure.types {
                add(ty, WEIGHT_DEFAULT);
            }
            for features in view.figure.features_by_type.values() {
                for f in features {
                    add(f, WEIGHT_DEFAULT);
                }
            }
        }
        let mut postings: HashMap<String, Vec<(u32, f32)>> = HashMap::with_capacity(acc.len());
        for (tok, per_doc) in acc {
            let mut list: Vec<(u32, f32)> = per_doc.into_iter().collect();
            list.sort_by_key(|(doc, _)| *doc);
            postings.insert(tok, list);
        }
        TextIndex { doc_ids, postings }
    }

    /// Single-variant search: sum of per-token best weights, OR across
    /// tokens; the trailing token also matches by prefix (in-progress
    /// typing).
    fn search_one(&self, text: &str) -> HashMap<u32, f32> {
        let tokens = tokenize(text);
        let mut scores: HashMap<u32, f32> = HashMap::new();
        let last = tokens.len().saturating_sub(1);
        for (i, tok) in tokens.iter().enumerate() {
            let mut per_doc: HashMap<u32, f32> = HashMap::new();
            if let Some(list) = self.postings.get(tok) {
                for (doc, w) in list {
                    let entry = per_doc.entry(*doc).or_insert(0.0);
                    if *w > *entry {
                        *entry = *w;
                    }
                }
            }
            if i == last {
                for (key, list) in &self.postings {
                    if key.len() > tok.len() && key.starts_with(tok.as_str()) {
                        for (doc, w) in list {
                            // prefix hits rank below exact ones
                            let scaled = w * 0.8;
                            let entry = per_doc.entry(*doc).or_insert(0.0);
                            if scaled > *entry {
                                *entry = scaled;
                            }
                        }
                    }
                }
            }
            for (doc, w) in per_doc {
                *scores.entry(doc).or_insert(0.0) += w;
            }
        }
        scores
    }
}

impl FullText for TextIndex {
    /// Search every spelling variant of the query independently and keep the
    /// maximum score per figure across variants. Max, never sum: a figure
    /// containing only "colour" must not outrank itself by also matching
    /// "color".
    fn search(&self, text: &str) -> RankedMatches {
        if text.trim().is_empty() || self.doc_ids.is_empty() {
            return RankedMatches::default();
        }
        let mut merged: HashMap<u32, f32> = HashMap::new();
        for variant in spelling_variants(text) {
            for (doc, score) in self.search_one(&variant) {
                let entry = merged.entry(doc).or_insert(0.0);
                if score > *entry {
                    *entry = score;
                }
            }
        }
        let mut ranked: Vec<(u32, f32)> = merged.into_iter().collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        let mut out = RankedMatches::default();
        for (doc, score) in ranked {
            let id = self.doc_ids[doc as usize].clone();
            out.score_by_id.insert(id.clone(), score);
            out.ids.push(id);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Figure;

    fn view(id: &str, title: Option<&str>, ocr: Option<&str>) -> FigureView {
        FigureView {
            figure: Figure {
                id: id.into(),
                title: title.map(|s| s.to_string()),
                ocr_text: ocr.map(|s| s.to_string()),
                ..Default::default()
            },
            work_title: None,
            work_year: None,
            work_authors: vec![],
            work_publisher: None,
            work_publisher_city: None,
            work_series: None,
        }
    }

    #[test]
    fn empty_query_matches_nothing() {
        let idx = TextIndex::build(&[view("f1", Some("Accidents"), None)]);
        assert!(idx.search("").ids.is_empty());
        assert!(idx.search("   ").ids.is_empty());
    }

    #[test]
    fn empty_index_never_errors() {
        let idx = TextIndex::build(&[]);
        assert!(idx.search("anything").ids.is_empty());
    }

    #[test]
    fn title_outweighs_ocr() {
        let a = view("in-title", Some("accidents"), None);
        let b = view("in-ocr", None, Some("accidents happen"));
        let idx = TextIndex::build(&[a, b]);
        let m = idx.search("accidents");
        assert_eq!(m.ids[0], "in-title");
        assert!(m.score_by_id["in-title"] > m.score_by_id["in-ocr"]);
    }

    #[test]
    fn trailing_token_matches_by_prefix() {
        let idx = TextIndex::build(&[view("f1", Some("industrial accidents"), None)]);
        assert_eq!(idx.search("accid").ids, vec!["f1"]);
        // OR across tokens: the exact middle token still lands the match
        assert!(!idx.search("accid industrial x").ids.is_empty());
    }

    #[test]
    fn dialect_translated_query_matches_every_token() {
        // document entirely in the other dialect: both tokens must land,
        // which needs the fully swapped query variant
        let idx = TextIndex::build(&[view("us", None, Some("the color of labor"))]);
        let translated = idx.search("colour labour");
        let direct = idx.search("color labor");
        assert_eq!(translated.score_by_id["us"], direct.score_by_id["us"]);
    }

    #[test]
    fn spelling_variant_scores_max_not_sum() {
        let british = view("gb", None, Some("the colour of steel"));
        let idx = TextIndex::build(&[british]);
        let via_gb = idx.search("colour");
        let via_us = idx.search("color");
        assert_eq!(via_gb.score_by_id["gb"], via_us.score_by_id["gb"]);
    }
}

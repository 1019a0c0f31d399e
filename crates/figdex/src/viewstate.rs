// Copyright 2026 Figdex Project
// SPDX-License-Identifier: MIT

//! Encode/decode of the full UI state to a flat string-keyed parameter map
//! (the URL query string, in practice). Law: `decode(encode(s)) == s` for any
//! reachable selection. Absent/empty facets are omitted entirely so the
//! default state encodes to an empty map.

use std::collections::{BTreeMap, BTreeSet};

use crate::selection::{Selection, SortKey, ViewMode, ONLY_BLACK};

pub type ParamMap = BTreeMap<String, String>;

fn join_set(set: &BTreeSet<String>) -> String {
    set.iter().cloned().collect::<Vec<_>>().join(",")
}

fn split_list(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

pub fn encode(sel: &Selection) -> ParamMap {
    let mut params = ParamMap::new();
    if !sel.query_text.is_empty() {
        params.insert("q".into(), sel.query_text.clone());
    }
    if !sel.selected_types.is_empty() {
        params.insert("types".into(), join_set(&sel.selected_types));
    }
    if !sel.selected_features.is_empty() {
        params.insert("features".into(), join_set(&sel.selected_features));
    }
    // only-black rides inside the colors list as its reserved id
    let mut colors = sel.selected_colors.clone();
    if sel.only_black {
        colors.insert(ONLY_BLACK.to_string());
    }
    if !colors.is_empty() {
        params.insert("colors".into(), join_set(&colors));
    }
    if let Some(w) = &sel.selected_work_id {
        params.insert("work".into(), w.clone());
    }
    if sel.sort_key != SortKey::default() {
        params.insert("sort".into(), sel.sort_key.as_str().into());
    }
    if let Some(seed) = sel.shuffle_seed {
        if sel.sort_key == SortKey::Random {
            params.insert("seed".into(), seed.to_string());
        }
    }
    if sel.view_mode != ViewMode::default() {
        params.insert("view".into(), sel.view_mode.as_str().into());
    }
    if let Some(id) = &sel.active_figure_id {
        params.insert("id".into(), id.clone());
    }
    params
}

/// Malformed values decode to the nearest safe default; navigation never
/// fails.
pub fn decode(params: &ParamMap) -> Selection {
    let mut sel = Selection::default();
    if let Some(q) = params.get("q") {
        sel.query_text = q.clone();
    }
    if let Some(t) = params.get("types") {
        sel.selected_types = split_list(t);
    }
    if let Some(f) = params.get("features") {
        sel.selected_features = split_list(f);
    }
    if let Some(c) = params.get("colors") {
        let mut colors = split_list(c);
        sel.only_black = colors.remove(ONLY_BLACK);
        sel.selected_colors = colors;
    }
    if let Some(w) = params.get("work") {
        if !w.is_empty() {
            sel.selected_work_id = Some(w.clone());
        }
    }
    if let Some(s) = params.get("sort") {
        sel.sort_key = SortKey::from_param(s);
    }
    if sel.sort_key == SortKey::Random {
        sel.shuffle_seed = params.get("seed").and_then(|s| s.parse().ok());
    }
    if let Some(v) = params.get("view") {
        sel.view_mode = ViewMode::from_param(v);
    }
    if let Some(id) = params.get("id") {
        if !id.is_empty() {
            sel.active_figure_id = Some(id.clone());
        }
    }
    sel
}

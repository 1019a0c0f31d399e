// Copyright 2026 Figdex Project
// SPDX-License-Identifier: MIT

mod common;

use figdex::{FullText, Selection, TextIndex};

#[test]
fn british_and_american_spellings_reach_the_same_figure() {
    let engine = common::engine();
    for q in ["colour", "color"] {
        let sel = Selection::default().set_query(q);
        let got: Vec<&str> = engine.results(&sel).figures.iter().map(|v| v.id()).collect();
        assert!(
            got.contains(&"w0002-p0025-f02"),
            "query {:?} missed the colour-coded figure",
            q
        );
    }
}

#[test]
fn variant_scores_are_max_not_sum() {
    // the figure's text contains only the British spelling; searching either
    // spelling must yield the same top score, not a double-counted one
    let catalog = common::fixture_catalog();
    let index = TextIndex::build(catalog.views());
    let british = index.search("colour coded");
    let american = index.search("color coded");
    let id = "w0002-p0025-f02";
    assert_eq!(british.score_by_id[id], american.score_by_id[id]);
    assert_eq!(british.ids[0], id);
    assert_eq!(american.ids[0], id);
}

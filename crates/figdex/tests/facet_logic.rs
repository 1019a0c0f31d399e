// Copyright 2026 Figdex Project
// SPDX-License-Identifier: MIT

mod common;

use figdex::Selection;

fn ids<'a>(res: &figdex::GalleryResults<'a>) -> Vec<&'a str> {
    res.figures.iter().map(|v| v.id()).collect()
}

#[test]
fn colors_are_and_types_are_or() {
    let engine = common::engine();

    // {red, blue} figure: superset check accepts [red], rejects [red, green]
    let red = Selection::default().toggle_color("red");
    let got = ids(&engine.results(&red));
    assert!(got.contains(&"w0001-p0010-f01"));
    assert!(got.contains(&"w0001-p0012-f01"));
    assert_eq!(got.len(), 2);

    let red_green = red.toggle_color("green");
    assert!(engine.results(&red_green).figures.is_empty());

    // types are OR within the selection
    let bar_or_pie = Selection::default().toggle_type("bar").toggle_type("pie");
    let got = ids(&engine.results(&bar_or_pie));
    assert!(got.contains(&"w0001-p0010-f01"));
    assert!(got.contains(&"w0002-p0020-f01"));
    assert!(got.contains(&"w0001-p0012-f01"));
    assert!(got.contains(&"w0003-f01"));
    assert!(!got.contains(&"w0002-p0025-f02"));
}

#[test]
fn combo_narrows_within_type_matches() {
    let engine = common::engine();
    let sel = Selection::default().toggle_type("bar").toggle_type("combo");
    let got = ids(&engine.results(&sel));
    assert_eq!(got, vec!["w0001-p0012-f01"]);
}

#[test]
fn only_black_short_circuits_the_color_set() {
    let engine = common::engine();
    // red stays selected, yet only-black wins: the flagged figure matches
    // even though it has no generic colors at all
    let sel = Selection::default()
        .toggle_color("red")
        .toggle_color("only-black");
    let got = ids(&engine.results(&sel));
    assert_eq!(got, vec!["w0002-p0025-f02"]);
}

#[test]
fn feature_filter_applies_under_single_type() {
    let engine = common::engine();
    let sel = Selection::default()
        .toggle_type("map")
        .toggle_feature("symbol-map");
    let got = ids(&engine.results(&sel));
    // one carries symbol-map directly, the other via the "symbol" synonym
    assert!(got.contains(&"w0001-p0012-f01"));
    assert!(got.contains(&"w0002-p0025-f02"));
    assert_eq!(got.len(), 2);
}

#[test]
fn work_selection_is_exact() {
    let engine = common::engine();
    let sel = Selection::default().set_work(Some("w0002"));
    let got = ids(&engine.results(&sel));
    assert_eq!(got.len(), 2);
    assert!(got.iter().all(|id| id.starts_with("w0002")));
}

#[test]
fn clear_all_restores_the_full_catalog() {
    let engine = common::engine();
    let sel = Selection::default()
        .toggle_type("map")
        .toggle_color("red")
        .set_query("accidents");
    let cleared = sel.clear_all();
    assert_eq!(engine.results(&cleared).figures.len(), 5);
}

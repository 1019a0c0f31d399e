// Copyright 2026 Figdex Project
// SPDX-License-Identifier: MIT

use figdex::selection::{Selection, SortKey, ViewMode};
use figdex::viewstate::{decode, encode, ParamMap};

fn assert_round_trip(sel: &Selection) {
    assert_eq!(&decode(&encode(sel)), sel, "round-trip failed for {:?}", sel);
}

#[test]
fn default_state_encodes_to_empty_map() {
    let sel = Selection::default();
    assert!(encode(&sel).is_empty());
    assert_round_trip(&sel);
}

#[test]
fn round_trip_covers_every_field() {
    let sel = Selection::default()
        .set_query("color:red accidents")
        .toggle_type("bar")
        .toggle_feature("stacked")
        .toggle_color("red")
        .toggle_color("only-black")
        .set_work(Some("w0012"))
        .set_sort(SortKey::Random, Some(42))
        .set_view(ViewMode::Publications)
        .select_figure(Some("w0012-p0038-f99"));
    assert_round_trip(&sel);

    let map = encode(&sel);
    assert_eq!(map.get("work").map(String::as_str), Some("w0012"));
    assert_eq!(map.get("sort").map(String::as_str), Some("random"));
    assert_eq!(map.get("seed").map(String::as_str), Some("42"));
    // only-black rides inside the colors list
    assert_eq!(map.get("colors").map(String::as_str), Some("only-black,red"));
}

#[test]
fn round_trip_for_each_sort_key() {
    for key in [SortKey::Relevance, SortKey::Oldest, SortKey::Newest] {
        assert_round_trip(&Selection::default().set_sort(key, None));
    }
    assert_round_trip(&Selection::default().set_sort(SortKey::Random, Some(7)));
}

#[test]
fn empty_facets_are_omitted_not_empty_strings() {
    let sel = Selection::default().toggle_type("bar").toggle_type("bar");
    let map = encode(&sel);
    assert!(!map.contains_key("types"));
    assert!(!map.contains_key("colors"));
}

#[test]
fn malformed_values_decode_to_defaults() {
    let mut map = ParamMap::new();
    map.insert("sort".into(), "bogus".into());
    map.insert("view".into(), "nonsense".into());
    map.insert("types".into(), ",,, ,".into());
    map.insert("work".into(), "".into());
    let sel = decode(&map);
    assert_eq!(sel.sort_key, SortKey::Relevance);
    assert_eq!(sel.view_mode, ViewMode::Figures);
    assert!(sel.selected_types.is_empty());
    assert_eq!(sel.selected_work_id, None);
}

#[test]
fn seed_is_ignored_outside_random_mode() {
    let mut map = ParamMap::new();
    map.insert("seed".into(), "42".into());
    let sel = decode(&map);
    assert_eq!(sel.shuffle_seed, None);

    let mut map = ParamMap::new();
    map.insert("sort".into(), "random".into());
    map.insert("seed".into(), "not-a-number".into());
    let sel = decode(&map);
    assert_eq!(sel.sort_key, SortKey::Random);
    assert_eq!(sel.shuffle_seed, None);
}

// Copyright 2026 Figdex Project
// SPDX-License-Identifier: MIT

use figdex::{Catalog, FacetValue, Figure, GalleryEngine, Vocab, Work};
use std::collections::HashMap;

pub fn work(id: &str, year: Option<i32>, title: &str, series: Option<&str>) -> Work {
    Work {
        work_id: id.into(),
        year,
        title: title.into(),
        series: series.map(|s| s.to_string()),
        ..Default::default()
    }
}

pub struct FigureSpec {
    pub id: &'static str,
    /// Only needed when the id does not embed the work (`wNNNN-pNNNN-fNN`).
    pub work: Option<&'static str>,
    pub types: &'static [&'static str],
    pub combo: bool,
    pub features: &'static [(&'static str, &'static [&'static str])],
    pub colors: &'static [&'static str],
    pub only_black: bool,
    pub title: Option<&'static str>,
    pub ocr: Option<&'static str>,
}

impl FigureSpec {
    pub fn build(&self) -> Figure {
        let mut features_by_type: HashMap<String, Vec<String>> = HashMap::new();
        for (ty, feats) in self.features {
            features_by_type.insert(
                ty.to_string(),
                feats.iter().map(|f| f.to_string()).collect(),
            );
        }
        Figure {
            id: self.id.into(),
            work_id: self.work.map(|s| s.to_string()),
            types: self.types.iter().map(|s| s.to_string()).collect(),
            is_combo: self.combo,
            features_by_type,
            colors: self.colors.iter().map(|s| s.to_string()).collect(),
            only_black: self.only_black,
            title: self.title.map(|s| s.to_string()),
            ocr_text: self.ocr.map(|s| s.to_string()),
            ..Default::default()
        }
    }
}

pub const BLANK: FigureSpec = FigureSpec {
    id: "",
    work: None,
    types: &[],
    combo: false,
    features: &[],
    colors: &[],
    only_black: false,
    title: None,
    ocr: None,
};

pub fn fixture_vocab() -> Vocab {
    Vocab::new(
        vec![
            FacetValue::new("bar", "Bar chart"),
            FacetValue::new("pie", "Pie chart"),
            FacetValue::new("map", "Map"),
            FacetValue::new("combo", "Combination"),
        ],
        vec![
            FacetValue::new("stacked", "Stacked"),
            FacetValue::new("symbol-map", "Symbol map"),
        ],
        vec![
            FacetValue::new("red", "Red"),
            FacetValue::new("blue", "Blue"),
            FacetValue::new("only-black", "Only black"),
        ],
    )
}

pub fn fixture_catalog() -> Catalog {
    let works = vec![
        work(
            "w0001",
            Some(1930),
            "Industrial Accident Statistics",
            Some("Safety series"),
        ),
        work("w0002", Some(1950), "Graphic Methods for Presenting Facts", None),
        work("w0003", None, "Undated Album", None),
    ];
    let figures = vec![
        FigureSpec {
            id: "w0001-p0010-f01",
            types: &["bar"],
            colors: &["red"],
            title: Some("Accident frequency by year"),
            ocr: Some("accidents per thousand workers"),
            ..BLANK
        }
        .build(),
        FigureSpec {
            id: "w0001-p0012-f01",
            types: &["bar", "map"],
            combo: true,
            features: &[("map", &["symbol"]), ("bar", &["stacked"])],
            colors: &["red", "blue"],
            ..BLANK
        }
        .build(),
        FigureSpec {
            id: "w0002-p0020-f01",
            types: &["pie"],
            colors: &["blue"],
            title: Some("Causes of lost time"),
            ..BLANK
        }
        .build(),
        FigureSpec {
            id: "w0002-p0025-f02",
            types: &["map"],
            features: &[("map", &["symbol-map"])],
            only_black: true,
            ocr: Some("colour coded regions"),
            ..BLANK
        }
        .build(),
        FigureSpec {
            id: "w0003-f01",
            work: Some("w0003"),
            types: &["bar"],
            ..BLANK
        }
        .build(),
    ];
    Catalog::load(works, figures)
}

pub fn engine() -> GalleryEngine {
    GalleryEngine::new(fixture_catalog(), fixture_vocab())
}

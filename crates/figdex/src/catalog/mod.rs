// Copyright 2026 Figdex Project
// SPDX-License-Identifier: MIT

mod error;
mod load;
mod vocab;

pub use error::CatalogError;
pub use load::{load_collections, normalize_work_id, parse_page_from_id};
pub use vocab::{FacetValue, Vocab};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A publication/source document containing one or more figures.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    pub work_id: String,
    #[serde(default)]
    pub year: Option<i32>,
    pub title: String,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub publisher_city: Option<String>,
}

/// A single chart/image extracted from a Work.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Figure {
    pub id: String,
    #[serde(default)]
    pub work_id: Option<String>,
    /// Page number, normally derivable from the id (`w0001-p0038-f99`).
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub figure_code: Option<u32>,
    #[serde(default)]
    pub title: Option<String>,
    /// Chart-type ids (slugs). `combo` never appears here; it is the flag below.
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub is_combo: bool,
    /// Feature ids scoped per chart type.
    #[serde(default)]
    pub features_by_type: HashMap<String, Vec<String>>,
    /// Generic color ids. The reserved id `only-black` never appears here.
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub only_black: bool,
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default)]
    pub ai_description: Option<String>,
    #[serde(default)]
    pub ocr_text: Option<String>,
}

/// Figure joined with its work's denormalized fields. Computed once per
/// catalog load, never mutated afterwards.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FigureView {
    #[serde(flatten)]
    pub figure: Figure,
    pub work_title: Option<String>,
    pub work_year: Option<i32>,
    pub work_authors: Vec<String>,
    pub work_publisher: Option<String>,
    pub work_publisher_city: Option<String>,
    pub work_series: Option<String>,
}

impl FigureView {
    pub fn id(&self) -> &str {
        &self.figure.id
    }

    pub fn work_id(&self) -> Option<&str> {
        self.figure.work_id.as_deref()
    }

    pub fn page(&self) -> Option<u32> {
        self.figure.page
    }

    /// Feature ids the figure carries under the given chart type.
    pub fn features_under(&self, type_id: &str) -> &[String] {
        self.figure
            .features_by_type
            .get(type_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }
}

/// Immutable snapshot of the joined catalog. Reload replaces the whole value.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    views: Vec<FigureView>,
    by_id: HashMap<String, usize>,
    works: Vec<Work>,
    work_idx: HashMap<String, usize>,
}

impl Catalog {
    /// Join figures against works, denormalizing work fields. A figure whose
    /// `work_id` references no known work keeps `work_title = None` instead of
    /// failing the load.
    pub fn load(works: Vec<Work>, figures: Vec<Figure>) -> Catalog {
        load::join(works, figures)
    }

    pub fn views(&self) -> &[FigureView] {
        &self.views
    }

    pub fn works(&self) -> &[Work] {
        &self.works
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn figure(&self, id: &str) -> Option<&FigureView> {
        self.by_id.get(id).map(|&i| &self.views[i])
    }

    pub fn work(&self, work_id: &str) -> Option<&Work> {
        self.work_idx.get(work_id).map(|&i| &self.works[i])
    }

    pub fn work_of(&self, view: &FigureView) -> Option<&Work> {
        view.work_id().and_then(|w| self.work(w))
    }

    /// Previous/next figure ids within the same work, ordered by
    /// (page-from-id, id); figures without a parseable page sort last.
    pub fn siblings(&self, figure_id: &str) -> (Option<String>, Option<String>) {
        let view = match self.figure(figure_id) {
            Some(v) => v,
            None => return (None, None),
        };
        let work_id = match view.work_id() {
            Some(w) => w,
            None => return (None, None),
        };
        let mut family: Vec<&FigureView> = self
            .views
            .iter()
            .filter(|v| v.work_id() == Some(work_id))
            .collect();
        family.sort_by(|a, b| {
            (a.page().is_none(), a.page(), a.id()).cmp(&(b.page().is_none(), b.page(), b.id()))
        });
        let pos = match family.iter().position(|v| v.id() == figure_id) {
            Some(p) => p,
            None => return (None, None),
        };
        let prev = pos.checked_sub(1).map(|p| family[p].id().to_string());
        let next = family.get(pos + 1).map(|v| v.id().to_string());
        (prev, next)
    }

    pub(crate) fn from_parts(
        views: Vec<FigureView>,
        by_id: HashMap<String, usize>,
        works: Vec<Work>,
        work_idx: HashMap<String, usize>,
    ) -> Catalog {
        Catalog {
            views,
            by_id,
            works,
            work_idx,
        }
    }
}

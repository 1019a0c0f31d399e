// Copyright 2026 Figdex Project
// SPDX-License-Identifier: MIT

//! Faceted query/filter engine for a static catalog of chart figures.
//! Focus: deterministic search + facet projection with a shareable view state.

pub mod catalog;
pub mod facet;
pub mod gallery;
pub mod query;
pub mod selection;
pub mod sorter;
pub mod textindex;
pub mod viewstate;

pub use crate::catalog::{Catalog, CatalogError, FacetValue, Figure, FigureView, Vocab, Work};
pub use crate::facet::{FacetCount, FacetCounts};
pub use crate::gallery::{GalleryEngine, GalleryResults};
pub use crate::query::{ParsedQuery, StructuredFilters};
pub use crate::selection::{Selection, SortKey, ViewMode};
pub use crate::textindex::{FullText, RankedMatches, TextIndex};

/// Convenience for callers who want a one-shot engine over already-parsed
/// collections.
pub fn build_engine(works: Vec<Work>, figures: Vec<Figure>, vocab: Vocab) -> GalleryEngine {
    let catalog = Catalog::load(works, figures);
    GalleryEngine::new(catalog, vocab)
}

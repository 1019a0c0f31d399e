// Copyright 2026 Figdex Project
// SPDX-License-Identifier: MIT

use log::debug;
use std::collections::HashMap;

use crate::catalog::{Catalog, FigureView, Vocab, Work};
use crate::facet::{matches_facets, matches_scope, project, EffectiveFacets, FacetCounts};
use crate::query;
use crate::selection::Selection;
use crate::sorter::sort_figures;
use crate::textindex::{FullText, TextIndex};

/// Everything the (out-of-scope) renderer needs for one selection snapshot.
/// Pure function of (catalog, selection); recomputed per change, no caches
/// survive across selections.
#[derive(Debug)]
pub struct GalleryResults<'a> {
    /// Ordered figure set for the grid.
    pub figures: Vec<&'a FigureView>,
    pub facets: FacetCounts,
    pub active: Option<ActiveFigure<'a>>,
}

/// The detail/lightbox projection for the active figure.
#[derive(Debug)]
pub struct ActiveFigure<'a> {
    pub figure: &'a FigureView,
    pub work: Option<&'a Work>,
    /// Sibling navigation within the same work, page order.
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// Owns the catalog snapshot, the text index built from it, and the facet
/// vocabularies. Rebuilt whole on catalog refresh.
pub struct GalleryEngine {
    catalog: Catalog,
    vocab: Vocab,
    index: Box<dyn FullText>,
}

impl GalleryEngine {
    pub fn new(catalog: Catalog, vocab: Vocab) -> GalleryEngine {
        let index = Box::new(TextIndex::build(catalog.views()));
        GalleryEngine {
            catalog,
            vocab,
            index,
        }
    }

    /// Plug in a different ranked-match implementation.
    pub fn with_index(catalog: Catalog, vocab: Vocab, index: Box<dyn FullText>) -> GalleryEngine {
        GalleryEngine {
            catalog,
            vocab,
            index,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn vocab(&self) -> &Vocab {
        &self.vocab
    }

    pub fn results(&self, sel: &Selection) -> GalleryResults<'_> {
        let parsed = query::parse(&sel.query_text, &self.vocab, self.catalog.works());

        // Free text -> ranked candidates; no text -> the whole catalog.
        let (matched, scores): (Vec<&FigureView>, HashMap<String, f32>) =
            if parsed.text.trim().is_empty() {
                (self.catalog.views().iter().collect(), HashMap::new())
            } else {
                let ranked = self.index.search(&parsed.text);
                let views = ranked
                    .ids
                    .iter()
                    .filter_map(|id| self.catalog.figure(id))
                    .collect();
                (views, ranked.score_by_id)
            };

        // Scope clauses (work selection, work:/year:/series: from the query)
        // bound the candidate pool the facet counter projects over.
        let candidates: Vec<&FigureView> = matched
            .into_iter()
            .filter(|v| matches_scope(v, sel, &parsed.filters))
            .collect();

        let eff = EffectiveFacets::new(sel, &parsed.filters);
        let filtered: Vec<&FigureView> = candidates
            .iter()
            .copied()
            .filter(|v| matches_facets(v, &eff))
            .collect();
        debug!(
            "selection -> {} candidates, {} after facets",
            candidates.len(),
            filtered.len()
        );

        let facets = project(&candidates, &eff, &self.vocab);
        let figures = sort_figures(&filtered, sel.sort_key, &scores, sel.shuffle_seed);

        let active = sel
            .active_figure_id
            .as_deref()
            .and_then(|id| self.catalog.figure(id))
            .map(|figure| {
                let (prev, next) = self.catalog.siblings(figure.id());
                ActiveFigure {
                    figure,
                    work: self.catalog.work_of(figure),
                    prev,
                    next,
                }
            });

        GalleryResults {
            figures,
            facets,
            active,
        }
    }
}

impl std::fmt::Debug for GalleryEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryEngine")
            .field("figures", &self.catalog.len())
            .finish()
    }
}

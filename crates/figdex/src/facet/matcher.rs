// Copyright 2026 Figdex Project
// SPDX-License-Identifier: MIT

use std::collections::BTreeSet;

use crate::catalog::FigureView;
use crate::query::{normalize_match, StructuredFilters};
use crate::selection::{active_feature_type, Selection, COMBO, ONLY_BLACK};

/// Type/feature synonym pairs normalized before comparison:
/// (type id, alias, canonical id).
const FEATURE_SYNONYMS: &[(&str, &str, &str)] = &[("map", "symbol", "symbol-map")];

pub(crate) fn canonical_feature(type_id: &str, feature_id: &str) -> String {
    for (ty, alias, canonical) in FEATURE_SYNONYMS {
        if *ty == type_id && *alias == feature_id {
            return (*canonical).to_string();
        }
    }
    feature_id.to_string()
}

/// The facet state a figure is matched against: the user's toggles merged
/// with the structured type/feature/color clauses from the query. The merge
/// lives here so the toggle `Selection` itself never absorbs query clauses.
#[derive(Debug, Clone, Default)]
pub struct EffectiveFacets {
    pub types: BTreeSet<String>,
    pub features: BTreeSet<String>,
    pub colors: BTreeSet<String>,
    pub only_black: bool,
}

impl EffectiveFacets {
    pub fn new(sel: &Selection, filters: &StructuredFilters) -> EffectiveFacets {
        let mut types = sel.selected_types.clone();
        types.extend(filters.types.iter().cloned());
        let mut features = sel.selected_features.clone();
        features.extend(filters.features.iter().cloned());
        let mut colors = sel.selected_colors.clone();
        let mut only_black = sel.only_black;
        for c in &filters.colors {
            if c == ONLY_BLACK {
                only_black = true;
            } else {
                colors.insert(c.clone());
            }
        }
        EffectiveFacets {
            types,
            features,
            colors,
            only_black,
        }
    }
}

pub fn matches_work(view: &FigureView, selected_work_id: Option<&str>) -> bool {
    match selected_work_id {
        Some(w) => view.work_id() == Some(w),
        None => true,
    }
}

/// Structured `work:` clause: OR over resolved ids and leftover literal
/// substring matchers.
fn matches_query_work(view: &FigureView, work_ids: &[String], work_terms: &[String]) -> bool {
    if work_ids.is_empty() && work_terms.is_empty() {
        return true;
    }
    if let Some(w) = view.work_id() {
        if work_ids.iter().any(|id| id == w) {
            return true;
        }
    }
    work_terms.iter().any(|term| {
        let title_hit = view
            .work_title
            .as_deref()
            .map(|t| normalize_match(t).contains(term.as_str()))
            .unwrap_or(false);
        let series_hit = view
            .work_series
            .as_deref()
            .map(|s| normalize_match(s).contains(term.as_str()))
            .unwrap_or(false);
        title_hit || series_hit
    })
}

pub fn matches_years(view: &FigureView, years: &[i32]) -> bool {
    if years.is_empty() {
        return true;
    }
    match view.work_year {
        Some(y) => years.contains(&y),
        None => false,
    }
}

pub fn matches_series(view: &FigureView, series_terms: &[String]) -> bool {
    if series_terms.is_empty() {
        return true;
    }
    match view.work_series.as_deref() {
        Some(s) => {
            let normalized = normalize_match(s);
            series_terms.iter().any(|t| normalized.contains(t.as_str()))
        }
        None => false,
    }
}

/// Type facet: OR within selected base types, AND with the combo flag when
/// `combo` is selected. Empty selection always matches.
pub fn matches_types(view: &FigureView, selected: &BTreeSet<String>) -> bool {
    if selected.is_empty() {
        return true;
    }
    let wants_combo = selected.contains(COMBO);
    let base_ok = {
        let mut base = selected.iter().filter(|t| *t != COMBO).peekable();
        base.peek().is_none() || base.any(|t| view.figure.types.contains(t))
    };
    let combo_ok = !wants_combo || view.figure.is_combo;
    base_ok && combo_ok
}

/// Feature facet: only meaningful when exactly one base type is selected.
/// With zero or several base types, a non-empty feature selection matches
/// nothing (the UI prevents that state; this is the safe answer if it leaks).
pub fn matches_features(
    view: &FigureView,
    selected_types: &BTreeSet<String>,
    selected_features: &BTreeSet<String>,
) -> bool {
    if selected_features.is_empty() {
        return true;
    }
    let active = match active_feature_type(selected_types) {
        Some(t) => t,
        None => return false,
    };
    let figure_features: Vec<String> = view
        .features_under(active)
        .iter()
        .map(|f| canonical_feature(active, f))
        .collect();
    selected_features
        .iter()
        .any(|f| figure_features.contains(&canonical_feature(active, f)))
}

/// Color facet. `only_black` is a terminal check: when requested, the figure
/// must carry the flag and the generic color set is not consulted. Otherwise
/// the figure's colors must be a superset of every selected color (AND,
/// unlike the type/feature OR).
pub fn matches_colors(view: &FigureView, selected: &BTreeSet<String>, only_black: bool) -> bool {
    if only_black {
        return view.figure.only_black;
    }
    selected.iter().all(|c| view.figure.colors.contains(c))
}

/// Scope predicates: everything outside the projectable type/feature/color
/// facets (work selection, structured work/year/series clauses). The facet
/// counter's candidate pool is filtered by this alone.
pub fn matches_scope(view: &FigureView, sel: &Selection, filters: &StructuredFilters) -> bool {
    matches_work(view, sel.selected_work_id.as_deref())
        && matches_query_work(view, &filters.work_ids, &filters.work_terms)
        && matches_years(view, &filters.years)
        && matches_series(view, &filters.series)
}

/// The projectable facets only, against a merged facet state.
pub fn matches_facets(view: &FigureView, eff: &EffectiveFacets) -> bool {
    matches_types(view, &eff.types)
        && matches_features(view, &eff.types, &eff.features)
        && matches_colors(view, &eff.colors, eff.only_black)
}

/// Full filter: AND of every non-empty facet.
pub fn matches(view: &FigureView, sel: &Selection, filters: &StructuredFilters) -> bool {
    matches_scope(view, sel, filters) && matches_facets(view, &EffectiveFacets::new(sel, filters))
}

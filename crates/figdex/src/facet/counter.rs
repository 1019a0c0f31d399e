// Copyright 2026 Figdex Project
// SPDX-License-Identifier: MIT

use std::collections::{BTreeMap, BTreeSet};

use super::matcher::{
    canonical_feature, matches_colors, matches_features, matches_types, EffectiveFacets,
};
use crate::catalog::{FigureView, Vocab};
use crate::selection::{active_feature_type, ONLY_BLACK};

/// One facet chip: value id, display label, and the count the UI shows next
/// to it. For unselected values the count is a projection: how many results
/// would remain if that value were clicked next.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetCount {
    pub id: String,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetCounts {
    pub type_counts: Vec<FacetCount>,
    pub color_counts: Vec<FacetCount>,
    /// Populated only while exactly one base type is selected.
    pub available_features: Vec<FacetCount>,
}

fn single(id: &str) -> BTreeSet<String> {
    let mut set = BTreeSet::new();
    set.insert(id.to_string());
    set
}

/// Facet-count projection. `candidates` is the searched/scope-filtered pool
/// (text query, work selection, structured work/year/series clauses applied;
/// type/feature/color facets NOT applied).
///
/// Each facet's candidate pool excludes its own current selection: type
/// counts run against color-filtered candidates and probe each type value on
/// its own; color counts run against type/feature-filtered candidates and
/// probe each color on its own. Values already selected skip the projection
/// and report the plain count under the current full selection. Nothing here
/// mutates the real selection.
pub fn project(candidates: &[&FigureView], eff: &EffectiveFacets, vocab: &Vocab) -> FacetCounts {
    let mut counts = FacetCounts::default();

    // Pool for type probes: current colors applied, current types excluded.
    let type_pool: Vec<&FigureView> = candidates
        .iter()
        .copied()
        .filter(|v| matches_colors(v, &eff.colors, eff.only_black))
        .collect();
    let current_types = |v: &FigureView| {
        matches_types(v, &eff.types) && matches_features(v, &eff.types, &eff.features)
    };
    for value in vocab.chart_types() {
        let count = if eff.types.contains(&value.id) {
            type_pool.iter().filter(|v| current_types(v)).count()
        } else {
            let probe = single(&value.id);
            type_pool.iter().filter(|v| matches_types(v, &probe)).count()
        };
        counts.type_counts.push(FacetCount {
            id: value.id.clone(),
            label: value.label.clone(),
            count,
        });
    }

    // Pool for color probes: current types/features applied, colors excluded.
    let color_pool: Vec<&FigureView> = candidates
        .iter()
        .copied()
        .filter(|v| matches_types(v, &eff.types) && matches_features(v, &eff.types, &eff.features))
        .collect();
    let mut color_values: Vec<(String, String)> = vocab
        .colors()
        .iter()
        .map(|v| (v.id.clone(), v.label.clone()))
        .collect();
    if !color_values.iter().any(|(id, _)| id == ONLY_BLACK) {
        color_values.push((ONLY_BLACK.to_string(), "Only black".to_string()));
    }
    for (id, label) in color_values {
        let selected = if id == ONLY_BLACK {
            eff.only_black
        } else {
            eff.colors.contains(&id)
        };
        let count = if selected {
            color_pool
                .iter()
                .filter(|v| matches_colors(v, &eff.colors, eff.only_black))
                .count()
        } else if id == ONLY_BLACK {
            color_pool.iter().filter(|v| v.figure.only_black).count()
        } else {
            color_pool
                .iter()
                .filter(|v| v.figure.colors.contains(&id))
                .count()
        };
        counts.color_counts.push(FacetCount { id, label, count });
    }

    // Features offered for the single active type, against candidates
    // matching the current selection minus the feature facet itself.
    if let Some(active) = active_feature_type(&eff.types) {
        let feature_pool = candidates.iter().copied().filter(|v| {
            matches_types(v, &eff.types) && matches_colors(v, &eff.colors, eff.only_black)
        });
        let mut observed: BTreeMap<String, usize> = BTreeMap::new();
        for view in feature_pool {
            let mut seen_here: Vec<String> = Vec::new();
            for f in view.features_under(active) {
                let canonical = canonical_feature(active, f);
                if !seen_here.contains(&canonical) {
                    seen_here.push(canonical);
                }
            }
            for f in seen_here {
                *observed.entry(f).or_insert(0) += 1;
            }
        }
        counts.available_features = observed
            .into_iter()
            .map(|(id, count)| FacetCount {
                label: vocab.feature_label(&id),
                id,
                count,
            })
            .collect();
        counts
            .available_features
            .sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.id.cmp(&b.id)));
    }

    counts
}

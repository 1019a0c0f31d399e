// Copyright 2026 Figdex Project
// SPDX-License-Identifier: MIT

mod counter;
mod matcher;

pub use counter::{project, FacetCount, FacetCounts};
pub use matcher::{
    matches, matches_colors, matches_facets, matches_features, matches_scope, matches_series,
    matches_types, matches_work, matches_years, EffectiveFacets,
};

// Copyright 2026 Figdex Project
// SPDX-License-Identifier: MIT

/// Structured `key:value` clauses extracted from a raw query string.
/// Semantics within a key are OR, except colors which keep the facet's
/// superset (AND) semantics when matched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructuredFilters {
    /// Resolved color ids; may contain the reserved `only-black`.
    pub colors: Vec<String>,
    /// Resolved chart-type ids; may contain the pseudo-id `combo`.
    pub types: Vec<String>,
    /// Resolved feature ids.
    pub features: Vec<String>,
    /// Exact work ids (`w0012`).
    pub work_ids: Vec<String>,
    /// Normalized substring matchers over work title/series for values that
    /// resolved to no work.
    pub work_terms: Vec<String>,
    pub years: Vec<i32>,
    /// Normalized substring matchers over the work's series.
    pub series: Vec<String>,
}

impl StructuredFilters {
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.types.is_empty()
            && self.features.is_empty()
            && self.work_ids.is_empty()
            && self.work_terms.is_empty()
            && self.years.is_empty()
            && self.series.is_empty()
    }
}

/// Result of parsing a raw query: free text for the search index plus the
/// structured clauses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedQuery {
    pub text: String,
    pub filters: StructuredFilters,
    pub has_filters: bool,
}

// Copyright 2026 Figdex Project
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::query::slugify;

/// One value of a facet vocabulary (chart type, feature or color).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetValue {
    pub id: String,
    pub label: String,
    /// Swatch color, colors vocabulary only.
    #[serde(default)]
    pub hex: Option<String>,
}

impl FacetValue {
    pub fn new(id: &str, label: &str) -> FacetValue {
        FacetValue {
            id: id.to_string(),
            label: label.to_string(),
            hex: None,
        }
    }
}

/// Static facet reference data, loaded once alongside the catalog.
#[derive(Debug, Clone, Default)]
pub struct Vocab {
    chart_types: Vec<FacetValue>,
    features: Vec<FacetValue>,
    colors: Vec<FacetValue>,
}

fn resolve(values: &[FacetValue], token: &str) -> Option<String> {
    let slug = slugify(token);
    values
        .iter()
        .find(|v| {
            v.id.eq_ignore_ascii_case(token)
                || v.label.eq_ignore_ascii_case(token)
                || slugify(&v.label) == slug
        })
        .map(|v| v.id.clone())
}

fn label_of(values: &[FacetValue], id: &str) -> Option<String> {
    values.iter().find(|v| v.id == id).map(|v| v.label.clone())
}

impl Vocab {
    pub fn new(chart_types: Vec<FacetValue>, features: Vec<FacetValue>, colors: Vec<FacetValue>) -> Vocab {
        Vocab {
            chart_types,
            features,
            colors,
        }
    }

    pub fn chart_types(&self) -> &[FacetValue] {
        &self.chart_types
    }

    pub fn features(&self) -> &[FacetValue] {
        &self.features
    }

    pub fn colors(&self) -> &[FacetValue] {
        &self.colors
    }

    /// Resolve a user token (label, id, or slugified label) to a chart-type id.
    pub fn resolve_type(&self, token: &str) -> Option<String> {
        resolve(&self.chart_types, token)
    }

    pub fn resolve_feature(&self, token: &str) -> Option<String> {
        resolve(&self.features, token)
    }

    pub fn resolve_color(&self, token: &str) -> Option<String> {
        resolve(&self.colors, token)
    }

    /// Label for a facet id; falls back to the id so unlisted slugs still
    /// display.
    pub fn type_label(&self, id: &str) -> String {
        label_of(&self.chart_types, id).unwrap_or_else(|| id.to_string())
    }

    pub fn feature_label(&self, id: &str) -> String {
        label_of(&self.features, id).unwrap_or_else(|| id.to_string())
    }

    pub fn color_label(&self, id: &str) -> String {
        label_of(&self.colors, id).unwrap_or_else(|| id.to_string())
    }
}

// Copyright 2026 Figdex Project
// SPDX-License-Identifier: MIT

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;

use super::vocab::{FacetValue, Vocab};
use super::{Catalog, CatalogError, Figure, FigureView, Work};

static FIGURE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(w\d{4})-p(\d{3,4})-f(\d{2})$").unwrap());
static PAGE_IN_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)-p(\d{3,4})-").unwrap());
static WORK_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^w(\d+)$").unwrap());

/// Normalize the spreadsheet's loose work-id forms: `1` -> `w0001`,
/// `w1` -> `w0001`, `w0001` -> `w0001`. Anything else passes through
/// lowercased.
pub fn normalize_work_id(raw: &str) -> String {
    let raw: String = raw.trim().to_lowercase().replace(' ', "");
    if let Some(caps) = WORK_ID_RE.captures(&raw) {
        return format!("w{:0>4}", &caps[1]);
    }
    if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
        return format!("w{:0>4}", raw);
    }
    raw
}

/// Page number embedded in a figure id by the `-pNNNN-` convention.
pub fn parse_page_from_id(id: &str) -> Option<u32> {
    PAGE_IN_ID_RE
        .captures(id)
        .and_then(|c| c[1].parse::<u32>().ok())
}

fn parse_figure_components(id: &str) -> (Option<String>, Option<u32>, Option<u32>) {
    match FIGURE_ID_RE.captures(id) {
        Some(caps) => (
            Some(normalize_work_id(&caps[1])),
            caps[2].parse().ok(),
            caps[3].parse().ok(),
        ),
        None => (None, None, None),
    }
}

fn normalize_figure_id(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();
    for ext in [".png", ".webp", ".jpg", ".jpeg", ".tif", ".tiff"] {
        if let Some(stripped) = lower.strip_suffix(ext) {
            return stripped.to_string();
        }
    }
    lower
}

pub(super) fn join(works: Vec<Work>, figures: Vec<Figure>) -> Catalog {
    let mut normalized_works = Vec::with_capacity(works.len());
    let mut work_idx: HashMap<String, usize> = HashMap::new();
    for mut work in works {
        work.work_id = normalize_work_id(&work.work_id);
        if work.work_id.is_empty() || work.title.is_empty() {
            warn!("skipping work with empty id or title");
            continue;
        }
        if work_idx.contains_key(&work.work_id) {
            warn!("duplicate work id {}, keeping first", work.work_id);
            continue;
        }
        work_idx.insert(work.work_id.clone(), normalized_works.len());
        normalized_works.push(work);
    }

    let mut views = Vec::with_capacity(figures.len());
    let mut by_id: HashMap<String, usize> = HashMap::new();
    for mut figure in figures {
        figure.id = normalize_figure_id(&figure.id);
        if figure.id.is_empty() {
            warn!("skipping figure with empty id");
            continue;
        }
        if by_id.contains_key(&figure.id) {
            warn!("duplicate figure id {}, keeping first", figure.id);
            continue;
        }

        let (work_from_id, page_from_id, fcode_from_id) = parse_figure_components(&figure.id);
        figure.work_id = figure
            .work_id
            .as_deref()
            .map(normalize_work_id)
            .filter(|w| !w.is_empty())
            .or(work_from_id);
        figure.page = figure.page.or(page_from_id);
        figure.figure_code = figure.figure_code.or(fcode_from_id);

        let work = figure
            .work_id
            .as_deref()
            .and_then(|w| work_idx.get(w).map(|&i| &normalized_works[i]));
        if figure.work_id.is_some() && work.is_none() {
            warn!(
                "figure {} references unknown work {:?}",
                figure.id, figure.work_id
            );
        }

        let view = FigureView {
            work_title: work.map(|w| w.title.clone()),
            work_year: work.and_then(|w| w.year),
            work_authors: work.map(|w| w.authors.clone()).unwrap_or_default(),
            work_publisher: work.and_then(|w| w.publisher.clone()),
            work_publisher_city: work.and_then(|w| w.publisher_city.clone()),
            work_series: work.and_then(|w| w.series.clone()),
            figure,
        };
        by_id.insert(view.figure.id.clone(), views.len());
        views.push(view);
    }

    Catalog::from_parts(views, by_id, normalized_works, work_idx)
}

fn read_collection<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn read_optional_vocab(path: &Path) -> Vec<FacetValue> {
    if !path.exists() {
        warn!("vocabulary file {} missing, facet empty", path.display());
        return Vec::new();
    }
    match read_collection(path) {
        Ok(v) => v,
        Err(e) => {
            warn!("vocabulary file {} unreadable: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Load the catalog collections from a directory of JSON arrays:
/// `works.json`, `figures.json`, `chart_types.json`, `features.json`,
/// `colors.json`. Missing or malformed vocabulary files degrade to empty
/// facets; the two core collections must parse.
pub fn load_collections(dir: &Path) -> Result<(Vec<Work>, Vec<Figure>, Vocab), CatalogError> {
    let works: Vec<Work> = read_collection(&dir.join("works.json"))?;
    let figures: Vec<Figure> = read_collection(&dir.join("figures.json"))?;
    let vocab = Vocab::new(
        read_optional_vocab(&dir.join("chart_types.json")),
        read_optional_vocab(&dir.join("features.json")),
        read_optional_vocab(&dir.join("colors.json")),
    );
    Ok((works, figures, vocab))
}

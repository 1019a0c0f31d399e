// Copyright 2026 Figdex Project
// SPDX-License-Identifier: MIT

use std::collections::BTreeSet;

/// Reserved color id: "printed in black only". Kept out of the generic color
/// set; the tri-state color facet toggles the flag instead.
pub const ONLY_BLACK: &str = "only-black";

/// Pseudo type id for figures combining multiple chart types. Tracked as a
/// flag on figures, but selectable like a type.
pub const COMBO: &str = "combo";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Relevance,
    Oldest,
    Newest,
    Random,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Oldest => "oldest",
            SortKey::Newest => "newest",
            SortKey::Random => "random",
        }
    }

    /// Unknown values decode to the default rather than failing.
    pub fn from_param(s: &str) -> SortKey {
        match s {
            "oldest" => SortKey::Oldest,
            "newest" => SortKey::Newest,
            "random" => SortKey::Random,
            _ => SortKey::Relevance,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Figures,
    Publications,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Figures => "figures",
            ViewMode::Publications => "publications",
        }
    }

    pub fn from_param(s: &str) -> ViewMode {
        match s {
            "publications" => ViewMode::Publications,
            _ => ViewMode::Figures,
        }
    }
}

/// The full session view state. Every user interaction produces a new value;
/// `viewstate::encode` serializes it back to the parameter map after each
/// transition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub query_text: String,
    pub selected_types: BTreeSet<String>,
    /// Only meaningful while exactly one non-combo type is selected.
    pub selected_features: BTreeSet<String>,
    pub selected_colors: BTreeSet<String>,
    pub only_black: bool,
    pub selected_work_id: Option<String>,
    pub sort_key: SortKey,
    pub view_mode: ViewMode,
    pub active_figure_id: Option<String>,
    /// Explicit seed for the random ordering; present only while
    /// `sort_key == Random` so shared URLs reproduce the same shuffle.
    pub shuffle_seed: Option<u64>,
}

/// The single non-combo type a feature selection applies to, if exactly one
/// is selected.
pub fn active_feature_type(selected_types: &BTreeSet<String>) -> Option<&str> {
    let mut base = selected_types.iter().filter(|t| *t != COMBO);
    match (base.next(), base.next()) {
        (Some(t), None) => Some(t.as_str()),
        _ => None,
    }
}

impl Selection {
    pub fn toggle_type(&self, id: &str) -> Selection {
        let mut next = self.clone();
        if !next.selected_types.remove(id) {
            next.selected_types.insert(id.to_string());
        }
        // Switching the single active type (or losing it) invalidates the
        // feature selection.
        if active_feature_type(&next.selected_types) != active_feature_type(&self.selected_types) {
            next.selected_features.clear();
        }
        next
    }

    pub fn toggle_feature(&self, id: &str) -> Selection {
        let mut next = self.clone();
        if !next.selected_features.remove(id) {
            next.selected_features.insert(id.to_string());
        }
        next
    }

    /// `only-black` toggles the flag; any other id toggles membership in the
    /// generic color set. The two filters stay independent.
    pub fn toggle_color(&self, id: &str) -> Selection {
        let mut next = self.clone();
        if id == ONLY_BLACK {
            next.only_black = !next.only_black;
        } else if !next.selected_colors.remove(id) {
            next.selected_colors.insert(id.to_string());
        }
        next
    }

    pub fn set_work(&self, work_id: Option<&str>) -> Selection {
        let mut next = self.clone();
        next.selected_work_id = work_id.map(|s| s.to_string());
        next
    }

    /// `fresh_seed` is consulted only when entering random mode without a
    /// seed already present; re-setting random keeps the current order.
    pub fn set_sort(&self, key: SortKey, fresh_seed: Option<u64>) -> Selection {
        let mut next = self.clone();
        next.sort_key = key;
        next.shuffle_seed = match key {
            SortKey::Random => self.shuffle_seed.or(fresh_seed),
            _ => None,
        };
        next
    }

    pub fn set_view(&self, mode: ViewMode) -> Selection {
        let mut next = self.clone();
        next.view_mode = mode;
        next
    }

    pub fn set_query(&self, text: &str) -> Selection {
        let mut next = self.clone();
        next.query_text = text.to_string();
        next
    }

    pub fn select_figure(&self, id: Option<&str>) -> Selection {
        let mut next = self.clone();
        next.active_figure_id = id.map(|s| s.to_string());
        next
    }

    /// Reset everything except the view mode.
    pub fn clear_all(&self) -> Selection {
        Selection {
            view_mode: self.view_mode,
            ..Selection::default()
        }
    }
}

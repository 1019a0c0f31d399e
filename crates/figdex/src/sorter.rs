// Copyright 2026 Figdex Project
// SPDX-License-Identifier: MIT

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::catalog::FigureView;
use crate::selection::SortKey;

/// Knuth-style 64-bit linear congruential generator. Hand-rolled so a shared
/// seed reproduces the exact same permutation on every platform and version.
struct Lcg64 {
    state: u64,
}

impl Lcg64 {
    fn new(seed: u64) -> Lcg64 {
        Lcg64 {
            state: seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // xorshift the high bits down; raw LCG low bits are weak
        let x = self.state;
        (x ^ (x >> 31)).wrapping_mul(0x9e3779b97f4a7c15)
    }

    fn next_below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

/// Shared tiebreak chain: work title, then page number, then id. Missing
/// values sort after present ones.
fn tiebreak(a: &FigureView, b: &FigureView) -> Ordering {
    let at = (a.work_title.is_none(), a.work_title.as_deref());
    let bt = (b.work_title.is_none(), b.work_title.as_deref());
    at.cmp(&bt)
        .then_with(|| {
            (a.page().is_none(), a.page()).cmp(&(b.page().is_none(), b.page()))
        })
        .then_with(|| a.id().cmp(b.id()))
}

fn by_year(a: &FigureView, b: &FigureView, newest: bool) -> Ordering {
    match (a.work_year, b.work_year) {
        // figures lacking a year sort after all dated figures, in either
        // direction
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(ya), Some(yb)) => {
            if newest {
                yb.cmp(&ya)
            } else {
                ya.cmp(&yb)
            }
        }
    }
    .then_with(|| tiebreak(a, b))
}

/// Order the filtered set. Non-mutating: returns a fresh ordering of the
/// borrowed views. `scores` comes from the text search (missing id = 0);
/// `seed` drives the random permutation and must be supplied explicitly.
pub fn sort_figures<'a>(
    figures: &[&'a FigureView],
    key: SortKey,
    scores: &HashMap<String, f32>,
    seed: Option<u64>,
) -> Vec<&'a FigureView> {
    let mut out: Vec<&FigureView> = figures.to_vec();
    match key {
        SortKey::Relevance => {
            out.sort_by(|a, b| {
                let sa = scores.get(a.id()).copied().unwrap_or(0.0);
                let sb = scores.get(b.id()).copied().unwrap_or(0.0);
                sb.partial_cmp(&sa)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| tiebreak(a, b))
            });
        }
        SortKey::Oldest => out.sort_by(|a, b| by_year(a, b, false)),
        SortKey::Newest => out.sort_by(|a, b| by_year(a, b, true)),
        SortKey::Random => {
            // deterministic base order first, so the permutation depends only
            // on the seed, not on caller ordering
            out.sort_by(|a, b| a.id().cmp(b.id()));
            let mut rng = Lcg64::new(seed.unwrap_or(0));
            for i in (1..out.len()).rev() {
                let j = rng.next_below(i + 1);
                out.swap(i, j);
            }
        }
    }
    out
}

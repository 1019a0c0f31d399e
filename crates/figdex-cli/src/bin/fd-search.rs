// Copyright 2026 Figdex Project
// SPDX-License-Identifier: MIT

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use figdex::catalog::load_collections;
use figdex::selection::{Selection, SortKey};
use figdex::GalleryEngine;

#[derive(Parser, Debug)]
#[command(
    name = "fd-search",
    about = "Search a figure catalog directory (works.json, figures.json, vocabularies)"
)]
struct Args {
    /// Directory holding the catalog JSON collections
    data_dir: std::path::PathBuf,
    /// Query; supports advanced clauses: color:, type:, work:, year:, feature:, series:
    #[arg(default_value = "")]
    query: String,
    /// Sort order: relevance|oldest|newest|random
    #[arg(long, default_value = "relevance")]
    sort: String,
    /// Shuffle seed for --sort random (defaults to a fresh one)
    #[arg(long)]
    seed: Option<u64>,
    /// Toggle chart-type facets, comma-joined ids
    #[arg(long)]
    types: Option<String>,
    /// Toggle feature facets, comma-joined ids (requires a single type)
    #[arg(long)]
    features: Option<String>,
    /// Toggle color facets, comma-joined ids; `only-black` is accepted here
    #[arg(long)]
    colors: Option<String>,
    /// Restrict to a single work id
    #[arg(long)]
    work: Option<String>,
    /// Emit NDJSON instead of text lines
    #[arg(long)]
    json: bool,
    /// Limit number of printed figures
    #[arg(long)]
    limit: Option<usize>,
    /// Also print facet count projections
    #[arg(long)]
    counts: bool,
}

fn build_selection(args: &Args) -> Selection {
    let mut sel = Selection::default().set_query(&args.query);
    for id in list(&args.types) {
        sel = sel.toggle_type(&id);
    }
    for id in list(&args.features) {
        sel = sel.toggle_feature(&id);
    }
    for id in list(&args.colors) {
        sel = sel.toggle_color(&id);
    }
    if let Some(w) = &args.work {
        sel = sel.set_work(Some(w));
    }
    let key = SortKey::from_param(&args.sort);
    let fresh = match key {
        // a fresh seed is drawn only here, on the explicit switch into
        // random mode
        SortKey::Random => Some(args.seed.unwrap_or_else(rand::random)),
        _ => None,
    };
    sel.set_sort(key, fresh)
}

fn list(arg: &Option<String>) -> Vec<String> {
    arg.as_deref()
        .unwrap_or("")
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let (works, figures, vocab) = load_collections(&args.data_dir)?;
    let engine: GalleryEngine = figdex::build_engine(works, figures, vocab);
    let sel = build_selection(&args);
    let res = engine.results(&sel);

    let shown = match args.limit {
        Some(n) => &res.figures[..n.min(res.figures.len())],
        None => &res.figures[..],
    };
    for view in shown {
        if args.json {
            let v = serde_json::json!({
                "id": view.id(),
                "title": view.figure.title,
                "work": view.work_title,
                "year": view.work_year,
                "page": view.page(),
                "types": view.figure.types,
                "colors": view.figure.colors,
            });
            println!("{}", v);
        } else {
            println!(
                "{}\t{}\t{}",
                view.id(),
                view.work_title.as_deref().unwrap_or("-"),
                view.work_year.map(|y| y.to_string()).unwrap_or_else(|| "-".into()),
            );
        }
    }

    if args.counts {
        print_counts("types", &res.facets.type_counts);
        print_counts("colors", &res.facets.color_counts);
        if !res.facets.available_features.is_empty() {
            print_counts("features", &res.facets.available_features);
        }
    }
    Ok(())
}

fn print_counts(facet: &str, counts: &[figdex::FacetCount]) {
    for c in counts {
        println!("# {} {} ({}) = {}", facet, c.id, c.label, c.count);
    }
}

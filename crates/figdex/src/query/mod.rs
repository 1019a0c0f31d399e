// Copyright 2026 Figdex Project
// SPDX-License-Identifier: MIT

mod ast;
mod helpers;
mod parse;

pub use ast::{ParsedQuery, StructuredFilters};
pub use helpers::{normalize_match, slugify};
pub use parse::parse;

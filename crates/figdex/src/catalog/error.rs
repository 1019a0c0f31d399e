// Copyright 2026 Figdex Project
// SPDX-License-Identifier: MIT

use std::error::Error;
use std::fmt::{self, Display};

/// Typed errors returned by catalog loading. Record-level problems never end
/// up here; they degrade to defaults with a warning. Only file/JSON-level
/// failures are errors.
#[derive(Debug)]
pub enum CatalogError {
    /// A required collection file could not be read.
    Io(String),
    /// A collection file was not valid JSON for its record shape.
    Json(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(s) => write!(f, "io error: {}", s),
            CatalogError::Json(s) => write!(f, "json error: {}", s),
        }
    }
}

impl Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Json(e.to_string())
    }
}

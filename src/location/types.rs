//! Core types for the location subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A single row of a reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CityRecord {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }
}

/// Which reference table a query is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Worldwide dataset, Latin-script names.
    Global,
    /// Russian dataset, Cyrillic names.
    Regional,
}

impl TableKind {
    /// Any character in the Cyrillic block (U+0400..=U+04FF) selects the regional table.
    pub fn for_query(query: &str) -> Self {
        if query.chars().any(is_cyrillic) {
            Self::Regional
        } else {
            Self::Global
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Regional => write!(f, "regional"),
        }
    }
}

fn is_cyrillic(c: char) -> bool {
    ('\u{0400}'..='\u{04FF}').contains(&c)
}

/// Lookup errors surfaced at request time.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("City not found: '{0}'")]
    NotFound(String),
}

/// Failures while loading a reference dataset. Always fatal at startup.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Cannot open dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed dataset {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Dataset {} is missing required column '{column}'", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
}

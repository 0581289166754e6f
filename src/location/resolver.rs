//! City resolver — script detection, then exact → substring lookup.
//!
//! Flow:  trim → pick table by script → exact (case-insensitive) → contains → NotFound
//!
//! Ambiguity is settled by table order only. There is no relevance ranking.

use super::dataset::ReferenceTables;
use super::types::{CityRecord, LocationError, TableKind};
use std::sync::Arc;

/// Default number of autocomplete suggestions.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;
/// Hard cap on suggestions per request.
pub const MAX_SUGGESTION_LIMIT: usize = 50;

/// Resolves city names against the preloaded reference tables.
///
/// Cheap to clone; the tables are shared.
#[derive(Debug, Clone)]
pub struct CityResolver {
    tables: Arc<ReferenceTables>,
}

impl CityResolver {
    pub fn new(tables: Arc<ReferenceTables>) -> Self {
        Self { tables }
    }

    /// Resolve a query to the first matching record.
    pub fn resolve(&self, query: &str) -> Result<CityRecord, LocationError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LocationError::NotFound(query.to_string()));
        }

        let kind = TableKind::for_query(query);
        let needle = query.to_lowercase();
        let records = self.tables.table(kind).records();
        tracing::debug!(%kind, query, "Searching reference table");

        if let Some(city) = records.iter().find(|r| r.name.to_lowercase() == needle) {
            tracing::debug!(name = %city.name, "Exact match");
            return Ok(city.clone());
        }

        if let Some(city) = records.iter().find(|r| r.name.to_lowercase().contains(&needle)) {
            tracing::debug!(name = %city.name, "Partial match");
            return Ok(city.clone());
        }

        Err(LocationError::NotFound(query.to_string()))
    }

    /// Autocomplete candidates: exact matches first, then substring matches,
    /// each group in table order. Names are de-duplicated.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<String> {
        let query = query.trim();
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }

        let kind = TableKind::for_query(query);
        let needle = query.to_lowercase();
        let records = self.tables.table(kind).records();

        let lowered: Vec<(String, &CityRecord)> = records
            .iter()
            .map(|r| (r.name.to_lowercase(), r))
            .collect();

        let exact = lowered.iter().filter(|(name, _)| *name == needle);
        let partial = lowered
            .iter()
            .filter(|(name, _)| *name != needle && name.contains(&needle));

        let mut out: Vec<String> = Vec::new();
        for (_, record) in exact.chain(partial) {
            if out.len() >= limit {
                break;
            }
            if !out.contains(&record.name) {
                out.push(record.name.clone());
            }
        }
        out
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }
}

/// Clamp a requested suggestion count into `1..=MAX_SUGGESTION_LIMIT`.
pub fn clamp_limit(requested: Option<usize>) -> usize {
    requested
        .unwrap_or(DEFAULT_SUGGESTION_LIMIT)
        .clamp(1, MAX_SUGGESTION_LIMIT)
}

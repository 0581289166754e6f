//! Location subsystem for cityweather.
//!
//! Loads the global and regional reference tables once at startup and
//! resolves city names against them by script-dispatched string matching.

pub mod dataset;
pub mod resolver;
pub mod types;

pub use dataset::{ReferenceTable, ReferenceTables};
pub use resolver::{clamp_limit, CityResolver, DEFAULT_SUGGESTION_LIMIT, MAX_SUGGESTION_LIMIT};
pub use types::{CityRecord, DatasetError, LocationError, TableKind};

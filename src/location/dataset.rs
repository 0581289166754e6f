//! Reference datasets loaded from CSV at startup.
//!
//! Each file needs `city`, `lat` and `lng` header columns; any other
//! columns (country, population, ...) are ignored. Row order is preserved
//! because lookups break ties by table order.

use super::types::{CityRecord, DatasetError, TableKind};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 3] = ["city", "lat", "lng"];

#[derive(Deserialize)]
struct CsvRow {
    city: String,
    lat: f64,
    lng: f64,
}

/// An ordered, read-only list of cities.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    records: Vec<CityRecord>,
}

impl ReferenceTable {
    pub fn from_records(records: Vec<CityRecord>) -> Self {
        Self { records }
    }

    /// Load a table from a CSV file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let csv_err = |source| DatasetError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(file);

        let headers = reader.headers().map_err(csv_err)?;
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DatasetError::MissingColumn {
                    path: path.to_path_buf(),
                    column,
                });
            }
        }

        let mut records = Vec::new();
        for row in reader.deserialize::<CsvRow>() {
            let row = row.map_err(csv_err)?;
            records.push(CityRecord::new(row.city, row.lat, row.lng));
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[CityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Both tables, selected per query by [`TableKind`].
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    pub global: ReferenceTable,
    pub regional: ReferenceTable,
}

impl ReferenceTables {
    /// Load both datasets. Either one failing aborts the whole load.
    pub fn load(
        global_path: impl AsRef<Path>,
        regional_path: impl AsRef<Path>,
    ) -> Result<Self, DatasetError> {
        let global = ReferenceTable::load(global_path)?;
        let regional = ReferenceTable::load(regional_path)?;
        tracing::info!(
            global = global.len(),
            regional = regional.len(),
            "Loaded reference tables"
        );
        Ok(Self { global, regional })
    }

    pub fn table(&self, kind: TableKind) -> &ReferenceTable {
        match kind {
            TableKind::Global => &self.global,
            TableKind::Regional => &self.regional,
        }
    }
}

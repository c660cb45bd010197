//! A local, JSONL-file-backed record source.
//!
//! Each line of the catalog file is one JSON object in the
//! [`CatalogRecord`] shape:
//!
//! ```jsonl
//! {"set_id": "75192", "name": "Millennium Falcon", "theme": "Star Wars", "piece_count": 7541}
//! {"set_id": "60386", "name": "Recycling Truck", "theme": "City", "piece_count": 261}
//! ```
//!
//! This is the reference [`RecordSource`] implementation, used by the CLI
//! `search` command and by tests. Text search is case-insensitive substring
//! containment over name, theme, and description.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::catalog::record::CatalogRecord;
use crate::error::{BrickseekError, Result};
use crate::pipeline::RecordSource;

/// An in-memory catalog loaded from a JSONL file.
#[derive(Debug, Clone)]
pub struct LocalCatalog {
    records: Vec<CatalogRecord>,
}

impl LocalCatalog {
    /// Create a catalog from already-validated records.
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        LocalCatalog { records }
    }

    /// Load a catalog from a JSONL file, validating every record.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, a JSON error if a
    /// line is not valid JSON, or a validation error if a record violates the
    /// field invariants. A malformed record must not enter the pipeline, so
    /// loading is all-or-nothing.
    pub fn load_jsonl<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);

        let mut records = Vec::new();
        for (line_number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let record: CatalogRecord = serde_json::from_str(&line).map_err(|e| {
                BrickseekError::validation(format!(
                    "line {}: invalid record: {e}",
                    line_number + 1
                ))
            })?;
            // Deserialization bypasses the builder, so re-check invariants.
            record.validate()?;
            records.push(record);
        }

        Ok(LocalCatalog { records })
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in file order.
    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }
}

impl RecordSource for LocalCatalog {
    fn search_by_text(&self, query: &str) -> Result<Vec<CatalogRecord>> {
        let query_lower = query.to_lowercase();
        Ok(self
            .records
            .iter()
            .filter(|record| {
                record.name().to_lowercase().contains(&query_lower)
                    || record.theme().to_lowercase().contains(&query_lower)
                    || record
                        .description()
                        .is_some_and(|d| d.to_lowercase().contains(&query_lower))
            })
            .cloned()
            .collect())
    }

    fn fetch_by_id(&self, set_id: &str) -> Result<CatalogRecord> {
        self.records
            .iter()
            .find(|record| record.set_id() == set_id)
            .cloned()
            .ok_or_else(|| BrickseekError::not_found(format!("set {set_id}")))
    }
}

//! The catalog record value type.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{BrickseekError, Result};

/// Earliest release year accepted at record construction.
pub const MIN_RELEASE_YEAR: i32 = 1900;

/// Latest release year accepted at record construction. Leaves headroom over
/// the query-side year pattern (1900-2099) for announced future releases.
pub const MAX_RELEASE_YEAR: i32 = 2100;

/// A single catalog item.
///
/// Records are immutable value objects: all fields are validated once at
/// construction and no component mutates a record afterwards. The set id is
/// the unique key within any deduplicated collection.
///
/// # Examples
///
/// ```
/// use brickseek::catalog::CatalogRecord;
///
/// let record = CatalogRecord::builder()
///     .set_id("75192")
///     .name("Millennium Falcon")
///     .theme("Star Wars")
///     .piece_count(7541)
///     .price(849.99)
///     .release_year(2017)
///     .build()
///     .unwrap();
///
/// assert_eq!(record.set_id(), "75192");
/// assert_eq!(record.piece_count(), 7541);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    set_id: String,
    name: String,
    theme: String,
    piece_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    release_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl CatalogRecord {
    /// Create a builder for constructing a record.
    pub fn builder() -> CatalogRecordBuilder {
        CatalogRecordBuilder::new()
    }

    /// The unique set identifier.
    pub fn set_id(&self) -> &str {
        &self.set_id
    }

    /// The display name of the set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The theme label (e.g. "Star Wars").
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Number of pieces in the set.
    pub fn piece_count(&self) -> u32 {
        self.piece_count
    }

    /// Retail price, if known.
    pub fn price(&self) -> Option<f64> {
        self.price
    }

    /// Release year, if known.
    pub fn release_year(&self) -> Option<i32> {
        self.release_year
    }

    /// Free-text description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Validate field invariants. Called by the builder and by the JSONL
    /// deserialization path, which bypasses the builder.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.set_id.trim().is_empty() {
            return Err(BrickseekError::validation("set id must not be blank"));
        }
        if self.name.trim().is_empty() {
            return Err(BrickseekError::validation(format!(
                "set {}: name must not be blank",
                self.set_id
            )));
        }
        if self.theme.trim().is_empty() {
            return Err(BrickseekError::validation(format!(
                "set {}: theme must not be blank",
                self.set_id
            )));
        }
        if let Some(price) = self.price {
            if !price.is_finite() || price < 0.0 {
                return Err(BrickseekError::validation(format!(
                    "set {}: price must be a non-negative number, got {price}",
                    self.set_id
                )));
            }
        }
        if let Some(year) = self.release_year {
            if !(MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&year) {
                return Err(BrickseekError::validation(format!(
                    "set {}: release year {year} outside {MIN_RELEASE_YEAR}-{MAX_RELEASE_YEAR}",
                    self.set_id
                )));
            }
        }
        Ok(())
    }
}

/// A builder for constructing validated catalog records in a fluent manner.
#[derive(Debug, Default)]
pub struct CatalogRecordBuilder {
    set_id: String,
    name: String,
    theme: String,
    piece_count: u32,
    price: Option<f64>,
    release_year: Option<i32>,
    description: Option<String>,
}

impl CatalogRecordBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unique set identifier.
    pub fn set_id<S: Into<String>>(mut self, set_id: S) -> Self {
        self.set_id = set_id.into();
        self
    }

    /// Set the display name.
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Set the theme label.
    pub fn theme<S: Into<String>>(mut self, theme: S) -> Self {
        self.theme = theme.into();
        self
    }

    /// Set the piece count.
    pub fn piece_count(mut self, piece_count: u32) -> Self {
        self.piece_count = piece_count;
        self
    }

    /// Set the retail price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the release year.
    pub fn release_year(mut self, year: i32) -> Self {
        self.release_year = Some(year);
        self
    }

    /// Set the free-text description.
    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validate the accumulated fields and build the record.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the set id, name, or theme is blank, if
    /// the price is negative or non-finite, or if the release year falls
    /// outside [`MIN_RELEASE_YEAR`]..=[`MAX_RELEASE_YEAR`].
    pub fn build(self) -> Result<CatalogRecord> {
        let record = CatalogRecord {
            set_id: self.set_id,
            name: self.name,
            theme: self.theme,
            piece_count: self.piece_count,
            price: self.price,
            release_year: self.release_year,
            description: self.description,
        };
        record.validate()?;
        Ok(record)
    }
}

/// Merge result lists into one collection with at most one record per set id.
///
/// The first record seen for a given id wins; relative order of the survivors
/// is the order of first occurrence.
pub fn dedupe_by_id(records: impl IntoIterator<Item = CatalogRecord>) -> Vec<CatalogRecord> {
    let mut seen: AHashSet<String> = AHashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.set_id().to_string()))
        .collect()
}

//! Catalog record types.
//!
//! This module provides the core value types that flow through the query
//! pipeline:
//!
//! - [`record::CatalogRecord`] - an immutable, validated catalog item
//! - [`record::dedupe_by_id`] - identifier-based deduplication of merged
//!   result lists (first-seen wins)
//! - [`result::SearchResult`] - the combined outcome of a search request
//!   (ranked records plus optional assistant prose)
//!
//! Records are validated at construction and never mutated afterwards;
//! transformations produce new records.

pub mod record;
pub mod result;

pub use record::{CatalogRecord, CatalogRecordBuilder, dedupe_by_id};
pub use result::SearchResult;

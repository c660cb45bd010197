//! Remote catalog provider payload mapping.
//!
//! The three remote providers (Brickset, Rebrickable, BrickOwl) each return
//! their own raw JSON shape. This module is the only place those payloads are
//! touched: each provider has a typed payload struct and an explicit parse
//! function, and [`merge_set_payloads`] combines the three into one validated
//! [`CatalogRecord`]. Raw provider JSON never flows past this boundary into
//! expansion or ranking.
//!
//! Field ownership mirrors what each provider is authoritative for:
//! Brickset supplies name, theme, release year, and description; Rebrickable
//! supplies the piece count; BrickOwl supplies the retail price.

pub mod brickowl;
pub mod brickset;
pub mod rebrickable;

use serde_json::Value;

use crate::catalog::record::CatalogRecord;
use crate::error::Result;

/// Combine the three provider payloads for one set into a validated record.
///
/// # Errors
///
/// Returns a provider error if a payload cannot be parsed, or a validation
/// error if the combined fields do not form a valid record (e.g. Brickset
/// returned a blank name).
pub fn merge_set_payloads(
    set_id: &str,
    brickset_payload: &Value,
    rebrickable_payload: &Value,
    brickowl_payload: &Value,
) -> Result<CatalogRecord> {
    let brickset = brickset::parse_payload(brickset_payload)?;
    let rebrickable = rebrickable::parse_payload(rebrickable_payload)?;
    let brickowl = brickowl::parse_payload(brickowl_payload)?;

    let mut builder = CatalogRecord::builder()
        .set_id(set_id)
        .name(brickset.name)
        .theme(brickset.theme)
        .piece_count(rebrickable.num_parts);

    if let Some(price) = brickowl.retail_price {
        builder = builder.price(price);
    }
    if let Some(year) = brickset.year {
        builder = builder.release_year(year);
    }
    if let Some(description) = brickset.description {
        if !description.is_empty() {
            builder = builder.description(description);
        }
    }

    builder.build()
}

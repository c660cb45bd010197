//! Brickset payload mapping.
//!
//! Brickset is authoritative for the set name, theme, release year, and
//! description. Its search endpoint returns a list of hits carrying a
//! `setID`; details are then fetched per id.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{BrickseekError, Result};

/// The fields we consume from a Brickset set-details payload.
#[derive(Debug, Clone, Deserialize)]
pub struct BricksetPayload {
    pub name: String,
    pub theme: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Parse a raw Brickset set-details payload.
pub fn parse_payload(payload: &Value) -> Result<BricksetPayload> {
    serde_json::from_value(payload.clone())
        .map_err(|e| BrickseekError::provider(format!("invalid Brickset payload: {e}")))
}

/// One hit in a Brickset search response.
#[derive(Debug, Clone, Deserialize)]
struct BricksetSearchHit {
    #[serde(rename = "setID")]
    set_id: String,
}

/// Extract the set ids from a Brickset search response (a JSON array of
/// hits), preserving result order.
pub fn search_hit_ids(payload: &Value) -> Result<Vec<String>> {
    let hits: Vec<BricksetSearchHit> = serde_json::from_value(payload.clone())
        .map_err(|e| BrickseekError::provider(format!("invalid Brickset search response: {e}")))?;
    Ok(hits.into_iter().map(|hit| hit.set_id).collect())
}

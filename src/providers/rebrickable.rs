//! Rebrickable payload mapping.
//!
//! Rebrickable is authoritative for the piece count.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{BrickseekError, Result};

/// The fields we consume from a Rebrickable set payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RebrickablePayload {
    #[serde(default)]
    pub num_parts: u32,
}

/// Parse a raw Rebrickable set payload. A missing `num_parts` maps to zero,
/// matching the provider's behavior for accessory packs.
pub fn parse_payload(payload: &Value) -> Result<RebrickablePayload> {
    serde_json::from_value(payload.clone())
        .map_err(|e| BrickseekError::provider(format!("invalid Rebrickable payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_payload() {
        let payload = parse_payload(&json!({"set_num": "75192-1", "num_parts": 7541})).unwrap();
        assert_eq!(payload.num_parts, 7541);
    }

    #[test]
    fn test_missing_num_parts_defaults_to_zero() {
        let payload = parse_payload(&json!({"set_num": "5006085-1"})).unwrap();
        assert_eq!(payload.num_parts, 0);
    }

    #[test]
    fn test_negative_num_parts_is_provider_error() {
        let result = parse_payload(&json!({"num_parts": -5}));
        assert!(matches!(result, Err(BrickseekError::Provider(_))));
    }
}

//! BrickOwl payload mapping.
//!
//! BrickOwl is authoritative for the retail price.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{BrickseekError, Result};

/// The fields we consume from a BrickOwl catalog payload.
#[derive(Debug, Clone, Deserialize)]
pub struct BrickOwlPayload {
    #[serde(default)]
    pub retail_price: Option<f64>,
}

/// Parse a raw BrickOwl catalog payload. The price is optional; sets no
/// longer in retail have none.
pub fn parse_payload(payload: &Value) -> Result<BrickOwlPayload> {
    serde_json::from_value(payload.clone())
        .map_err(|e| BrickseekError::provider(format!("invalid BrickOwl payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_payload() {
        let payload = parse_payload(&json!({"name": "Falcon", "retail_price": 849.99})).unwrap();
        assert_eq!(payload.retail_price, Some(849.99));
    }

    #[test]
    fn test_missing_price() {
        let payload = parse_payload(&json!({"name": "Falcon"})).unwrap();
        assert_eq!(payload.retail_price, None);
    }
}

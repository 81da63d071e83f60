//! Opaque payload type passed through to notifiers

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured value handed to a notifier as-is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(serde_json::Value);

/// Daily report contents
pub type ReportPayload = Payload;

/// Trade event contents
pub type TradeNotification = Payload;

impl Payload {
    /// Parse a payload from JSON text
    pub fn parse(json: &str) -> Result<Self> {
        let value = serde_json::from_str(json)
            .with_context(|| format!("Invalid JSON payload: {}", json))?;
        Ok(Self(value))
    }

    #[allow(dead_code)]
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl Default for Payload {
    fn default() -> Self {
        Self(serde_json::Value::Object(serde_json::Map::new()))
    }
}

impl From<serde_json::Value> for Payload {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// Compact JSON, as written to the log
impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

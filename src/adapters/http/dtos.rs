use serde::{Deserialize, Serialize};

/// Error body returned for failures that are not form rejections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
  /// Machine-readable error kind
  pub error: String,

  /// Human-readable message
  pub message: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
  pub status: String,
  pub version: String,
}

impl HealthResponse {
  pub fn ok() -> Self {
    Self {
      status: "ok".to_string(),
      version: env!("CARGO_PKG_VERSION").to_string(),
    }
  }
}

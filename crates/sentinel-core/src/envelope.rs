//! Backend response envelope

use serde::{Deserialize, Serialize};

/// Standard response wrapper used by every backend endpoint
///
/// ```json
/// { "success": true, "data": { ... } }
/// { "success": false, "error": "Unauthorized access" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Missing `success` is read as `true`
    #[serde(default = "default_success")]
    pub success: bool,

    /// Payload; `null` and absent both decode to `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn default_success() -> bool {
    true
}

impl<T> ApiResponse<T> {
    /// Wrap a successful payload
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    /// Best available reason for a failed response
    pub fn failure_reason(&self) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| "backend reported failure".to_string())
    }
}

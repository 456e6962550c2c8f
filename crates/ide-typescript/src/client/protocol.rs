//! JSON-RPC 2.0 notification messages

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AdapterError, Result};

/// Custom notification carrying streamed partial results
pub const PARTIAL_RESULT: &str = "$/partialResult";

/// JSON-RPC 2.0 notification (request without ID)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcNotification {
    /// JSON-RPC version (always "2.0")
    pub jsonrpc: String,
    /// Notification method name
    pub method: String,
    /// Notification parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcNotification {
    /// Create a notification
    pub fn new(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: method.into(),
            params,
        }
    }

    /// Parse a notification from a message body
    pub fn parse(body: &str) -> Result<Self> {
        let notification: Self = serde_json::from_str(body)?;
        if notification.jsonrpc != "2.0" {
            return Err(AdapterError::Protocol(format!(
                "Unsupported JSON-RPC version: {}",
                notification.jsonrpc
            )));
        }
        Ok(notification)
    }
}

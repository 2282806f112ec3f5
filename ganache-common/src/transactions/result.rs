use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Success body of `/api/send-transaction/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResult {
    pub transaction_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Failure body returned with a non-success status.
///
/// Clients send `message`; the FastAPI server answers with `detail`, which
/// is a string for handled errors and a list for validation failures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl ApiErrorBody {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self { message: Some(message.into()), detail: None }
    }

    /// Text to show the user, if the payload carries any.
    pub fn message(&self) -> Option<String> {
        if let Some(message) = &self.message {
            return Some(message.clone());
        }
        match &self.detail {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }
}

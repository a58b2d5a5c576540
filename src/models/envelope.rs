use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message the backend sends when an operation succeeded
pub const OK_MESSAGE: &str = "OK";

/// Response wrapper returned by every backend endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub message: String,
    #[serde(default)]
    pub result: Option<Value>,
}

impl Envelope {
    /// Whether the backend reported success
    pub fn is_ok(&self) -> bool {
        self.message == OK_MESSAGE
    }
}

//! z/OSMF error body.

use serde::{Deserialize, Serialize};

/// JSON error body sent by z/OSMF alongside non-2xx statuses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZosmfErrorBody {
    #[serde(default)]
    pub rc: i32,
    #[serde(default)]
    pub reason: i32,
    #[serde(default)]
    pub category: i32,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ZosmfErrorBody {
    /// Message with details appended, one per line.
    pub fn full_message(&self) -> String {
        if self.details.is_empty() {
            self.message.clone()
        } else {
            format!("{}\n{}", self.message, self.details.join("\n"))
        }
    }
}

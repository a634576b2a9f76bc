use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One change record from the todo history endpoint.
/// The backend owns the shape; unrecognized detail is carried through untyped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoHistoryEntry {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub changed_by: Option<String>,
    #[serde(default)]
    pub changed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub changes: Value,
}

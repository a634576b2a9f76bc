use crate::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response of the aggregation trigger endpoint.
/// "pending" means the flow was queued and the client should poll the
/// metrics endpoint until `last_updated` moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationStatus {
    pub status: String,
    #[serde(default)]
    pub flow_name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub tenants_processed: u64,
}

impl AggregationStatus {
    pub fn is_pending(&self) -> bool {
        self.status == "pending"
    }
}

/// Aggregated dashboard metrics for the current tenant.
///
/// `last_updated` is None until the first aggregation has run; the metrics
/// poll uses it as the change marker after triggering a refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    #[serde(default)]
    pub schema_name: String,
    #[serde(default)]
    pub new_todos: u64,
    #[serde(default)]
    pub completed_todos: u64,
    #[serde(default)]
    pub total_todos: u64,
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub owners: u64,
    #[serde(default)]
    pub members: u64,
    #[serde(default)]
    pub viewers: u64,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub message: Option<String>,
}

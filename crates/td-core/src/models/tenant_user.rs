use crate::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A member of the current tenant, as returned by the team listing endpoint.
/// Always refetched whole; the client never patches individual entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantUser {
    pub id: i64,
    pub username: String,
    pub role: Role,
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
}

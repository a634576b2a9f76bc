use crate::{InvitationStatus, Role};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An email invitation into the current tenant.
/// Status transitions are server-driven; the client only refetches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub token: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub status: InvitationStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

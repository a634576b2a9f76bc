use crate::Role;

use serde::{Deserialize, Serialize};

/// Response of the role-update endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleChange {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub old_role: Option<Role>,
    pub new_role: Role,
    #[serde(default)]
    pub tokens_revoked: bool,
}

/// Response of the remove-user endpoint.
/// The keycloak fields report best-effort identity-provider cleanup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovedUser {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub removed_role: Option<Role>,
    #[serde(default)]
    pub keycloak_tokens_revoked: bool,
    #[serde(default)]
    pub remaining_tenants: u64,
}

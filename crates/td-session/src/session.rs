use td_core::{Role, TenantRef};

use serde::{Deserialize, Serialize};

/// The client-held bundle of tokens, identity, and tenant/role context.
///
/// Created on login or invitation acceptance, fully replaced on tenant
/// switch, destroyed on logout or any detected invalidation. The client
/// never holds two sessions at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub username: String,
    pub role: Role,
    pub tenant_schema: String,
    /// All tenants this user belongs to, in the order the server listed them
    #[serde(default)]
    pub tenant_list: Vec<TenantRef>,
}

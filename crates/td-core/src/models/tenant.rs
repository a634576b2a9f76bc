use serde::{Deserialize, Serialize};

/// One tenant the user belongs to, as listed in a login response.
/// The schema is the identifier the switch endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantRef {
    pub schema: String,
    #[serde(default)]
    pub name: String,
}

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Tenant membership role.
///
/// The role shown anywhere in the client is always the value last returned by
/// the server (login, switch, or the session validator) - never derived
/// locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Full control over the tenant, including team and invitation management
    Owner,
    /// Can create todos and edit their own
    Member,
    /// Read-only access
    Viewer,
}

impl Role {
    /// Convert to the wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "OWNER",
            Self::Member => "MEMBER",
            Self::Viewer => "VIEWER",
        }
    }

    /// Whether this role may manage team membership and invitations.
    /// A hint for the CLI only; the backend enforces the real policy.
    pub fn can_manage_team(&self) -> bool {
        matches!(self, Self::Owner)
    }

    /// Whether this role may create or edit todos
    pub fn can_edit_todos(&self) -> bool {
        !matches!(self, Self::Viewer)
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "OWNER" => Ok(Self::Owner),
            "MEMBER" => Ok(Self::Member),
            "VIEWER" => Ok(Self::Viewer),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

use crate::{RecurrenceType, Role};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who created a todo, with their role in the current tenant.
/// The role is null when the creator is no longer a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedBy {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Client-side view of a todo.
///
/// Owned by the backend; the client holds a read cache that is repopulated by
/// a full list refetch after every mutation. `is_overdue` is server-computed
/// and never derived locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub is_overdue: bool,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub recurrence_type: RecurrenceType,
    #[serde(default)]
    pub assigned_to_username: Option<String>,
    #[serde(default)]
    pub created_by: Option<CreatedBy>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::invitation::Invitation;
pub use models::invitation_status::InvitationStatus;
pub use models::metrics::{AggregationStatus, DashboardMetrics};
pub use models::recurrence_type::RecurrenceType;
pub use models::role::Role;
pub use models::team::{RemovedUser, RoleChange};
pub use models::tenant::TenantRef;
pub use models::tenant_user::TenantUser;
pub use models::todo::{CreatedBy, Todo};
pub use models::todo_history::TodoHistoryEntry;

#[cfg(test)]
mod tests;

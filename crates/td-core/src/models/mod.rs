pub mod invitation;
pub mod invitation_status;
pub mod metrics;
pub mod recurrence_type;
pub mod role;
pub mod team;
pub mod tenant;
pub mod tenant_user;
pub mod todo;
pub mod todo_history;

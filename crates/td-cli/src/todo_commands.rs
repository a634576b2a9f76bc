use crate::parsers::{parse_recurrence, parse_utc};

use chrono::{DateTime, Utc};
use clap::Subcommand;
use td_core::RecurrenceType;

#[derive(Subcommand)]
pub enum TodoCommands {
    /// List all todos in the current tenant
    List,

    /// Get a todo by ID
    Get { id: i64 },

    /// Create a new todo
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: Option<String>,

        /// Due date, RFC 3339 (e.g. 2026-09-01T17:00:00Z)
        #[arg(long, value_parser = parse_utc)]
        due_date: Option<DateTime<Utc>>,

        /// Recurrence: none, daily, weekly, monthly
        #[arg(long, value_parser = parse_recurrence)]
        recurrence: Option<RecurrenceType>,

        /// Username of the assignee
        #[arg(long)]
        assign_to: Option<String>,
    },

    /// Update fields of a todo
    Update {
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        completed: Option<bool>,

        /// Due date, RFC 3339
        #[arg(long, value_parser = parse_utc)]
        due_date: Option<DateTime<Utc>>,

        /// Recurrence: none, daily, weekly, monthly
        #[arg(long, value_parser = parse_recurrence)]
        recurrence: Option<RecurrenceType>,

        /// Username of the assignee
        #[arg(long)]
        assign_to: Option<String>,
    },

    /// Delete a todo (OWNER only)
    Delete { id: i64 },

    /// Flip the completion flag of a todo
    Toggle { id: i64 },

    /// Show the change history of a todo
    History { id: i64 },
}

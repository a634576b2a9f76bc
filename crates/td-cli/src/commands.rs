use crate::{
    account_commands::AccountCommands, auth_commands::AuthCommands,
    dashboard_commands::DashboardCommands, invitation_commands::InvitationCommands,
    team_commands::TeamCommands, todo_commands::TodoCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Login, logout and other session operations
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Todo operations in the current tenant
    Todo {
        #[command(subcommand)]
        action: TodoCommands,
    },

    /// Tenant membership management (OWNER only for writes)
    Team {
        #[command(subcommand)]
        action: TeamCommands,
    },

    /// Invitation management
    Invite {
        #[command(subcommand)]
        action: InvitationCommands,
    },

    /// Tenant dashboard metrics
    Dashboard {
        #[command(subcommand)]
        action: DashboardCommands,
    },

    /// Account lifecycle operations
    Account {
        #[command(subcommand)]
        action: AccountCommands,
    },

    /// Watch the session for membership or role changes until drift or Ctrl-C
    Watch,
}

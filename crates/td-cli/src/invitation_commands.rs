use crate::parsers::parse_role;

use clap::Subcommand;
use td_core::Role;

#[derive(Subcommand)]
pub enum InvitationCommands {
    /// Send an email invitation into the current tenant
    Send {
        #[arg(long)]
        email: String,

        /// Role granted on acceptance: owner, member or viewer
        #[arg(long, value_parser = parse_role)]
        role: Role,
    },

    /// Create an account and membership in one call, no email round-trip
    Direct {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        /// Role granted immediately: owner, member or viewer
        #[arg(long, value_parser = parse_role)]
        role: Role,
    },

    /// List invitations of the current tenant
    List,

    /// Cancel a pending invitation
    Cancel {
        /// Invitation token as shown by `td invite list`
        token: String,
    },

    /// Resend the invitation email
    Resend {
        /// Invitation token as shown by `td invite list`
        token: String,
    },
}

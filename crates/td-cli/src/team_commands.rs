use crate::parsers::parse_role;

use clap::Subcommand;
use td_core::Role;

#[derive(Subcommand)]
pub enum TeamCommands {
    /// List members of the current tenant
    List,

    /// Remove a user from the tenant (OWNER only)
    Remove {
        /// User ID as shown by `td team list`
        user_id: i64,
    },

    /// Change a user's role within the tenant (OWNER only)
    SetRole {
        /// User ID as shown by `td team list`
        user_id: i64,

        /// New role: owner, member or viewer
        #[arg(value_parser = parse_role)]
        role: Role,
    },
}

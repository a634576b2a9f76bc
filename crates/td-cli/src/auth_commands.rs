use clap::Subcommand;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Log in and store the session locally
    Login {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        /// Tenant schema to log into directly (skips selection for
        /// multi-tenant accounts)
        #[arg(long)]
        tenant: Option<String>,
    },

    /// Clear the stored session
    Logout,

    /// Show the locally stored session (tokens redacted)
    Whoami,

    /// Switch the session to another tenant
    Switch {
        /// Target tenant schema
        schema: String,
    },

    /// List the tenants the logged-in user belongs to
    Tenants,

    /// Register a new organization with its first OWNER account
    Register {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        /// Display name of the new tenant
        #[arg(long)]
        tenant_name: String,
    },

    /// Change the password of the logged-in user
    ChangePassword {
        #[arg(long)]
        old_password: String,

        #[arg(long)]
        new_password: String,
    },

    /// Request a password reset email (no login required)
    ResetPassword {
        #[arg(long)]
        email: String,
    },
}

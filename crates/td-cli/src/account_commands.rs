use clap::Subcommand;

#[derive(Subcommand)]
pub enum AccountCommands {
    /// Delete the whole tenant account (OWNER only).
    /// Without --yes only the deletion preview is shown.
    Delete {
        /// Actually delete; omit to see what would be removed
        #[arg(long)]
        yes: bool,
    },
}

use clap::Subcommand;

#[derive(Subcommand)]
pub enum DashboardCommands {
    /// Show the cached dashboard metrics
    Show,

    /// Trigger a server-side aggregation and wait for fresh metrics
    Refresh,
}

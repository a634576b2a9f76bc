//! td - multi-tenant todo SaaS CLI
//!
//! A command-line client for the todo backend. All output is JSON on
//! stdout; diagnostics go to stderr.
//!
//! # Examples
//!
//! ```bash
//! # Log in and store the session under ./.td/
//! td auth login --username alice --password secret
//!
//! # List todos in the current tenant
//! td todo list --pretty
//!
//! # Watch for membership or role changes
//! td watch
//! ```

mod account_commands;
mod auth_commands;
mod cli;
mod commands;
mod dashboard_commands;
mod invitation_commands;
mod logger;
mod parsers;
mod team_commands;
mod todo_commands;

use crate::{
    account_commands::AccountCommands, auth_commands::AuthCommands, cli::Cli, commands::Commands,
    dashboard_commands::DashboardCommands, invitation_commands::InvitationCommands,
    team_commands::TeamCommands, todo_commands::TodoCommands,
};

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::info;
use serde_json::{Value, json};
use td_client::{
    ApiClient, ClientError, ClientResult, CreateTodoRequest, LoginOutcome, SessionValidator,
    UpdateTodoRequest,
};
use td_config::Config;
use td_session::SessionStore;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = logger::initialize(&config.logging) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let session_path = match Config::session_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let store = match SessionStore::open(session_path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Session storage error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Explicit flag wins over config.toml and TD_API_BASE_URL
    let base_url = cli
        .server
        .clone()
        .unwrap_or_else(|| config.api.base_url.clone());

    let client = match ApiClient::with_timeout(
        &base_url,
        store,
        Duration::from_secs(config.api.timeout_secs),
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let pretty = cli.pretty;

    match run(cli.command, &client, &config).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(text) => {
                    println!("{text}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            if e.is_session_ended() {
                eprintln!("Run `td auth login` to sign in again.");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, client: &ApiClient, config: &Config) -> ClientResult<Value> {
    match command {
        Commands::Auth { action } => run_auth(action, client).await,
        Commands::Todo { action } => run_todo(action, client).await,
        Commands::Team { action } => run_team(action, client).await,
        Commands::Invite { action } => run_invite(action, client).await,

        Commands::Dashboard { action } => match action {
            DashboardCommands::Show => Ok(serde_json::to_value(client.dashboard_metrics().await?)?),
            DashboardCommands::Refresh => {
                let metrics = client
                    .refresh_dashboard(
                        Duration::from_secs(config.metrics.poll_interval_secs),
                        config.metrics.max_attempts,
                    )
                    .await?;
                Ok(serde_json::to_value(metrics)?)
            }
        },

        Commands::Account { action } => match action {
            AccountCommands::Delete { yes: false } => {
                let warning = client.account_delete_warning().await?;
                Ok(json!({
                    "message": "dry run, pass --yes to delete the account",
                    "warning": warning,
                }))
            }
            AccountCommands::Delete { yes: true } => {
                client.delete_account().await?;
                Ok(json!({"message": "account deleted, session cleared"}))
            }
        },

        Commands::Watch => run_watch(client, config).await,
    }
}

async fn run_auth(action: AuthCommands, client: &ApiClient) -> ClientResult<Value> {
    match action {
        AuthCommands::Login {
            username,
            password,
            tenant,
        } => {
            let outcome = client
                .login(&username, &password, tenant.as_deref())
                .await?;
            match outcome {
                LoginOutcome::Ready(session) => Ok(json!({
                    "message": "logged in",
                    "username": session.username,
                    "role": session.role,
                    "tenant": session.tenant_schema,
                })),
                LoginOutcome::NeedsTenantSelection { session, tenants } => {
                    let hint = if session.is_some() {
                        "pick one with `td auth switch <schema>`"
                    } else {
                        "re-run login with --tenant <schema>"
                    };
                    Ok(json!({
                        "message": format!("account belongs to several tenants, {hint}"),
                        "tenants": tenants,
                    }))
                }
            }
        }

        AuthCommands::Logout => {
            let existed = client.store().clear()?;
            if existed {
                Ok(json!({"message": "logged out"}))
            } else {
                Ok(json!({"message": "no active session"}))
            }
        }

        AuthCommands::Whoami => {
            let session = client
                .store()
                .snapshot()
                .ok_or_else(ClientError::not_logged_in)?;
            // Tokens never reach stdout
            Ok(json!({
                "username": session.username,
                "role": session.role,
                "tenant": session.tenant_schema,
                "tenants": session.tenant_list,
            }))
        }

        AuthCommands::Switch { schema } => {
            let session = client.switch_tenant(&schema).await?;
            Ok(json!({
                "message": "tenant switched",
                "username": session.username,
                "role": session.role,
                "tenant": session.tenant_schema,
            }))
        }

        AuthCommands::Tenants => Ok(serde_json::to_value(client.my_tenants().await?)?),

        AuthCommands::Register {
            username,
            password,
            tenant_name,
        } => {
            client.register(&username, &password, &tenant_name).await?;
            Ok(json!({
                "message": "registered, log in with `td auth login`",
                "username": username,
                "tenant_name": tenant_name,
            }))
        }

        AuthCommands::ChangePassword {
            old_password,
            new_password,
        } => {
            let message = client.change_password(&old_password, &new_password).await?;
            Ok(json!({"message": message}))
        }

        AuthCommands::ResetPassword { email } => {
            let message = client.reset_password(&email).await?;
            Ok(json!({"message": message}))
        }
    }
}

async fn run_todo(action: TodoCommands, client: &ApiClient) -> ClientResult<Value> {
    match action {
        TodoCommands::List => Ok(serde_json::to_value(client.list_todos().await?)?),

        TodoCommands::Get { id } => Ok(serde_json::to_value(client.get_todo(id).await?)?),

        TodoCommands::Create {
            title,
            description,
            due_date,
            recurrence,
            assign_to,
        } => {
            let request = CreateTodoRequest {
                title,
                description,
                due_date,
                recurrence_type: recurrence,
                assigned_to_username: assign_to,
            };
            Ok(serde_json::to_value(client.create_todo(&request).await?)?)
        }

        TodoCommands::Update {
            id,
            title,
            description,
            completed,
            due_date,
            recurrence,
            assign_to,
        } => {
            let request = UpdateTodoRequest {
                title,
                description,
                is_completed: completed,
                due_date,
                recurrence_type: recurrence,
                assigned_to_username: assign_to,
            };
            client.update_todo(id, &request).await?;
            // Refetch for display instead of trusting the patch response
            Ok(serde_json::to_value(client.get_todo(id).await?)?)
        }

        TodoCommands::Delete { id } => {
            client.delete_todo(id).await?;
            Ok(json!({"message": "todo deleted", "id": id}))
        }

        TodoCommands::Toggle { id } => {
            let is_completed = client.toggle_complete(id).await?;
            Ok(json!({"id": id, "is_completed": is_completed}))
        }

        TodoCommands::History { id } => Ok(serde_json::to_value(client.todo_history(id).await?)?),
    }
}

async fn run_team(action: TeamCommands, client: &ApiClient) -> ClientResult<Value> {
    match action {
        TeamCommands::List => Ok(serde_json::to_value(client.list_tenant_users().await?)?),

        TeamCommands::Remove { user_id } => {
            Ok(serde_json::to_value(client.remove_user(user_id).await?)?)
        }

        TeamCommands::SetRole { user_id, role } => Ok(serde_json::to_value(
            client.update_user_role(user_id, role).await?,
        )?),
    }
}

async fn run_invite(action: InvitationCommands, client: &ApiClient) -> ClientResult<Value> {
    match action {
        InvitationCommands::Send { email, role } => {
            let message = client.send_invitation(&email, role).await?;
            Ok(json!({"message": message}))
        }

        InvitationCommands::Direct {
            username,
            password,
            role,
        } => {
            let message = client.invite_user_direct(&username, &password, role).await?;
            Ok(json!({"message": message, "username": username}))
        }

        InvitationCommands::List => Ok(serde_json::to_value(client.list_invitations().await?)?),

        InvitationCommands::Cancel { token } => {
            client.cancel_invitation(&token).await?;
            Ok(json!({"message": "invitation cancelled", "token": token}))
        }

        InvitationCommands::Resend { token } => {
            let message = client.resend_invitation(&token).await?;
            Ok(json!({"message": message, "token": token}))
        }
    }
}

/// Run the session validator in the foreground until it detects drift or
/// the user interrupts. Drift has already cleared the session by the time
/// it is reported here.
async fn run_watch(client: &ApiClient, config: &Config) -> ClientResult<Value> {
    if !client.store().is_authenticated() {
        return Err(ClientError::not_logged_in());
    }

    let interval = Duration::from_secs(config.validator.interval_secs);
    info!("watching session, checking every {}s", interval.as_secs());

    let handle = SessionValidator::new(client.clone(), interval).spawn();

    tokio::select! {
        event = handle.join() => match event {
            Some(event) => Ok(json!({
                "message": format!("session ended: {event}"),
                "hint": "run `td auth login` to sign in again",
            })),
            None => Ok(json!({"message": "watch stopped"})),
        },
        _ = tokio::signal::ctrl_c() => {
            info!("watch interrupted");
            Ok(json!({"message": "watch stopped"}))
        }
    }
}

#[cfg(test)]
mod tests;

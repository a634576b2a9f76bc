use crate::auth_commands::AuthCommands;
use crate::cli::Cli;
use crate::commands::Commands;
use crate::parsers::{parse_recurrence, parse_role, parse_utc};
use crate::team_commands::TeamCommands;
use crate::todo_commands::TodoCommands;

use clap::Parser;
use td_core::{RecurrenceType, Role};

#[test]
fn given_login_args_when_parsed_then_credentials_captured() {
    let cli = Cli::try_parse_from([
        "td", "auth", "login", "--username", "alice", "--password", "secret",
    ])
    .unwrap();

    match cli.command {
        Commands::Auth {
            action:
                AuthCommands::Login {
                    username,
                    password,
                    tenant,
                },
        } => {
            assert_eq!(username, "alice");
            assert_eq!(password, "secret");
            assert_eq!(tenant, None);
        }
        _ => panic!("expected auth login"),
    }
}

#[test]
fn given_global_flags_when_parsed_then_applied_anywhere() {
    let cli = Cli::try_parse_from([
        "td",
        "todo",
        "list",
        "--server",
        "http://localhost:9000/api",
        "--pretty",
    ])
    .unwrap();

    assert_eq!(cli.server.as_deref(), Some("http://localhost:9000/api"));
    assert!(cli.pretty);
    assert!(matches!(
        cli.command,
        Commands::Todo {
            action: TodoCommands::List
        }
    ));
}

#[test]
fn given_set_role_args_when_parsed_then_role_case_insensitive() {
    let cli = Cli::try_parse_from(["td", "team", "set-role", "7", "viewer"]).unwrap();

    match cli.command {
        Commands::Team {
            action: TeamCommands::SetRole { user_id, role },
        } => {
            assert_eq!(user_id, 7);
            assert_eq!(role, Role::Viewer);
        }
        _ => panic!("expected team set-role"),
    }
}

#[test]
fn given_create_todo_args_when_parsed_then_optional_fields_captured() {
    let cli = Cli::try_parse_from([
        "td",
        "todo",
        "create",
        "--title",
        "write report",
        "--due-date",
        "2026-09-01T17:00:00Z",
        "--recurrence",
        "weekly",
    ])
    .unwrap();

    match cli.command {
        Commands::Todo {
            action:
                TodoCommands::Create {
                    title,
                    due_date,
                    recurrence,
                    ..
                },
        } => {
            assert_eq!(title, "write report");
            assert!(due_date.is_some());
            assert_eq!(recurrence, Some(RecurrenceType::Weekly));
        }
        _ => panic!("expected todo create"),
    }
}

#[test]
fn given_invalid_role_when_parsed_then_error() {
    let result = Cli::try_parse_from(["td", "team", "set-role", "7", "superuser"]);
    assert!(result.is_err());
}

#[test]
fn given_mixed_case_inputs_when_parsers_run_then_normalized() {
    assert_eq!(parse_role("Owner").unwrap(), Role::Owner);
    assert_eq!(parse_role("MEMBER").unwrap(), Role::Member);
    assert!(parse_role("root").is_err());

    assert_eq!(parse_recurrence("daily").unwrap(), RecurrenceType::Daily);
    assert!(parse_recurrence("yearly").is_err());

    assert!(parse_utc("2026-09-01T17:00:00Z").is_ok());
    assert!(parse_utc("next tuesday").is_err());
}

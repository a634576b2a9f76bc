use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Owner.as_str(), "OWNER");
    assert_eq!(Role::Member.as_str(), "MEMBER");
    assert_eq!(Role::Viewer.as_str(), "VIEWER");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("OWNER").unwrap(), Role::Owner);
    assert_eq!(Role::from_str("MEMBER").unwrap(), Role::Member);
    assert_eq!(Role::from_str("VIEWER").unwrap(), Role::Viewer);
    assert!(Role::from_str("owner").is_err());
    assert!(Role::from_str("ADMIN").is_err());
}

#[test]
fn test_role_serde_uppercase() {
    let json = serde_json::to_string(&Role::Member).unwrap();
    assert_eq!(json, "\"MEMBER\"");

    let role: Role = serde_json::from_str("\"VIEWER\"").unwrap();
    assert_eq!(role, Role::Viewer);
}

#[test]
fn test_role_capabilities() {
    assert!(Role::Owner.can_manage_team());
    assert!(!Role::Member.can_manage_team());
    assert!(!Role::Viewer.can_manage_team());

    assert!(Role::Owner.can_edit_todos());
    assert!(Role::Member.can_edit_todos());
    assert!(!Role::Viewer.can_edit_todos());
}

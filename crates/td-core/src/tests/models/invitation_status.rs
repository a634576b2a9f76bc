use crate::InvitationStatus;

use std::str::FromStr;

#[test]
fn test_invitation_status_from_str_is_case_insensitive() {
    assert_eq!(
        InvitationStatus::from_str("pending").unwrap(),
        InvitationStatus::Pending
    );
    assert_eq!(
        InvitationStatus::from_str("PENDING").unwrap(),
        InvitationStatus::Pending
    );
    assert_eq!(
        InvitationStatus::from_str("Cancelled").unwrap(),
        InvitationStatus::Cancelled
    );
    assert!(InvitationStatus::from_str("archived").is_err());
}

#[test]
fn test_invitation_status_deserializes_both_casings() {
    let upper: InvitationStatus = serde_json::from_str("\"PENDING\"").unwrap();
    assert_eq!(upper, InvitationStatus::Pending);

    let lower: InvitationStatus = serde_json::from_str("\"expired\"").unwrap();
    assert_eq!(lower, InvitationStatus::Expired);

    assert!(serde_json::from_str::<InvitationStatus>("\"archived\"").is_err());
}

#[test]
fn test_invitation_status_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&InvitationStatus::Pending).unwrap(),
        "\"pending\""
    );
}

#[test]
fn test_invitation_status_default() {
    assert_eq!(InvitationStatus::default(), InvitationStatus::Pending);
}

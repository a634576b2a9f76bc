use crate::RecurrenceType;

use std::str::FromStr;

#[test]
fn test_recurrence_type_as_str() {
    assert_eq!(RecurrenceType::None.as_str(), "NONE");
    assert_eq!(RecurrenceType::Daily.as_str(), "DAILY");
    assert_eq!(RecurrenceType::Weekly.as_str(), "WEEKLY");
    assert_eq!(RecurrenceType::Monthly.as_str(), "MONTHLY");
}

#[test]
fn test_recurrence_type_from_str() {
    assert_eq!(
        RecurrenceType::from_str("DAILY").unwrap(),
        RecurrenceType::Daily
    );
    assert!(RecurrenceType::from_str("HOURLY").is_err());
}

#[test]
fn test_recurrence_type_default() {
    assert_eq!(RecurrenceType::default(), RecurrenceType::None);
}

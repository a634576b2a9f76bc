use chrono::{DateTime, Utc};
use td_core::{CoreError, RecurrenceType, Role};

/// Case-insensitive role parser for CLI arguments
pub fn parse_role(s: &str) -> Result<Role, CoreError> {
    s.to_uppercase().parse()
}

/// Case-insensitive recurrence parser for CLI arguments
pub fn parse_recurrence(s: &str) -> Result<RecurrenceType, CoreError> {
    s.to_uppercase().parse()
}

/// RFC 3339 timestamp parser for CLI arguments
pub fn parse_utc(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    s.parse()
}

use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid recurrence type: {value} {location}")]
    InvalidRecurrenceType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid invitation status: {value} {location}")]
    InvalidInvitationStatus {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;

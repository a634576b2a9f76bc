use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error ({status}): {message} {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    /// The session was cleared because the server no longer accepts it.
    /// Callers should send the user back to the unauthenticated entry point.
    #[error("Session ended: {reason} {location}")]
    SessionEnded {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Not logged in {location}")]
    NotLoggedIn { location: ErrorLocation },

    #[error("Session storage error: {source} {location}")]
    Session {
        #[source]
        source: td_session::SessionError,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api(status: u16, message: String) -> Self {
        ClientError::Api {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a session-ended error with location
    #[track_caller]
    pub fn session_ended<S: Into<String>>(reason: S) -> Self {
        ClientError::SessionEnded {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_logged_in() -> Self {
        ClientError::NotLoggedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether this error already forced the session to be cleared
    pub fn is_session_ended(&self) -> bool {
        matches!(self, Self::SessionEnded { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<td_session::SessionError> for ClientError {
    #[track_caller]
    fn from(err: td_session::SessionError) -> Self {
        ClientError::Session {
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

//! HTTP client and session maintenance for the todo SaaS backend.
//!
//! Every outgoing request reads the access token from the injected
//! [`SessionStore`](td_session::SessionStore) and attaches it as a bearer
//! credential; every response is inspected for authentication and
//! authorization failures, which clear the store. The
//! [`SessionValidator`](validator::SessionValidator) independently polls the
//! membership endpoint and performs the same clear on detected drift.

pub mod client;
pub mod error;
pub mod login;
pub mod requests;
pub mod validator;

pub use client::ApiClient;
pub use error::{ClientError, ClientResult};
pub use login::LoginOutcome;
pub use requests::{CreateTodoRequest, UpdateTodoRequest};
pub use validator::{DriftEvent, SessionValidator, ValidatorHandle};

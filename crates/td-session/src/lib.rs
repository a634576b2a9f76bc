pub mod error;
pub mod session;
pub mod store;

pub use error::{Result, SessionError};
pub use session::Session;
pub use store::SessionStore;

#[cfg(test)]
mod tests;

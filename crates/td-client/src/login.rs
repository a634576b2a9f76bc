use td_core::TenantRef;
use td_session::Session;

/// Result of a successful login call.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Exactly one candidate tenant; the session is ready to use
    Ready(Session),
    /// More than one candidate tenant; an explicit choice must follow.
    ///
    /// `session` holds provisionally stored tokens when the server issued
    /// them alongside the candidate list (follow up with a tenant switch).
    /// Servers that answer 300 send only the list, leaving `session` empty;
    /// the login must then be re-run with an explicit tenant.
    NeedsTenantSelection {
        session: Option<Session>,
        tenants: Vec<TenantRef>,
    },
}

impl LoginOutcome {
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Ready(session) => Some(session),
            Self::NeedsTenantSelection { session, .. } => session.as_ref(),
        }
    }

    pub fn needs_selection(&self) -> bool {
        matches!(self, Self::NeedsTenantSelection { .. })
    }
}

use crate::ApiClient;

use std::fmt;
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// What the periodic membership check found.
#[derive(Debug, Clone, PartialEq)]
pub enum DriftEvent {
    /// The logged-in user no longer appears in the tenant's member list
    RemovedFromTenant,
    /// The server-side role differs from the one captured at login
    RoleChanged {
        old: td_core::Role,
        new: td_core::Role,
    },
    /// The server rejected the session outright (expired or revoked token)
    SessionInvalid,
}

impl fmt::Display for DriftEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RemovedFromTenant => {
                write!(f, "you have been removed from this tenant")
            }
            Self::RoleChanged { old, new } => {
                write!(f, "your role changed from {old} to {new}")
            }
            Self::SessionInvalid => write!(f, "your session is no longer valid"),
        }
    }
}

/// Periodic session watchdog.
///
/// Polls the tenant member list on a fixed interval and compares the result
/// against the locally stored session. On removal or role drift it clears
/// the session store exactly once and reports the drift; transient failures
/// (network blips, server 5xx) are logged and skipped so a flaky connection
/// never logs anyone out.
pub struct SessionValidator {
    client: ApiClient,
    interval: Duration,
}

/// Handle to a spawned validator. Dropping it closes the stop channel and
/// the loop winds down on its own; [`ValidatorHandle::stop`] additionally
/// waits, guaranteeing no further checks run after it returns.
pub struct ValidatorHandle {
    stop: watch::Sender<bool>,
    task: JoinHandle<Option<DriftEvent>>,
}

impl SessionValidator {
    pub fn new(client: ApiClient, interval: Duration) -> Self {
        Self { client, interval }
    }

    /// Spawn the polling loop. The first check runs immediately, then once
    /// per interval; the task finishes on the first drift event or when the
    /// handle asks it to stop.
    pub fn spawn(self) -> ValidatorHandle {
        let (stop, mut stopped) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if let Some(event) = self.check().await {
                            return Some(event);
                        }
                    }
                    _ = stopped.changed() => {
                        return None;
                    }
                }
            }
        });

        ValidatorHandle { stop, task }
    }

    /// One membership check. Returns a drift event when the session had to
    /// be ended, None when everything still matches (or there is no session
    /// to validate).
    async fn check(&self) -> Option<DriftEvent> {
        let session = self.client.store().snapshot()?;

        let users = match self.client.list_tenant_users().await {
            Ok(users) => users,
            Err(e) if e.is_session_ended() => {
                // execute() already cleared the store
                return Some(DriftEvent::SessionInvalid);
            }
            Err(e) => {
                debug!("session check skipped: {e}");
                return None;
            }
        };

        let me = users.iter().find(|u| u.username == session.username);

        match me {
            None => {
                self.end_session("user no longer belongs to the tenant");
                Some(DriftEvent::RemovedFromTenant)
            }
            Some(user) if user.role != session.role => {
                self.end_session("role changed on the server");
                Some(DriftEvent::RoleChanged {
                    old: session.role,
                    new: user.role,
                })
            }
            Some(_) => None,
        }
    }

    fn end_session(&self, reason: &str) {
        match self.client.store().clear() {
            Ok(true) => warn!("session ended by validator: {reason}"),
            Ok(false) => debug!("session already cleared: {reason}"),
            Err(e) => warn!("failed to remove session state: {e}"),
        }
    }
}

impl ValidatorHandle {
    /// Stop the loop and wait for it to finish. After this returns no
    /// further membership checks will run.
    pub async fn stop(self) -> Option<DriftEvent> {
        let _ = self.stop.send(true);
        self.task.await.unwrap_or(None)
    }

    /// Wait for the validator to detect drift (or be stopped elsewhere)
    pub async fn join(self) -> Option<DriftEvent> {
        self.task.await.unwrap_or(None)
    }
}

use crate::{Result as SessionResult, Session, SessionError};

use std::path::PathBuf;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;
use td_core::{Role, TenantRef};

/// Single source of truth for "who is logged in, as what role, in which
/// tenant".
///
/// The store is explicitly injected into the API client and the session
/// validator rather than living in ambient global state. Clones share the
/// same underlying session. All writes are whole-record replacements
/// (last-write-wins), so a validator clear racing a login or switch can
/// never produce a half-written session. `clear` is idempotent: overlapping
/// failure paths may all call it.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

struct Inner {
    session: RwLock<Option<Session>>,
    /// None for in-memory stores (tests); Some persists across processes
    path: Option<PathBuf>,
}

impl SessionStore {
    /// Create a store with no persistence
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(Inner {
                session: RwLock::new(None),
                path: None,
            }),
        }
    }

    /// Open a store backed by `path`, loading a persisted session if one
    /// exists. A missing file simply means "not logged in".
    pub fn open(path: PathBuf) -> SessionResult<Self> {
        let session = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let session: Session =
                    serde_json::from_str(&contents).map_err(|e| SessionError::Json {
                        path: path.clone(),
                        source: e,
                    })?;
                Some(session)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(SessionError::Io {
                    path: path.clone(),
                    source: e,
                });
            }
        };

        Ok(Self {
            inner: Arc::new(Inner {
                session: RwLock::new(session),
                path: Some(path),
            }),
        })
    }

    /// Replace the whole session atomically and persist it.
    /// Partial overwrites are impossible: callers build the complete
    /// replacement first.
    pub fn set(&self, session: Session) -> SessionResult<()> {
        let mut guard = self.write();

        if let Some(ref path) = self.inner.path {
            let contents = serde_json::to_string_pretty(&session).map_err(|e| {
                SessionError::Json {
                    path: path.clone(),
                    source: e,
                }
            })?;
            std::fs::write(path, contents).map_err(|e| SessionError::Io {
                path: path.clone(),
                source: e,
            })?;
        }

        *guard = Some(session);
        Ok(())
    }

    /// Remove every stored field and the persisted file.
    ///
    /// Idempotent: a 401 interceptor and the session validator may race to
    /// clear, and redundant invocations are indistinguishable from a single
    /// one. Returns whether a session existed before this call, so exactly
    /// one of the racing callers surfaces the "session ended" notice.
    pub fn clear(&self) -> SessionResult<bool> {
        let mut guard = self.write();
        let existed = guard.take().is_some();

        if let Some(ref path) = self.inner.path {
            match std::fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(SessionError::Io {
                        path: path.clone(),
                        source: e,
                    });
                }
            }
        }

        if existed {
            debug!("session cleared");
        }

        Ok(existed)
    }

    /// Current access token, if logged in
    pub fn token(&self) -> Option<String> {
        self.read().as_ref().map(|s| s.access_token.clone())
    }

    /// Current refresh token, if logged in
    pub fn refresh_token(&self) -> Option<String> {
        self.read().as_ref().map(|s| s.refresh_token.clone())
    }

    pub fn username(&self) -> Option<String> {
        self.read().as_ref().map(|s| s.username.clone())
    }

    pub fn role(&self) -> Option<Role> {
        self.read().as_ref().map(|s| s.role)
    }

    pub fn tenant_schema(&self) -> Option<String> {
        self.read().as_ref().map(|s| s.tenant_schema.clone())
    }

    /// Tenants the user belongs to; empty when logged out or single-tenant
    pub fn tenant_list(&self) -> Vec<TenantRef> {
        self.read()
            .as_ref()
            .map(|s| s.tenant_list.clone())
            .unwrap_or_default()
    }

    /// Full copy of the current session
    pub fn snapshot(&self) -> Option<Session> {
        self.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    // A poisoned lock means another thread panicked mid-operation; the data
    // is still a whole record, so recover rather than propagate the panic.
    fn read(&self) -> RwLockReadGuard<'_, Option<Session>> {
        self.inner
            .session
            .read()
            .unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Session>> {
        self.inner
            .session
            .write()
            .unwrap_or_else(|e| e.into_inner())
    }
}

use crate::{ClientError, ClientResult, CreateTodoRequest, LoginOutcome, UpdateTodoRequest};

use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use td_core::{
    AggregationStatus, DashboardMetrics, Invitation, RemovedUser, Role, RoleChange, TenantRef,
    TenantUser, Todo, TodoHistoryEntry,
};
use td_session::{Session, SessionStore};

/// HTTP client for the todo SaaS REST API.
///
/// The client owns no session state of its own: it reads the bearer token
/// from the injected [`SessionStore`] on every call and clears that store
/// when the server signals that the session is no longer valid. Cloning the
/// client shares the store, which is what the session validator relies on.
#[derive(Clone)]
pub struct ApiClient {
    pub base_url: String,
    client: ReqwestClient,
    store: SessionStore,
}

#[derive(Deserialize)]
struct AuthUser {
    username: String,
    role: Role,
}

/// Shape shared by login and switch-tenant responses
#[derive(Deserialize)]
struct AuthResponse {
    access: String,
    refresh: String,
    user: AuthUser,
    tenant: TenantRef,
    #[serde(default)]
    tenants: Option<Vec<TenantRef>>,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "http://127.0.0.1:8000/api")
    /// * `store` - session store shared with the rest of the process
    pub fn new(base_url: &str, store: SessionStore) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
            store,
        }
    }

    /// Create a client with a transport-level timeout. Nothing beyond this
    /// single timeout is enforced client-side.
    pub fn with_timeout(
        base_url: &str,
        store: SessionStore,
        timeout: Duration,
    ) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            store,
        })
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Build a request, attaching the bearer token when a session exists
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(token) = self.store.token() {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Send a request and apply the central auth-failure policy, returning
    /// the status and body for everything else.
    ///
    /// 401 always invalidates the session. 403 invalidates only when the
    /// server's error text matches the role-revocation heuristic; other
    /// 403s surface as inline API errors with the session left intact.
    async fn send(&self, req: reqwest::RequestBuilder) -> ClientResult<(StatusCode, Value)> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let body: Value = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };

        if status == StatusCode::UNAUTHORIZED {
            return Err(self.invalidate_session("authentication was rejected"));
        }

        if status == StatusCode::FORBIDDEN {
            let message = error_message(&body, status);
            if self.store.is_authenticated() && looks_like_role_revocation(&message) {
                return Err(self.invalidate_session(&message));
            }
            return Err(ClientError::api(status.as_u16(), message));
        }

        Ok((status, body))
    }

    /// Send a request, expecting a 2xx body
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<Value> {
        let (status, body) = self.send(req).await?;

        if !status.is_success() {
            return Err(ClientError::api(status.as_u16(), error_message(&body, status)));
        }

        Ok(body)
    }

    /// Clear the session and build the terminal error. Tolerates racing the
    /// session validator: every caller clears, only the outcome differs in
    /// logging.
    fn invalidate_session(&self, reason: &str) -> ClientError {
        match self.store.clear() {
            Ok(true) => warn!("session ended: {reason}"),
            Ok(false) => debug!("session already cleared: {reason}"),
            Err(e) => warn!("failed to remove session state: {e}"),
        }

        ClientError::session_ended(format!(
            "{reason}; your access may have been changed by an administrator, please log in again"
        ))
    }

    fn session_from_auth(&self, resp: AuthResponse) -> Session {
        let tenant_list = match resp.tenants {
            Some(tenants) if !tenants.is_empty() => tenants,
            // Switch responses may omit the list; keep the one we know
            _ => self
                .store
                .snapshot()
                .map(|s| s.tenant_list)
                .unwrap_or_default(),
        };

        Session {
            access_token: resp.access,
            refresh_token: resp.refresh,
            username: resp.user.username,
            role: resp.user.role,
            tenant_schema: resp.tenant.schema,
            tenant_list,
        }
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Log in and populate the session store.
    ///
    /// When the account belongs to several tenants the returned outcome asks
    /// for an explicit selection. Servers that issue tokens alongside the
    /// candidate list get them stored provisionally so the follow-up switch
    /// has a refresh token to exchange; servers that answer 300 with only
    /// the list store nothing, and the login must be re-run with an explicit
    /// tenant.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        tenant_schema: Option<&str>,
    ) -> ClientResult<LoginOutcome> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            username: &'a str,
            password: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            tenant_schema: Option<&'a str>,
        }

        let body = LoginRequest {
            username,
            password,
            tenant_schema,
        };
        let req = self.request(Method::POST, "/auth/login/").json(&body);
        let (status, value) = self.send(req).await?;

        if status == StatusCode::MULTIPLE_CHOICES {
            let tenants: Vec<TenantRef> = match value.get("tenants") {
                Some(list) => serde_json::from_value(list.clone())?,
                None => Vec::new(),
            };
            return Ok(LoginOutcome::NeedsTenantSelection {
                session: None,
                tenants,
            });
        }

        if !status.is_success() {
            return Err(ClientError::api(status.as_u16(), error_message(&value, status)));
        }

        let resp: AuthResponse = serde_json::from_value(value)?;
        let session = self.session_from_auth(resp);
        self.store.set(session.clone())?;

        if session.tenant_list.len() > 1 && tenant_schema.is_none() {
            Ok(LoginOutcome::NeedsTenantSelection {
                tenants: session.tenant_list.clone(),
                session: Some(session),
            })
        } else {
            Ok(LoginOutcome::Ready(session))
        }
    }

    /// Exchange the current refresh token for credentials scoped to another
    /// tenant. All-or-nothing: the store is only touched after the server
    /// accepted the switch and the full replacement session is built, so a
    /// failed switch leaves the previous session usable and retryable.
    pub async fn switch_tenant(&self, schema: &str) -> ClientResult<Session> {
        let refresh = self
            .store
            .refresh_token()
            .ok_or_else(ClientError::not_logged_in)?;

        #[derive(Serialize)]
        struct SwitchRequest<'a> {
            tenant_schema: &'a str,
            refresh: &'a str,
        }

        let body = SwitchRequest {
            tenant_schema: schema,
            refresh: &refresh,
        };
        let req = self
            .request(Method::POST, "/auth/switch-tenant/")
            .json(&body);
        let value = self.execute(req).await?;

        let resp: AuthResponse = serde_json::from_value(value)?;
        let session = self.session_from_auth(resp);
        self.store.set(session.clone())?;
        Ok(session)
    }

    /// Register a new organization with its first OWNER account.
    /// Does not log in; callers redirect to the login flow afterwards.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        tenant_name: &str,
    ) -> ClientResult<()> {
        #[derive(Serialize)]
        struct RegisterRequest<'a> {
            username: &'a str,
            password: &'a str,
            tenant_name: &'a str,
        }

        let body = RegisterRequest {
            username,
            password,
            tenant_name,
        };
        let req = self.request(Method::POST, "/auth/register/").json(&body);
        self.execute(req).await?;
        Ok(())
    }

    /// List every tenant the logged-in user belongs to
    pub async fn my_tenants(&self) -> ClientResult<Vec<TenantRef>> {
        let req = self.request(Method::GET, "/auth/tenants/");
        let value = self.execute(req).await?;
        Ok(serde_json::from_value(unwrap_list(value, "tenants"))?)
    }

    pub async fn change_password(&self, old_password: &str, new_password: &str) -> ClientResult<String> {
        #[derive(Serialize)]
        struct ChangePasswordRequest<'a> {
            old_password: &'a str,
            new_password: &'a str,
        }

        let body = ChangePasswordRequest {
            old_password,
            new_password,
        };
        let req = self
            .request(Method::POST, "/auth/change-password/")
            .json(&body);
        let value = self.execute(req).await?;
        Ok(message(&value))
    }

    pub async fn reset_password(&self, email: &str) -> ClientResult<String> {
        #[derive(Serialize)]
        struct ResetPasswordRequest<'a> {
            email: &'a str,
        }

        let body = ResetPasswordRequest { email };
        let req = self
            .request(Method::POST, "/auth/reset-password/")
            .json(&body);
        let value = self.execute(req).await?;
        Ok(message(&value))
    }

    // =========================================================================
    // Todo Operations
    // =========================================================================

    /// List all todos in the current tenant
    pub async fn list_todos(&self) -> ClientResult<Vec<Todo>> {
        let req = self.request(Method::GET, "/todos/");
        let value = self.execute(req).await?;
        Ok(serde_json::from_value(unwrap_list(value, "todos"))?)
    }

    /// Get a todo by ID
    pub async fn get_todo(&self, id: i64) -> ClientResult<Todo> {
        let req = self.request(Method::GET, &format!("/todos/{}/", id));
        let value = self.execute(req).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Create a new todo. Callers refetch the list for display rather than
    /// trusting the returned body for list state.
    pub async fn create_todo(&self, request: &CreateTodoRequest) -> ClientResult<Todo> {
        let req = self.request(Method::POST, "/todos/").json(request);
        let value = self.execute(req).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Partially update a todo
    pub async fn update_todo(&self, id: i64, request: &UpdateTodoRequest) -> ClientResult<()> {
        let req = self
            .request(Method::PATCH, &format!("/todos/{}/", id))
            .json(request);
        self.execute(req).await?;
        Ok(())
    }

    /// Delete a todo (OWNER only)
    pub async fn delete_todo(&self, id: i64) -> ClientResult<()> {
        let req = self.request(Method::DELETE, &format!("/todos/{}/", id));
        self.execute(req).await?;
        Ok(())
    }

    /// Flip the completion flag server-side
    pub async fn toggle_complete(&self, id: i64) -> ClientResult<bool> {
        let req = self.request(Method::POST, &format!("/todos/{}/toggle_complete/", id));
        let value = self.execute(req).await?;
        Ok(value
            .get("is_completed")
            .and_then(Value::as_bool)
            .unwrap_or_default())
    }

    /// Change records for one todo
    pub async fn todo_history(&self, id: i64) -> ClientResult<Vec<TodoHistoryEntry>> {
        let req = self.request(Method::GET, &format!("/todos/{}/history/", id));
        let value = self.execute(req).await?;
        Ok(serde_json::from_value(unwrap_list(value, "history"))?)
    }

    // =========================================================================
    // Team Operations
    // =========================================================================

    /// List members of the current tenant. Also the endpoint the session
    /// validator polls for drift detection.
    pub async fn list_tenant_users(&self) -> ClientResult<Vec<TenantUser>> {
        let req = self.request(Method::GET, "/customers/users/");
        let value = self.execute(req).await?;
        Ok(serde_json::from_value(unwrap_list(value, "users"))?)
    }

    /// Remove a user from the tenant (OWNER only)
    pub async fn remove_user(&self, user_id: i64) -> ClientResult<RemovedUser> {
        let req = self.request(
            Method::DELETE,
            &format!("/customers/users/{}/remove/", user_id),
        );
        let value = self.execute(req).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Change a user's role within the tenant (OWNER only)
    pub async fn update_user_role(&self, user_id: i64, role: Role) -> ClientResult<RoleChange> {
        #[derive(Serialize)]
        struct UpdateRoleRequest {
            role: Role,
        }

        let body = UpdateRoleRequest { role };
        let req = self
            .request(Method::PATCH, &format!("/customers/users/{}/role/", user_id))
            .json(&body);
        let value = self.execute(req).await?;
        Ok(serde_json::from_value(value)?)
    }

    // =========================================================================
    // Invitation Operations
    // =========================================================================

    /// Legacy direct-create invite: makes the account and membership in one
    /// call, no email round-trip
    pub async fn invite_user_direct(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> ClientResult<String> {
        #[derive(Serialize)]
        struct InviteRequest<'a> {
            username: &'a str,
            password: &'a str,
            role: Role,
        }

        let body = InviteRequest {
            username,
            password,
            role,
        };
        let req = self.request(Method::POST, "/auth/invite/").json(&body);
        let value = self.execute(req).await?;
        Ok(message(&value))
    }

    /// Email invitation flow
    pub async fn send_invitation(&self, email: &str, role: Role) -> ClientResult<String> {
        #[derive(Serialize)]
        struct SendInvitationRequest<'a> {
            email: &'a str,
            role: Role,
        }

        let body = SendInvitationRequest { email, role };
        let req = self
            .request(Method::POST, "/customers/invitations/")
            .json(&body);
        let value = self.execute(req).await?;
        Ok(message(&value))
    }

    pub async fn list_invitations(&self) -> ClientResult<Vec<Invitation>> {
        let req = self.request(Method::GET, "/customers/invitations/");
        let value = self.execute(req).await?;
        Ok(serde_json::from_value(unwrap_list(value, "invitations"))?)
    }

    pub async fn cancel_invitation(&self, token: &str) -> ClientResult<()> {
        let req = self.request(
            Method::DELETE,
            &format!("/customers/invitations/{}/", token),
        );
        self.execute(req).await?;
        Ok(())
    }

    pub async fn resend_invitation(&self, token: &str) -> ClientResult<String> {
        let req = self.request(
            Method::POST,
            &format!("/customers/invitations/{}/resend/", token),
        );
        let value = self.execute(req).await?;
        Ok(message(&value))
    }

    // =========================================================================
    // Dashboard / Orchestration Operations
    // =========================================================================

    /// Cached aggregate metrics for the current tenant
    pub async fn dashboard_metrics(&self) -> ClientResult<DashboardMetrics> {
        let req = self.request(Method::GET, "/customers/metrics/dashboard/");
        let value = self.execute(req).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Kick off a server-side aggregation run
    pub async fn trigger_aggregation(&self) -> ClientResult<AggregationStatus> {
        let req = self.request(
            Method::POST,
            "/customers/orchestration/aggregate-dashboard/",
        );
        let value = self.execute(req).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Trigger aggregation and wait for fresh metrics.
    ///
    /// When the trigger reports "pending", re-read the metrics endpoint on a
    /// fixed interval until `last_updated` differs from the pre-trigger
    /// baseline or `max_attempts` is exhausted. Exhaustion is not an error:
    /// the poll gives up silently and returns the latest metrics it saw,
    /// which is the only automatic retry anywhere in this client.
    pub async fn refresh_dashboard(
        &self,
        poll_interval: Duration,
        max_attempts: u32,
    ) -> ClientResult<DashboardMetrics> {
        let baseline = self.dashboard_metrics().await?;

        let trigger = self.trigger_aggregation().await?;
        if !trigger.is_pending() {
            return self.dashboard_metrics().await;
        }

        let mut latest = baseline.clone();
        for attempt in 1..=max_attempts {
            tokio::time::sleep(poll_interval).await;

            match self.dashboard_metrics().await {
                Ok(metrics) => {
                    if metrics.last_updated != baseline.last_updated {
                        return Ok(metrics);
                    }
                    latest = metrics;
                }
                Err(e) if e.is_session_ended() => return Err(e),
                Err(e) => debug!("metrics poll attempt {attempt}/{max_attempts} failed: {e}"),
            }
        }

        Ok(latest)
    }

    // =========================================================================
    // Account Operations
    // =========================================================================

    /// Preview of what account deletion will cascade over
    pub async fn account_delete_warning(&self) -> ClientResult<Value> {
        let req = self.request(Method::GET, "/customers/account/delete-warning/");
        self.execute(req).await
    }

    /// Delete the whole tenant account (OWNER only). On success the local
    /// session is cleared; there is nothing left to be logged in to.
    pub async fn delete_account(&self) -> ClientResult<()> {
        let req = self.request(Method::DELETE, "/customers/account/delete/");
        self.execute(req).await?;
        self.store.clear()?;
        Ok(())
    }
}

/// Unwrap list envelopes. Depending on the endpoint, the backend returns a
/// bare array, a paginated `{"results": [...]}` page, or a named envelope
/// such as `{"invitations": [...]}`.
pub(crate) fn unwrap_list(value: Value, key: &str) -> Value {
    match value {
        Value::Object(mut map) => map
            .remove(key)
            .or_else(|| map.remove("results"))
            .unwrap_or(Value::Array(Vec::new())),
        other => other,
    }
}

/// Best-effort extraction of the server's error text
pub(crate) fn error_message(body: &Value, status: StatusCode) -> String {
    for key in ["error", "detail", "message"] {
        if let Some(text) = body.get(key).and_then(Value::as_str) {
            return text.to_string();
        }
    }
    format!("request failed with status {}", status.as_u16())
}

/// Success-path `{"message": ...}` extraction
pub(crate) fn message(body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Conservative 403 interpretation.
///
/// The backend phrases role rejections in prose ("You cannot edit todos",
/// "User not part of this tenant", "permission denied"), so a substring
/// match on "cannot" / "not" / "permission" decides whether a 403 means the
/// role was revoked. A false negative leaves the stale session visible until
/// the next validator check; a false positive forces an unnecessary
/// re-login. The bias is deliberately towards forcing re-login on ambiguous
/// permission errors.
pub(crate) fn looks_like_role_revocation(text: &str) -> bool {
    let lower = text.to_lowercase();
    ["cannot", "not", "permission"]
        .iter()
        .any(|needle| lower.contains(needle))
}

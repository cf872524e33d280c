use futures::channel::oneshot;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::DropGuard;
use tracing::{debug, error, info, warn};
use trainhub_shared::{
    const_config::{
        auth::{AUTH_EXPIRY_SWEEP_INTERVAL, AUTH_LOGIN_LATENCY, AUTH_SESSION_LIFETIME},
        path::PATH_LOGIN,
    },
    req_args::LoginReqArgs,
    routes::{check_access, GuardOutcome},
    session::Session,
    token::CredentialToken,
    uac::{AuthError, Role, UserDirectory, UserInfo},
};
use trainhub_time::{Seconds, Timestamp};

pub mod assistant;
mod sweep;

pub type LoginResult = Result<Arc<UserInfo>, AuthError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthSettings {
    pub session_lifetime: Seconds,
    pub expiry_sweep_interval: Seconds,
    /// Simulated time taken by a login before the directory is checked
    pub login_latency: Duration,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            session_lifetime: AUTH_SESSION_LIFETIME,
            expiry_sweep_interval: AUTH_EXPIRY_SWEEP_INTERVAL,
            login_latency: AUTH_LOGIN_LATENCY,
        }
    }
}

/// Handle to the session state. Cheap to clone, all clones share the same
/// session. The expiry sweep stops once the last handle is dropped
#[derive(Debug, Clone)]
pub struct Client {
    directory: Arc<UserDirectory>,
    settings: AuthSettings,
    inner: Arc<Mutex<ClientInner>>,
}

#[derive(Debug, Default)]
struct ClientInner {
    session: Option<Session>,
    token: Option<CredentialToken>,
    /// Dropping this stops the expiry sweep for the current session
    sweep_guard: Option<DropGuard>,
    is_login_pending: bool,
}

impl ClientInner {
    /// The session if it has not expired and its token is still valid
    fn active_session(&self) -> Option<&Session> {
        let session = self.session.as_ref()?;
        (session.is_valid_at(Timestamp::now()) && self.has_valid_token()).then_some(session)
    }

    fn has_valid_token(&self) -> bool {
        self.session.is_some()
            && self
                .token
                .as_ref()
                .is_some_and(|token| token.is_valid_at(Timestamp::now()))
    }

    fn clear(&mut self) {
        self.session = None;
        self.token = None;
        self.sweep_guard = None;
    }
}

/// Marks a login as in flight for as long as it is alive
struct PendingLogin(Arc<Mutex<ClientInner>>);

impl PendingLogin {
    fn try_start(inner: &Arc<Mutex<ClientInner>>) -> Option<Self> {
        let mut guard = inner.lock().expect("mutex poisoned");
        if guard.is_login_pending {
            return None;
        }
        guard.is_login_pending = true;
        Some(Self(Arc::clone(inner)))
    }
}

impl Drop for PendingLogin {
    fn drop(&mut self) {
        if let Ok(mut guard) = self.0.lock() {
            guard.is_login_pending = false;
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(UserDirectory::default(), AuthSettings::default())
    }
}

impl Client {
    #[tracing::instrument(name = "NEW CLIENT-CORE", skip(directory), fields(directory_len = directory.len()))]
    pub fn new(directory: UserDirectory, settings: AuthSettings) -> Self {
        if directory.is_empty() {
            warn!("user directory is empty, every login will be rejected");
        }
        Self {
            directory: Arc::new(directory),
            settings,
            inner: Default::default(),
        }
    }

    pub fn settings(&self) -> &AuthSettings {
        &self.settings
    }

    /// Checks the credentials against the directory after the simulated
    /// latency and on success replaces any existing session.
    ///
    /// Only one login may be in flight. Another call made meanwhile resolves
    /// immediately with [`AuthError::LoginInProgress`]
    #[tracing::instrument(skip(self, ui_notify))]
    pub fn authenticate<F: UiCallBack>(
        &self,
        args: LoginReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<LoginResult> {
        let (tx, rx) = oneshot::channel();
        let Some(pending) = PendingLogin::try_start(&self.inner) else {
            warn!("rejecting login while another is in progress");
            send_result(tx, Err(AuthError::LoginInProgress));
            ui_notify();
            return rx;
        };
        if args.remember_me {
            info!("remember me requested but sessions are not persisted");
        }
        let client = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(client.settings.login_latency).await;
            let msg = client.complete_login(&args);
            drop(pending);
            send_result(tx, msg);
            ui_notify();
        });
        rx
    }

    #[tracing::instrument(ret, err(Debug), skip(self))]
    fn complete_login(&self, args: &LoginReqArgs) -> LoginResult {
        let Some(user) = self
            .directory
            .find_by_credentials(&args.email, &args.password)
        else {
            return Err(AuthError::InvalidCredentials);
        };
        let session = Session::new(user.without_password(), self.settings.session_lifetime);
        let token = CredentialToken::issue(&session).map_err(|e| {
            error!(?e, "failed to issue token");
            AuthError::TokenIssue(e.to_string())
        })?;
        let user_info = Arc::clone(&session.user_info);
        info!(expires_at = %session.expires_at.display_as_utc_datetime(), "session started");

        let sweep_guard =
            sweep::spawn_expiry_sweep(Arc::downgrade(&self.inner), self.settings.expiry_sweep_interval);
        let mut guard = self.inner.lock().expect("mutex poisoned");
        guard.session = Some(session);
        guard.token = Some(token);
        // Replacing the guard stops the sweep of any previous session
        guard.sweep_guard = Some(sweep_guard);
        Ok(user_info)
    }

    /// True iff there is a session and its token decodes to an unexpired
    /// payload. Recomputed on every call
    pub fn is_authenticated(&self) -> bool {
        self.inner.lock().expect("mutex poisoned").has_valid_token()
    }

    /// Clears the session and token and stops the expiry sweep. Safe to call
    /// when already logged out
    #[tracing::instrument(skip(self))]
    pub fn logout(&self) {
        let mut guard = self.inner.lock().expect("mutex poisoned");
        if guard.session.is_some() {
            info!("logging out");
        }
        guard.clear();
    }

    /// Stops background work. The session itself is left in place
    #[tracing::instrument(skip(self))]
    pub fn shutdown(&self) {
        if self
            .inner
            .lock()
            .expect("mutex poisoned")
            .sweep_guard
            .take()
            .is_some()
        {
            debug!("expiry sweep stopped");
        }
    }

    pub fn user_info(&self) -> Option<Arc<UserInfo>> {
        self.inner
            .lock()
            .expect("mutex poisoned")
            .active_session()
            .map(|session| Arc::clone(&session.user_info))
    }

    pub fn role(&self) -> Option<Role> {
        self.user_info().map(|info| info.role)
    }

    /// False without an active session. The `"all"` permission grants
    /// everything
    #[tracing::instrument(ret, skip(self))]
    pub fn has_permission(&self, permission: &str) -> bool {
        self.user_info()
            .is_some_and(|info| info.permissions.grants(permission))
    }

    /// Dashboard for the role held by the session, the login page if there is
    /// no active session
    #[tracing::instrument(ret, skip(self))]
    pub fn dashboard_route(&self) -> &'static str {
        self.role().map_or(PATH_LOGIN, |role| role.dashboard_path())
    }

    /// Decides whether the current user may view `path`
    pub fn guard(&self, path: &str) -> GuardOutcome {
        check_access(path, self.role())
    }

    pub fn session_expires_at(&self) -> Option<Timestamp> {
        self.inner
            .lock()
            .expect("mutex poisoned")
            .active_session()
            .map(|session| session.expires_at)
    }

    /// Encoded credential token of the active session
    pub fn credential_token(&self) -> Option<CredentialToken> {
        let guard = self.inner.lock().expect("mutex poisoned");
        guard.active_session()?;
        guard.token.clone()
    }

    /// True while a session's expiry sweep is scheduled
    pub fn is_sweep_running(&self) -> bool {
        self.inner
            .lock()
            .expect("mutex poisoned")
            .sweep_guard
            .is_some()
    }

    pub fn is_login_pending(&self) -> bool {
        self.inner.lock().expect("mutex poisoned").is_login_pending
    }
}

fn send_result<T: Debug>(tx: oneshot::Sender<T>, msg: T) {
    if let Err(msg) = tx.send(msg) {
        debug!(?msg, "receiver dropped before result was sent");
    }
}

pub trait UiCallBack: 'static + Send + FnOnce() {}
impl<T> UiCallBack for T where T: 'static + Send + FnOnce() {}

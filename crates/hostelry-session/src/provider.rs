use crate::{Navigator, SessionBackend};
use hostelry_access::{filter_menu, landing_path, Gate, NavItem, PermissionTable};
use hostelry_common::{
    Capability, CapabilitySet, Credentials, Error, Identity, PasswordReset, PasswordResetRequest,
    Registration, Result, SessionEvent, SessionStatus, LOGIN_PATH,
};
use parking_lot::RwLock;
use std::sync::Arc;

pub const GENERIC_LOGIN_FAILURE: &str = "Login failed, please try again";

/// Result of [`SessionProvider::login`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    Failure { message: String },
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success)
    }
}

/// Owner of the current identity.
///
/// Status starts `Unknown` and is only written by [`check_session`],
/// [`login`] and [`logout`]. Readers get clones; the lock is never held
/// across a backend call. A check that resolves after a login or logout
/// already settled the status is discarded, redirect included.
///
/// [`check_session`]: SessionProvider::check_session
/// [`login`]: SessionProvider::login
/// [`logout`]: SessionProvider::logout
pub struct SessionProvider {
    backend: Arc<dyn SessionBackend>,
    navigator: Arc<dyn Navigator>,
    table: Arc<PermissionTable>,
    status: RwLock<SessionStatus>,
}

impl SessionProvider {
    pub fn new(
        backend: Arc<dyn SessionBackend>,
        navigator: Arc<dyn Navigator>,
        table: Arc<PermissionTable>,
    ) -> Self {
        Self {
            backend,
            navigator,
            table,
            status: RwLock::new(SessionStatus::Unknown),
        }
    }

    /// Seeds the status, e.g. with a fabricated identity in tests.
    pub fn with_status(self, status: SessionStatus) -> Self {
        *self.status.write() = status;
        self
    }

    pub fn status(&self) -> SessionStatus {
        self.status.read().clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.status.read().identity().cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.status.read().is_loading()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status.read().is_authenticated()
    }

    pub fn permission_table(&self) -> &PermissionTable {
        &self.table
    }

    pub fn granted(&self) -> CapabilitySet {
        let status = self.status.read();
        Gate::new(&self.table, &status).granted()
    }

    pub fn permits(&self, cap: Capability) -> bool {
        let status = self.status.read();
        Gate::new(&self.table, &status).permits(cap)
    }

    /// `items` filtered for the current identity.
    pub fn menu(&self, items: &[NavItem]) -> Vec<NavItem> {
        filter_menu(items, &self.granted())
    }

    /// Validates the existing session. Called once at startup.
    pub async fn check_session(&self) -> SessionStatus {
        match self.backend.check_session().await {
            Ok(identity) => {
                let landing = landing_path(identity.role());
                let (user, role) = (identity.id.clone(), identity.role_name.clone());
                let (status, applied) = self.transition(SessionEvent::CheckSucceeded(identity));
                if applied {
                    tracing::info!(user = %user, role = %role, "session restored");
                    self.navigator.navigate(landing);
                } else {
                    tracing::debug!(status = status.name(), "stale session check discarded");
                }
                status
            }
            Err(err) => {
                let (status, applied) = self.transition(SessionEvent::CheckFailed);
                if !applied {
                    tracing::debug!(status = status.name(), error = %err, "stale session check discarded");
                    return status;
                }
                tracing::warn!(error = %err, "session check failed");
                if !self.navigator.current_path().contains(LOGIN_PATH) {
                    self.navigator.navigate(LOGIN_PATH);
                }
                status
            }
        }
    }

    /// Posts credentials. A failure leaves the status as it was.
    pub async fn login(&self, credentials: &Credentials) -> LoginOutcome {
        match self.backend.login(credentials).await {
            Ok(identity) => {
                tracing::info!(user = %identity.id, role = %identity.role_name, "logged in");
                let landing = landing_path(identity.role());
                self.transition(SessionEvent::LoginSucceeded(identity));
                self.navigator.navigate(landing);
                LoginOutcome::Success
            }
            Err(err) => {
                tracing::warn!(email = %credentials.email, error = %err, "login failed");
                self.transition(SessionEvent::LoginFailed);
                let message = err.server_message().unwrap_or(GENERIC_LOGIN_FAILURE).to_string();
                LoginOutcome::Failure { message }
            }
        }
    }

    /// Signs out locally whatever the server answers.
    ///
    /// A failed request may leave the server-side session alive; it is logged
    /// and otherwise ignored.
    pub async fn logout(&self) {
        if let Err(err) = self.backend.logout().await {
            tracing::warn!(error = %err, "logout request failed, clearing local session anyway");
        }
        self.transition(SessionEvent::LoggedOut);
        self.navigator.navigate(LOGIN_PATH);
    }

    /// Registers a resident or staff account on behalf of the signed-in admin.
    pub async fn register(&self, registration: &Registration) -> Result<()> {
        if !self.permits(Capability::UserRegistration) {
            return Err(Error::Forbidden("registering users requires user-registration".to_string()));
        }
        self.backend.register(registration).await.map_err(|err| {
            tracing::warn!(email = %registration.email, error = %err, "registration failed");
            err
        })?;
        tracing::info!(email = %registration.email, role = %registration.role, "user registered");
        Ok(())
    }

    /// Mails a reset link, then returns to the login screen.
    pub async fn request_password_reset(&self, request: &PasswordResetRequest) -> Result<()> {
        self.backend.request_password_reset(request).await.map_err(|err| {
            tracing::warn!(email = %request.email, error = %err, "password reset request failed");
            err
        })?;
        tracing::info!(email = %request.email, "password reset link requested");
        self.navigator.navigate(LOGIN_PATH);
        Ok(())
    }

    /// Sets a new password with the token from a reset link, then returns to
    /// the login screen. The session status is not touched.
    pub async fn reset_password(&self, token: &str, reset: &PasswordReset) -> Result<()> {
        self.backend.reset_password(token, reset).await.map_err(|err| {
            tracing::warn!(error = %err, "password reset failed");
            err
        })?;
        tracing::info!("password changed");
        self.navigator.navigate(LOGIN_PATH);
        Ok(())
    }

    /// Applies `event` under one write lock. The flag is false when the
    /// current status ignores the event.
    fn transition(&self, event: SessionEvent) -> (SessionStatus, bool) {
        let mut status = self.status.write();
        if !status.accepts(&event) {
            return (status.clone(), false);
        }
        let from = status.name();
        let next = std::mem::take(&mut *status).apply(event);
        tracing::debug!(from, to = next.name(), "session transition");
        *status = next.clone();
        (next, true)
    }
}

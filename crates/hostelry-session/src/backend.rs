use async_trait::async_trait;
use hostelry_common::{
    Credentials, Error, Identity, PasswordReset, PasswordResetRequest, Registration, Result, Role,
};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// The auth and account endpoints the session provider consumes.
#[async_trait]
pub trait SessionBackend: Send + Sync {
    /// Validates the existing session and returns its identity.
    async fn check_session(&self) -> Result<Identity>;

    async fn login(&self, credentials: &Credentials) -> Result<Identity>;

    async fn logout(&self) -> Result<()>;

    /// Creates a resident or staff account. Requires an admin session.
    async fn register(&self, registration: &Registration) -> Result<()>;

    /// Asks the server to mail a reset link to `request.email`.
    async fn request_password_reset(&self, request: &PasswordResetRequest) -> Result<()>;

    /// Sets a new password using the token from the reset link.
    async fn reset_password(&self, token: &str, reset: &PasswordReset) -> Result<()>;
}

/// In-memory backend for tests and offline use.
#[derive(Default)]
pub struct MockBackend {
    session: Mutex<Option<Identity>>,
    accounts: Mutex<Vec<(Credentials, Identity)>>,
    calls: Mutex<Vec<&'static str>>,
    registrations: Mutex<Vec<Registration>>,
    reset_tokens: Mutex<Vec<String>>,
    passwords_reset: Mutex<Vec<(String, String)>>,
    offline: AtomicBool,
    fail_logout: AtomicBool,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with an existing server-side session.
    pub fn with_session(self, identity: Identity) -> Self {
        *self.session.lock() = Some(identity);
        self
    }

    pub fn with_account(self, credentials: Credentials, identity: Identity) -> Self {
        self.accounts.lock().push((credentials, identity));
        self
    }

    /// Every request fails with a transport error.
    pub fn offline(self) -> Self {
        self.offline.store(true, Ordering::SeqCst);
        self
    }

    /// Logout answers with a 500.
    pub fn failing_logout(self) -> Self {
        self.fail_logout.store(true, Ordering::SeqCst);
        self
    }

    /// Accepts `token` on the reset endpoint.
    pub fn with_reset_token(self, token: impl Into<String>) -> Self {
        self.reset_tokens.lock().push(token.into());
        self
    }

    pub fn registrations(&self) -> Vec<Registration> {
        self.registrations.lock().clone()
    }

    /// `(token, new password)` pairs the reset endpoint accepted.
    pub fn passwords_reset(&self) -> Vec<(String, String)> {
        self.passwords_reset.lock().clone()
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }

    pub fn has_session(&self) -> bool {
        self.session.lock().is_some()
    }

    fn record(&self, call: &'static str) -> Result<()> {
        self.calls.lock().push(call);
        if self.offline.load(Ordering::SeqCst) {
            return Err(Error::Http("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SessionBackend for MockBackend {
    async fn check_session(&self) -> Result<Identity> {
        self.record("check_session")?;
        self.session.lock().clone().ok_or(Error::Rejected {
            status: 401,
            message: Some("Not authenticated".to_string()),
        })
    }

    async fn login(&self, credentials: &Credentials) -> Result<Identity> {
        self.record("login")?;
        let identity = self
            .accounts
            .lock()
            .iter()
            .find(|(known, _)| known.email == credentials.email && known.password == credentials.password)
            .map(|(_, identity)| identity.clone())
            .ok_or(Error::Rejected {
                status: 401,
                message: Some("Invalid email or password".to_string()),
            })?;
        *self.session.lock() = Some(identity.clone());
        Ok(identity)
    }

    async fn logout(&self) -> Result<()> {
        self.record("logout")?;
        if self.fail_logout.load(Ordering::SeqCst) {
            return Err(Error::Rejected { status: 500, message: None });
        }
        *self.session.lock() = None;
        Ok(())
    }

    async fn register(&self, registration: &Registration) -> Result<()> {
        self.record("register")?;
        let is_admin = self
            .session
            .lock()
            .as_ref()
            .is_some_and(|identity| identity.role() == Some(Role::Admin));
        if !is_admin {
            return Err(Error::Rejected {
                status: 403,
                message: Some("Only administrators can register users".to_string()),
            });
        }
        let mut registrations = self.registrations.lock();
        if registrations.iter().any(|known| known.email == registration.email) {
            return Err(Error::Rejected {
                status: 409,
                message: Some("User already exists".to_string()),
            });
        }
        registrations.push(registration.clone());
        Ok(())
    }

    async fn request_password_reset(&self, _request: &PasswordResetRequest) -> Result<()> {
        self.record("request_password_reset")
    }

    async fn reset_password(&self, token: &str, reset: &PasswordReset) -> Result<()> {
        self.record("reset_password")?;
        if !self.reset_tokens.lock().iter().any(|known| known == token) {
            return Err(Error::Rejected {
                status: 401,
                message: Some("Invalid or expired token".to_string()),
            });
        }
        self.passwords_reset
            .lock()
            .push((token.to_string(), reset.password.clone()));
        Ok(())
    }
}

use crate::SessionBackend;
use async_trait::async_trait;
use hostelry_common::{
    BackendConfig, Credentials, Error, Identity, PasswordReset, PasswordResetRequest, Registration,
    Result,
};
use serde::Deserialize;
use std::time::Duration;

const CHECK_AUTH: &str = "/api/auth/check-auth";
const LOGIN: &str = "/api/auth/login";
const LOGOUT: &str = "/api/auth/logout";
const REGISTER: &str = "/api/auth/register";
const RESET_REQUEST: &str = "/api/reset-password-request";
const RESET: &str = "/api/reset-password";

#[derive(Deserialize)]
struct UserEnvelope {
    user: Identity,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// REST client for the auth endpoints. The session lives in a cookie, so the
/// client keeps a cookie store for its whole lifetime.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(transport)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl SessionBackend for HttpBackend {
    async fn check_session(&self) -> Result<Identity> {
        let response = self.client.get(self.url(CHECK_AUTH)).send().await.map_err(transport)?;
        read_user(response).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<Identity> {
        let response = self
            .client
            .post(self.url(LOGIN))
            .json(credentials)
            .send()
            .await
            .map_err(transport)?;
        read_user(response).await
    }

    async fn logout(&self) -> Result<()> {
        let response = self
            .client
            .post(self.url(LOGOUT))
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(transport)?;
        ensure_success(response).await.map(|_| ())
    }

    async fn register(&self, registration: &Registration) -> Result<()> {
        let response = self
            .client
            .post(self.url(REGISTER))
            .json(registration)
            .send()
            .await
            .map_err(transport)?;
        ensure_success(response).await.map(|_| ())
    }

    async fn request_password_reset(&self, request: &PasswordResetRequest) -> Result<()> {
        let response = self
            .client
            .post(self.url(RESET_REQUEST))
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        ensure_success(response).await.map(|_| ())
    }

    async fn reset_password(&self, token: &str, reset: &PasswordReset) -> Result<()> {
        if token.trim().is_empty() {
            return Err(Error::Validation("reset token is missing".to_string()));
        }
        let response = self
            .client
            .post(self.url(RESET))
            .bearer_auth(token)
            .json(reset)
            .send()
            .await
            .map_err(transport)?;
        ensure_success(response).await.map(|_| ())
    }
}

async fn read_user(response: reqwest::Response) -> Result<Identity> {
    let envelope: UserEnvelope = ensure_success(response).await?.json().await.map_err(transport)?;
    Ok(envelope.user)
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.json::<ErrorBody>().await.ok().and_then(|body| body.message);
    Err(Error::Rejected {
        status: status.as_u16(),
        message,
    })
}

fn transport(err: reqwest::Error) -> Error {
    Error::Http(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = BackendConfig {
            base_url: "http://localhost:5000/".to_string(),
            timeout_secs: 5,
        };
        let backend = HttpBackend::new(&config).unwrap();
        assert_eq!(backend.url(LOGIN), "http://localhost:5000/api/auth/login");
    }

    #[tokio::test]
    async fn reset_without_token_never_hits_the_network() {
        let config = BackendConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
        };
        let backend = HttpBackend::new(&config).unwrap();
        let reset = PasswordReset::new("new-pass", "new-pass").unwrap();
        let err = backend.reset_password("  ", &reset).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)), "{err:?}");
    }

    #[test]
    fn account_endpoints_are_rooted_at_the_base_url() {
        let config = BackendConfig {
            base_url: "https://api.hostel.io".to_string(),
            timeout_secs: 5,
        };
        let backend = HttpBackend::new(&config).unwrap();
        assert_eq!(backend.url(REGISTER), "https://api.hostel.io/api/auth/register");
        assert_eq!(backend.url(RESET_REQUEST), "https://api.hostel.io/api/reset-password-request");
        assert_eq!(backend.url(RESET), "https://api.hostel.io/api/reset-password");
    }

    #[test]
    fn user_envelope_accepts_mongo_ids() {
        let json = r#"{"user": {"_id": "abc", "name": "Kofi", "email": "k@x.io", "role": "Staff"}}"#;
        let envelope: UserEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.user.id, "abc");
    }
}

//! Validated payloads for the account flows around login: registering a
//! resident or staff member, requesting a reset link and setting a new password.

use crate::{Error, Result, Role};
use serde::Serialize;

pub const MIN_PASSWORD_LEN: usize = 6;

/// New account created by an administrator. Only residents and staff can be
/// registered this way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
}

impl Registration {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        role: Role,
    ) -> Result<Self> {
        let name = name.into();
        let email = email.into();
        let phone = phone.into();

        if name.trim().is_empty() {
            return Err(Error::Validation("name is required".to_string()));
        }
        validate_email(&email)?;
        if phone.len() != 10 || !phone.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Validation("phone number must be 10 digits".to_string()));
        }
        if !matches!(role, Role::Resident | Role::Staff) {
            return Err(Error::Validation(format!("cannot register an account with role {role}")));
        }

        Ok(Self { name, email, phone, role })
    }
}

/// Asks the backend to mail a reset link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

impl PasswordResetRequest {
    pub fn new(email: impl Into<String>) -> Result<Self> {
        let email = email.into();
        validate_email(&email)?;
        Ok(Self { email })
    }
}

/// New password submitted with a reset token. The confirmation is checked
/// here and never sent.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct PasswordReset {
    pub password: String,
}

impl PasswordReset {
    pub fn new(password: impl Into<String>, confirmation: &str) -> Result<Self> {
        let password = password.into();
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(Error::Validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if password != confirmation {
            return Err(Error::Validation("passwords must match".to_string()));
        }
        Ok(Self { password })
    }
}

impl std::fmt::Debug for PasswordReset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordReset").field("password", &"<redacted>").finish()
    }
}

fn validate_email(email: &str) -> Result<()> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.'),
        None => false,
    };
    if valid && !email.contains(char::is_whitespace) {
        Ok(())
    } else {
        Err(Error::Validation(format!("invalid email address: {email:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn registers_resident() {
        let reg = Registration::new("Ama Mensah", "ama@example.com", "0241234567", Role::Resident).unwrap();
        let json = serde_json::to_value(&reg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ama Mensah",
                "email": "ama@example.com",
                "phone": "0241234567",
                "role": "Resident"
            })
        );
    }

    #[test]
    fn admins_cannot_be_registered() {
        let err = Registration::new("Root", "root@example.com", "0241234567", Role::Admin).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[rstest]
    #[case("", "a@b.io", "0241234567")]
    #[case("Kofi", "not-an-email", "0241234567")]
    #[case("Kofi", "kofi@localhost", "0241234567")]
    #[case("Kofi", "kofi@x.io", "024123456")]
    #[case("Kofi", "kofi@x.io", "02412345ab")]
    fn registration_rejects_bad_fields(#[case] name: &str, #[case] email: &str, #[case] phone: &str) {
        assert!(Registration::new(name, email, phone, Role::Staff).is_err());
    }

    #[test]
    fn reset_request_needs_valid_email() {
        assert!(PasswordResetRequest::new("esi@hostel.io").is_ok());
        assert!(PasswordResetRequest::new("esi hostel.io").is_err());
    }

    #[rstest]
    #[case("abc12", "abc12", false)]
    #[case("abc123", "abc124", false)]
    #[case("abc123", "abc123", true)]
    fn password_reset_rules(#[case] password: &str, #[case] confirmation: &str, #[case] ok: bool) {
        assert_eq!(PasswordReset::new(password, confirmation).is_ok(), ok);
    }

    #[test]
    fn password_reset_sends_only_the_password() {
        let reset = PasswordReset::new("s3cret!", "s3cret!").unwrap();
        assert_eq!(serde_json::to_value(&reset).unwrap(), serde_json::json!({ "password": "s3cret!" }));
        assert!(!format!("{reset:?}").contains("s3cret!"));
    }
}

use crate::Role;
use serde::{Deserialize, Serialize};

/// The signed-in actor as returned by the session-check and login endpoints.
///
/// `role` keeps the backend's raw string so an unrecognised role can still be
/// displayed and logged; [`Identity::role`] is what access decisions use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "role")]
    pub role_name: String,
    #[serde(rename = "roomId", default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
}

impl Identity {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            role_name: role.as_str().to_string(),
            room_id: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_room(mut self, room_id: impl Into<String>) -> Self {
        self.room_id = Some(room_id.into());
        self
    }

    /// Parsed role, or `None` when the backend sent a role outside the closed set.
    pub fn role(&self) -> Option<Role> {
        self.role_name.parse().ok()
    }
}

/// Login form payload.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_user_payload() {
        let json = r#"{
            "_id": "65f1c0de",
            "name": "Ama Mensah",
            "email": "ama@example.com",
            "role": "Resident",
            "roomId": "B-204"
        }"#;
        let identity: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.id, "65f1c0de");
        assert_eq!(identity.role(), Some(Role::Resident));
        assert_eq!(identity.room_id.as_deref(), Some("B-204"));
    }

    #[test]
    fn unknown_role_is_kept_but_not_parsed() {
        let json = r#"{"id": "7", "name": "Visitor", "role": "Guest"}"#;
        let identity: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.role_name, "Guest");
        assert_eq!(identity.role(), None);
        assert!(identity.email.is_empty());
    }

    #[test]
    fn credentials_debug_hides_password() {
        let creds = Credentials::new("warden@example.com", "hunter2");
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("warden@example.com"));
        assert!(!rendered.contains("hunter2"));
    }
}

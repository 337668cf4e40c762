//! Session status state machine.
//!
//! ```text
//! Unknown       --CheckSucceeded--> Authenticated
//! Unknown       --CheckFailed-----> Anonymous
//! any           --LoginSucceeded--> Authenticated
//! any           --LoginFailed-----> unchanged
//! any           --LoggedOut-------> Anonymous
//! ```
//!
//! Check outcomes only count while the status is still `Unknown`. A check
//! that resolves after a login or logout is stale and leaves the status alone.

use crate::Identity;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// The startup session check has not resolved yet.
    #[default]
    Unknown,
    Anonymous,
    Authenticated(Identity),
}

/// Outcomes of the provider's three operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    CheckSucceeded(Identity),
    CheckFailed,
    LoginSucceeded(Identity),
    LoginFailed,
    LoggedOut,
}

impl SessionStatus {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionStatus::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionStatus::Unknown)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionStatus::Authenticated(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            SessionStatus::Unknown => "unknown",
            SessionStatus::Anonymous => "anonymous",
            SessionStatus::Authenticated(_) => "authenticated",
        }
    }

    /// Whether `event` is an edge out of this status. Rejected events are
    /// discarded by [`apply`](SessionStatus::apply).
    pub fn accepts(&self, event: &SessionEvent) -> bool {
        match event {
            SessionEvent::CheckSucceeded(_) | SessionEvent::CheckFailed => self.is_loading(),
            SessionEvent::LoginSucceeded(_) | SessionEvent::LoginFailed | SessionEvent::LoggedOut => true,
        }
    }

    /// Next status after `event`. Only successful checks and logins produce
    /// `Authenticated`.
    pub fn apply(self, event: SessionEvent) -> SessionStatus {
        if !self.accepts(&event) {
            return self;
        }
        match event {
            SessionEvent::CheckSucceeded(identity) | SessionEvent::LoginSucceeded(identity) => {
                SessionStatus::Authenticated(identity)
            }
            SessionEvent::CheckFailed | SessionEvent::LoggedOut => SessionStatus::Anonymous,
            SessionEvent::LoginFailed => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    fn admin() -> Identity {
        Identity::new("1", "Warden", Role::Admin)
    }

    fn resident() -> Identity {
        Identity::new("2", "Ama", Role::Resident)
    }

    #[test]
    fn starts_unknown_and_loading() {
        let status = SessionStatus::default();
        assert!(status.is_loading());
        assert!(status.identity().is_none());
    }

    #[test]
    fn check_outcomes() {
        let ok = SessionStatus::Unknown.apply(SessionEvent::CheckSucceeded(admin()));
        assert_eq!(ok.identity(), Some(&admin()));

        let failed = SessionStatus::Unknown.apply(SessionEvent::CheckFailed);
        assert_eq!(failed, SessionStatus::Anonymous);
    }

    #[test]
    fn late_check_failure_does_not_undo_login() {
        let status = SessionStatus::Unknown
            .apply(SessionEvent::LoginSucceeded(admin()))
            .apply(SessionEvent::CheckFailed);
        assert_eq!(status, SessionStatus::Authenticated(admin()));
    }

    #[test]
    fn every_state_event_pair_follows_the_edge_list() {
        let states = [
            SessionStatus::Unknown,
            SessionStatus::Anonymous,
            SessionStatus::Authenticated(admin()),
        ];
        let events = [
            SessionEvent::CheckSucceeded(resident()),
            SessionEvent::CheckFailed,
            SessionEvent::LoginSucceeded(resident()),
            SessionEvent::LoginFailed,
            SessionEvent::LoggedOut,
        ];

        for state in &states {
            for event in &events {
                let expected = match (state, event) {
                    (SessionStatus::Unknown, SessionEvent::CheckSucceeded(id)) => SessionStatus::Authenticated(id.clone()),
                    (SessionStatus::Unknown, SessionEvent::CheckFailed) => SessionStatus::Anonymous,
                    (_, SessionEvent::CheckSucceeded(_)) | (_, SessionEvent::CheckFailed) => state.clone(),
                    (_, SessionEvent::LoginSucceeded(id)) => SessionStatus::Authenticated(id.clone()),
                    (_, SessionEvent::LoginFailed) => state.clone(),
                    (_, SessionEvent::LoggedOut) => SessionStatus::Anonymous,
                };
                let actual = state.clone().apply(event.clone());
                assert_eq!(actual, expected, "{} + {:?}", state.name(), event);

                let is_check = matches!(event, SessionEvent::CheckSucceeded(_) | SessionEvent::CheckFailed);
                if is_check {
                    assert_eq!(state.accepts(event), state.is_loading());
                }
            }
        }
    }

    #[test]
    fn non_success_events_never_authenticate() {
        let events = [SessionEvent::CheckFailed, SessionEvent::LoginFailed, SessionEvent::LoggedOut];
        for start in [SessionStatus::Unknown, SessionStatus::Anonymous] {
            for event in events.clone() {
                assert!(!start.clone().apply(event).is_authenticated());
            }
        }
    }

    #[test]
    fn logout_then_login_cycles() {
        let status = SessionStatus::Authenticated(admin())
            .apply(SessionEvent::LoggedOut)
            .apply(SessionEvent::LoginSucceeded(admin()));
        assert!(status.is_authenticated());
    }
}

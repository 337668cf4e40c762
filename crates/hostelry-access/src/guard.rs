use crate::{Gate, PermissionTable, RouteEntry};
use hostelry_common::{SessionStatus, LOGIN_PATH};

/// Outcome of the logged-in check for a protected route group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session check outstanding: render nothing, do not redirect.
    Pending,
    Redirect(&'static str),
    Allow,
}

/// Blocks protected routes for sessions without an identity. Capability
/// checks are left to [`Gate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard;

impl RouteGuard {
    pub fn check(status: &SessionStatus) -> GuardDecision {
        match status {
            SessionStatus::Unknown => GuardDecision::Pending,
            SessionStatus::Anonymous => GuardDecision::Redirect(LOGIN_PATH),
            SessionStatus::Authenticated(_) => GuardDecision::Allow,
        }
    }
}

/// What to do when navigating to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Pending,
    RedirectToLogin,
    /// Logged in (or unguarded) but the page's capability is not granted.
    Hidden,
    Render,
}

/// Guard for protected routes, then the capability gate for tagged ones.
pub fn authorize(route: &RouteEntry, status: &SessionStatus, table: &PermissionTable) -> RouteAccess {
    if route.protected {
        match RouteGuard::check(status) {
            GuardDecision::Pending => return RouteAccess::Pending,
            GuardDecision::Redirect(_) => return RouteAccess::RedirectToLogin,
            GuardDecision::Allow => {}
        }
    }

    match route.capability {
        Some(cap) if !Gate::new(table, status).permits(cap) => {
            tracing::debug!(route = %route.pattern, capability = %cap, "route hidden");
            RouteAccess::Hidden
        }
        _ => RouteAccess::Render,
    }
}

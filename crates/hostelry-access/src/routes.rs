//! Application route table.
//!
//! Each route declares whether it sits behind the logged-in guard and which
//! capability its page is gated on. Patterns use `:name` for path parameters.

use hostelry_common::{Capability, CapabilitySet, Role, LOGIN_PATH};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capability: Option<Capability>,
    pub protected: bool,
}

impl RouteEntry {
    pub fn public(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            capability: None,
            protected: false,
        }
    }

    pub fn protected(pattern: impl Into<String>, capability: Capability) -> Self {
        Self {
            pattern: pattern.into(),
            capability: Some(capability),
            protected: true,
        }
    }

    pub fn gated(pattern: impl Into<String>, capability: Capability) -> Self {
        Self {
            pattern: pattern.into(),
            capability: Some(capability),
            protected: false,
        }
    }

    /// Matches `path` against the pattern, returning extracted parameters.
    pub fn matches(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let pattern: Vec<&str> = segments(&self.pattern).collect();
        let actual: Vec<&str> = segments(path).collect();
        if pattern.len() != actual.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (expected, got) in pattern.iter().zip(&actual) {
            match expected.strip_prefix(':') {
                Some(name) => {
                    params.insert(name.to_string(), got.to_string());
                }
                None if expected == got => {}
                None => return None,
            }
        }
        Some(params)
    }
}

/// Route resolved from a concrete path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub entry: &'a RouteEntry,
    pub params: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    pub fn standard() -> Self {
        use Capability::*;
        Self::new(vec![
            RouteEntry::public(LOGIN_PATH),
            RouteEntry::public("/forgot-password"),
            RouteEntry::public("/reset-password/:token"),
            RouteEntry::protected("/auth/register", UserRegistration),
            RouteEntry::protected("/app/rooms", HostelManagement),
            RouteEntry::protected("/app/room/:id", HostelManagement),
            RouteEntry::protected("/app/users", UserManagement),
            RouteEntry::protected("/app/users/:id", UserManagement),
            RouteEntry::protected("/app/myProfile", Profile),
            RouteEntry::protected("/app/maintenanceRequests", HostelManagement),
            RouteEntry::protected("/app/financialManagement", FinancialManagement),
            RouteEntry::gated("/app/admin-notifications", NotificationManagement),
            RouteEntry::public("/app/notifications"),
            RouteEntry::gated("/app/userPayments/payment", UserPayments),
            RouteEntry::gated("/app/userPayments/success", UserPayments),
            RouteEntry::gated("/app/userPayments/failure", UserPayments),
            RouteEntry::gated("/app/paymentManagement/generatePayment", PaymentManagement),
            RouteEntry::gated("/app/paymentManagement/paymentList", PaymentManagement),
            RouteEntry::gated("/app/userPayments", UserPayments),
        ])
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// First entry matching `path`. Query string, fragment and trailing slash
    /// are ignored.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        let path = strip_suffixes(path);
        self.entries.iter().find_map(|entry| {
            entry.matches(path).map(|params| RouteMatch { entry, params })
        })
    }

    pub fn referenced_capabilities(&self) -> CapabilitySet {
        self.entries.iter().filter_map(|entry| entry.capability).collect()
    }
}

pub static STANDARD_ROUTES: Lazy<RouteTable> = Lazy::new(RouteTable::standard);

/// Where a freshly authenticated identity lands.
pub fn landing_path(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Admin) => "/app/rooms",
        Some(Role::Resident) | Some(Role::Staff) => "/app/myProfile",
        None => LOGIN_PATH,
    }
}

fn strip_suffixes(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

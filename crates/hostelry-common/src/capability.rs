use crate::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Feature-access tag attached to routes, menu entries and page fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    HostelManagement,
    UserManagement,
    NotificationManagement,
    PaymentManagement,
    FinancialManagement,
    UserRegistration,
    Profile,
    UserPayments,
}

/// Set of granted capabilities. Ordered so listings are stable.
pub type CapabilitySet = BTreeSet<Capability>;

impl Capability {
    pub const ALL: [Capability; 8] = [
        Capability::HostelManagement,
        Capability::UserManagement,
        Capability::NotificationManagement,
        Capability::PaymentManagement,
        Capability::FinancialManagement,
        Capability::UserRegistration,
        Capability::Profile,
        Capability::UserPayments,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Capability::HostelManagement => "hostel-management",
            Capability::UserManagement => "user-management",
            Capability::NotificationManagement => "notification-management",
            Capability::PaymentManagement => "payment-management",
            Capability::FinancialManagement => "financial-management",
            Capability::UserRegistration => "user-registration",
            Capability::Profile => "profile",
            Capability::UserPayments => "user-payments",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Capability {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Capability::ALL
            .into_iter()
            .find(|cap| cap.as_str() == value)
            .ok_or_else(|| Error::UnknownCapability(value.to_string()))
    }
}

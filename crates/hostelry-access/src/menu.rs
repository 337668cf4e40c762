//! Navigation tree and capability-based pruning.

use hostelry_common::{Capability, CapabilitySet};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One entry of the sidebar.
///
/// `children: None` is a leaf. `Some(..)` is a section, even when the list is
/// empty; sections are shown only while at least one child survives filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capability: Option<Capability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavItem>>,
}

impl NavItem {
    pub fn leaf(label: impl Into<String>, target: impl Into<String>, capability: Option<Capability>) -> Self {
        Self {
            label: label.into(),
            capability,
            target: Some(target.into()),
            children: None,
        }
    }

    pub fn section(label: impl Into<String>, capability: Option<Capability>, children: Vec<NavItem>) -> Self {
        Self {
            label: label.into(),
            capability,
            target: None,
            children: Some(children),
        }
    }

    pub fn is_section(&self) -> bool {
        self.children.is_some()
    }
}

/// Keeps the parts of `items` visible to `granted`, preserving sibling order.
///
/// Leaves survive when untagged or when their capability is granted. Sections
/// survive with their filtered children when that list is non-empty; the
/// section's own tag is not consulted.
pub fn filter_menu(items: &[NavItem], granted: &CapabilitySet) -> Vec<NavItem> {
    items
        .iter()
        .filter_map(|item| match &item.children {
            Some(children) => {
                let kept = filter_menu(children, granted);
                (!kept.is_empty()).then(|| NavItem {
                    children: Some(kept),
                    ..item.clone()
                })
            }
            None => match item.capability {
                Some(cap) if !granted.contains(&cap) => None,
                _ => Some(item.clone()),
            },
        })
        .collect()
}

/// Targets of every item in `items`, depth-first. Does no filtering of its
/// own; pass the output of [`filter_menu`] to list what a user can reach.
pub fn targets(items: &[NavItem]) -> Vec<&str> {
    let mut out = Vec::new();
    collect_targets(items, &mut out);
    out
}

fn collect_targets<'a>(items: &'a [NavItem], out: &mut Vec<&'a str>) {
    for item in items {
        if let Some(target) = &item.target {
            out.push(target);
        }
        if let Some(children) = &item.children {
            collect_targets(children, out);
        }
    }
}

/// Capabilities referenced anywhere in `items`, section tags included.
pub fn referenced_capabilities(items: &[NavItem]) -> CapabilitySet {
    let mut caps = CapabilitySet::new();
    for item in items {
        caps.extend(item.capability);
        if let Some(children) = &item.children {
            caps.extend(referenced_capabilities(children));
        }
    }
    caps
}

pub static SIDEBAR: Lazy<Vec<NavItem>> = Lazy::new(|| {
    use Capability::*;
    vec![
        NavItem::section(
            "Hostel Management",
            Some(HostelManagement),
            vec![
                NavItem::leaf("Rooms", "/app/rooms", Some(HostelManagement)),
                NavItem::leaf("Maintenance Requests", "/app/maintenanceRequests", Some(HostelManagement)),
            ],
        ),
        NavItem::section(
            "User Management",
            Some(UserManagement),
            vec![NavItem::leaf("Users", "/app/users", Some(UserManagement))],
        ),
        NavItem::section(
            "Payments",
            Some(PaymentManagement),
            vec![
                NavItem::leaf("Financial Reports", "/app/financialManagement", Some(FinancialManagement)),
                NavItem::leaf(
                    "Generate Payment",
                    "/app/paymentManagement/generatePayment",
                    Some(PaymentManagement),
                ),
                NavItem::leaf("Payment List", "/app/paymentManagement/paymentList", Some(PaymentManagement)),
            ],
        ),
        NavItem::leaf("Notifications", "/app/admin-notifications", Some(NotificationManagement)),
        NavItem::leaf("My Payments", "/app/userPayments", Some(UserPayments)),
        NavItem::leaf("My profile", "/app/myProfile", Some(Profile)),
    ]
});

/// The application's sidebar tree.
pub fn sidebar() -> &'static [NavItem] {
    &SIDEBAR
}

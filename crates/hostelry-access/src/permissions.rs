use hostelry_common::{Capability, CapabilitySet, Role};
use std::collections::BTreeMap;

/// Static mapping from role to granted capabilities.
///
/// Immutable once built. Every [`Role`] gets an entry, so a missing lookup
/// only happens for identities whose role could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionTable {
    grants: BTreeMap<Role, CapabilitySet>,
}

impl PermissionTable {
    /// Table with an empty entry for every role.
    pub fn empty() -> Self {
        Self {
            grants: Role::ALL.into_iter().map(|role| (role, CapabilitySet::new())).collect(),
        }
    }

    /// The grants the hostel application ships with.
    pub fn standard() -> Self {
        Self::empty()
            .with_grants(
                Role::Admin,
                [
                    Capability::HostelManagement,
                    Capability::UserManagement,
                    Capability::NotificationManagement,
                    Capability::PaymentManagement,
                    Capability::FinancialManagement,
                    Capability::UserRegistration,
                ],
            )
            .with_grants(Role::Resident, [Capability::Profile, Capability::UserPayments])
            .with_grants(Role::Staff, [Capability::Profile])
    }

    pub fn with_grants(mut self, role: Role, caps: impl IntoIterator<Item = Capability>) -> Self {
        self.grants.entry(role).or_default().extend(caps);
        self
    }

    pub fn capabilities_for(&self, role: Role) -> Option<&CapabilitySet> {
        self.grants.get(&role)
    }

    /// Capabilities for an optional role; an absent role grants nothing.
    pub fn granted(&self, role: Option<Role>) -> CapabilitySet {
        role.and_then(|r| self.capabilities_for(r)).cloned().unwrap_or_default()
    }

    pub fn grants(&self, role: Role, cap: Capability) -> bool {
        self.capabilities_for(role).is_some_and(|caps| caps.contains(&cap))
    }

    /// Union of every role's grants. A capability outside this set is
    /// unreachable for everyone.
    pub fn reachable(&self) -> CapabilitySet {
        self.grants.values().flatten().copied().collect()
    }

    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.grants.keys().copied()
    }
}

impl Default for PermissionTable {
    fn default() -> Self {
        Self::standard()
    }
}

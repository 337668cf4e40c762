use crate::PermissionTable;
use hostelry_common::{Capability, CapabilitySet, SessionStatus};

/// Visibility decision for UI regions tagged with a capability.
///
/// Fails closed: while the session is `Unknown` or `Anonymous`, or when the
/// identity's role is not in the table, nothing is granted.
#[derive(Debug, Clone, Copy)]
pub struct Gate<'a> {
    table: &'a PermissionTable,
    status: &'a SessionStatus,
}

impl<'a> Gate<'a> {
    pub fn new(table: &'a PermissionTable, status: &'a SessionStatus) -> Self {
        Self { table, status }
    }

    pub fn granted(&self) -> CapabilitySet {
        match self.status.identity() {
            Some(identity) => self.table.granted(identity.role()),
            None => CapabilitySet::new(),
        }
    }

    pub fn permits(&self, cap: Capability) -> bool {
        self.status
            .identity()
            .and_then(|identity| identity.role())
            .is_some_and(|role| self.table.grants(role, cap))
    }

    /// String entry point; names outside the capability vocabulary are not granted.
    pub fn permits_name(&self, name: &str) -> bool {
        match name.parse::<Capability>() {
            Ok(cap) => self.permits(cap),
            Err(_) => {
                tracing::trace!(capability = name, "unknown capability treated as not granted");
                false
            }
        }
    }

    /// Produces the content only when `cap` is granted. Suppressed content is
    /// never built.
    pub fn show<T>(&self, cap: Capability, content: impl FnOnce() -> T) -> Option<T> {
        self.permits(cap).then(content)
    }
}

//! Client-side access control for Hostelry.
//!
//! - [`PermissionTable`]: role to capability mapping
//! - [`Gate`]: yes/no visibility for one capability
//! - [`filter_menu`]: prunes a navigation tree to what a capability set can see
//! - [`RouteGuard`] and [`authorize`]: logged-in checks and per-route decisions
//! - [`RouteTable`]: the application's routes and their requirements

#![warn(clippy::all)]

pub mod gate;
pub mod guard;
pub mod menu;
pub mod permissions;
pub mod routes;

pub use gate::Gate;
pub use guard::{authorize, GuardDecision, RouteAccess, RouteGuard};
pub use menu::{filter_menu, sidebar, targets, NavItem, SIDEBAR};
pub use permissions::PermissionTable;
pub use routes::{landing_path, RouteEntry, RouteMatch, RouteTable, STANDARD_ROUTES};

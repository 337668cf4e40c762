//! Identity/session provider for Hostelry.
//!
//! [`SessionProvider`] owns the current [`SessionStatus`](hostelry_common::SessionStatus)
//! and is the only writer of it. It talks to the backend through the
//! [`SessionBackend`] trait and performs redirects through a [`Navigator`].

pub mod backend;
pub mod http;
pub mod navigator;
pub mod provider;

pub use backend::{MockBackend, SessionBackend};
pub use http::HttpBackend;
pub use navigator::{MemoryNavigator, Navigator};
pub use provider::{LoginOutcome, SessionProvider, GENERIC_LOGIN_FAILURE};

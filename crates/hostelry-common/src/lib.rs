//! Shared building blocks for the Hostelry front-end core.
//!
//! Every other crate in the workspace depends on this one for the closed
//! [`Role`] and [`Capability`] vocabularies, the signed-in [`Identity`],
//! the [`SessionStatus`] state machine and the common [`Error`] type.

pub mod account;
pub mod capability;
pub mod config;
pub mod error;
pub mod identity;
pub mod logging;
pub mod role;
pub mod session;

pub use account::{PasswordReset, PasswordResetRequest, Registration};
pub use capability::{Capability, CapabilitySet};
pub use config::{BackendConfig, Config, GeneralConfig, LogFormat};
pub use error::{Error, Result};
pub use identity::{Credentials, Identity};
pub use role::Role;
pub use session::{SessionEvent, SessionStatus};

/// Path of the login screen. Every failed or cleared session ends up here.
pub const LOGIN_PATH: &str = "/auth/login";

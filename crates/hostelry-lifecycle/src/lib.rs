//! Lifecycle rules the room and maintenance screens apply before sending an
//! update to the backend.

pub mod maintenance;
pub mod room;

pub use maintenance::{open_requests, Assignment, MaintenanceRequest, MaintenanceStatus};
pub use room::{NewRoom, Occupant, Room, RoomAction, RoomStatus, RoomUpdate};

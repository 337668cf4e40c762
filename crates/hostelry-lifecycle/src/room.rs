use chrono::{DateTime, Utc};
use hostelry_common::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    Available,
    Occupied,
    #[serde(rename = "Under Maintenance")]
    UnderMaintenance,
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RoomStatus::Available => "Available",
            RoomStatus::Occupied => "Occupied",
            RoomStatus::UnderMaintenance => "Under Maintenance",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occupant {
    pub resident_id: Option<String>,
    pub resident_name: Option<String>,
}

impl Occupant {
    pub fn vacant() -> Self {
        Self::default()
    }

    pub fn is_vacant(&self) -> bool {
        self.resident_id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[serde(alias = "_id")]
    pub id: String,
    pub room_number: String,
    pub capacity: u32,
    pub status: RoomStatus,
    #[serde(default)]
    pub current_occupant: Occupant,
    #[serde(default)]
    pub check_in_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub check_out_time: Option<DateTime<Utc>>,
}

/// Payload for creating a room. New rooms always start `Available`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    pub room_number: String,
    pub capacity: u32,
    pub status: RoomStatus,
}

impl NewRoom {
    pub fn new(room_number: impl Into<String>, capacity: u32) -> Result<Self> {
        let room_number = room_number.into();
        if room_number.trim().is_empty() {
            return Err(Error::Validation("room number is required".to_string()));
        }
        if capacity == 0 {
            return Err(Error::Validation("capacity must be at least 1".to_string()));
        }
        Ok(Self {
            room_number,
            capacity,
            status: RoomStatus::Available,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomAction {
    CheckIn {
        resident_id: String,
        resident_name: String,
        at: DateTime<Utc>,
    },
    CheckOut {
        at: DateTime<Utc>,
    },
    /// Only valid while under maintenance: reopen or keep the room closed.
    SetStatus(RoomStatus),
}

impl RoomAction {
    fn name(&self) -> &'static str {
        match self {
            RoomAction::CheckIn { .. } => "check in",
            RoomAction::CheckOut { .. } => "check out",
            RoomAction::SetStatus(_) => "set status",
        }
    }
}

/// Body of the room update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomUpdate {
    pub status: RoomStatus,
    pub current_occupant: Occupant,
    pub check_in_time: Option<DateTime<Utc>>,
    pub check_out_time: Option<DateTime<Utc>>,
}

impl Room {
    /// Computes the update `action` produces from the current status.
    pub fn plan(&self, action: RoomAction) -> Result<RoomUpdate> {
        let update = match (self.status, &action) {
            (
                RoomStatus::Available,
                RoomAction::CheckIn {
                    resident_id,
                    resident_name,
                    at,
                },
            ) => {
                if resident_id.trim().is_empty() {
                    return Err(Error::Validation("a resident must be selected".to_string()));
                }
                RoomUpdate {
                    status: RoomStatus::Occupied,
                    current_occupant: Occupant {
                        resident_id: Some(resident_id.clone()),
                        resident_name: Some(resident_name.clone()),
                    },
                    check_in_time: Some(*at),
                    check_out_time: None,
                }
            }
            (RoomStatus::Occupied, RoomAction::CheckOut { at }) => {
                if self.check_in_time.is_some_and(|checked_in| *at < checked_in) {
                    return Err(Error::Validation("check-out precedes check-in".to_string()));
                }
                RoomUpdate {
                    status: RoomStatus::Available,
                    current_occupant: Occupant::vacant(),
                    check_in_time: self.check_in_time,
                    check_out_time: Some(*at),
                }
            }
            (
                RoomStatus::UnderMaintenance,
                RoomAction::SetStatus(next @ (RoomStatus::Available | RoomStatus::UnderMaintenance)),
            ) => RoomUpdate {
                status: *next,
                current_occupant: Occupant::vacant(),
                check_in_time: None,
                check_out_time: None,
            },
            (from, _) => {
                return Err(Error::InvalidTransition {
                    entity: "room",
                    from: from.to_string(),
                    action: action.name().to_string(),
                })
            }
        };
        tracing::debug!(room = %self.id, from = %self.status, to = %update.status, "room update planned");
        Ok(update)
    }

    /// Applies an update accepted by the backend.
    pub fn apply(&mut self, update: RoomUpdate) {
        self.status = update.status;
        self.current_occupant = update.current_occupant;
        self.check_in_time = update.check_in_time;
        self.check_out_time = update.check_out_time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 1, hour, 0, 0).unwrap()
    }

    fn room(status: RoomStatus) -> Room {
        Room {
            id: "r-101".to_string(),
            room_number: "101".to_string(),
            capacity: 2,
            status,
            current_occupant: Occupant::vacant(),
            check_in_time: None,
            check_out_time: None,
        }
    }

    fn check_in(hour: u32) -> RoomAction {
        RoomAction::CheckIn {
            resident_id: "res-7".to_string(),
            resident_name: "Kwame".to_string(),
            at: at(hour),
        }
    }

    #[test]
    fn check_in_then_check_out() {
        let mut room = room(RoomStatus::Available);
        let update = room.plan(check_in(9)).unwrap();
        assert_eq!(update.status, RoomStatus::Occupied);
        assert_eq!(update.current_occupant.resident_id.as_deref(), Some("res-7"));
        room.apply(update);

        let update = room.plan(RoomAction::CheckOut { at: at(17) }).unwrap();
        assert_eq!(update.status, RoomStatus::Available);
        assert!(update.current_occupant.is_vacant());
        assert_eq!(update.check_in_time, Some(at(9)));
        assert_eq!(update.check_out_time, Some(at(17)));
    }

    #[test]
    fn check_out_before_check_in_is_rejected() {
        let mut room = room(RoomStatus::Available);
        room.apply(room.plan(check_in(12)).unwrap());
        assert!(matches!(
            room.plan(RoomAction::CheckOut { at: at(8) }),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn check_in_requires_resident() {
        let action = RoomAction::CheckIn {
            resident_id: " ".to_string(),
            resident_name: String::new(),
            at: at(9),
        };
        assert!(matches!(room(RoomStatus::Available).plan(action), Err(Error::Validation(_))));
    }

    #[rstest]
    #[case(RoomStatus::Available)]
    #[case(RoomStatus::UnderMaintenance)]
    fn maintenance_outcome_clears_occupancy(#[case] next: RoomStatus) {
        let mut room = room(RoomStatus::UnderMaintenance);
        room.check_in_time = Some(at(1));
        let update = room.plan(RoomAction::SetStatus(next)).unwrap();
        assert_eq!(update.status, next);
        assert_eq!(update.check_in_time, None);
        assert!(update.current_occupant.is_vacant());
    }

    #[rstest]
    #[case(RoomStatus::Occupied, check_in(9))]
    #[case(RoomStatus::Available, RoomAction::CheckOut { at: at(9) })]
    #[case(RoomStatus::UnderMaintenance, check_in(9))]
    #[case(RoomStatus::Available, RoomAction::SetStatus(RoomStatus::Occupied))]
    #[case(RoomStatus::UnderMaintenance, RoomAction::SetStatus(RoomStatus::Occupied))]
    fn invalid_transitions(#[case] status: RoomStatus, #[case] action: RoomAction) {
        assert!(matches!(
            room(status).plan(action),
            Err(Error::InvalidTransition { entity: "room", .. })
        ));
    }

    #[test]
    fn new_room_validation() {
        let room = NewRoom::new("204", 3).unwrap();
        assert_eq!(room.status, RoomStatus::Available);
        assert!(NewRoom::new("204", 0).is_err());
        assert!(NewRoom::new("", 1).is_err());
    }

    #[test]
    fn update_wire_format() {
        let update = room(RoomStatus::UnderMaintenance)
            .plan(RoomAction::SetStatus(RoomStatus::Available))
            .unwrap();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["status"], "Available");
        assert!(json["currentOccupant"]["residentId"].is_null());
        assert!(json["checkOutTime"].is_null());
    }

    #[test]
    fn decodes_backend_room() {
        let json = r#"{
            "_id": "66aa",
            "roomNumber": "B-12",
            "capacity": 4,
            "status": "Under Maintenance"
        }"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.status, RoomStatus::UnderMaintenance);
        assert!(room.current_occupant.is_vacant());
    }
}

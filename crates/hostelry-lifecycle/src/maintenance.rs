use hostelry_common::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceStatus {
    Pending,
    Assigned,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl std::fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MaintenanceStatus::Pending => "Pending",
            MaintenanceStatus::Assigned => "Assigned",
            MaintenanceStatus::InProgress => "In Progress",
            MaintenanceStatus::Completed => "Completed",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub status: MaintenanceStatus,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

/// Body of the staff assignment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub assigned_staff: String,
    pub status: MaintenanceStatus,
}

impl MaintenanceRequest {
    pub fn is_open(&self) -> bool {
        self.status != MaintenanceStatus::Completed
    }

    /// Validates assigning `staff_id` with `status` (`Assigned` when `None`).
    pub fn plan_assignment(&self, staff_id: &str, status: Option<MaintenanceStatus>) -> Result<Assignment> {
        if !self.is_open() {
            return Err(Error::InvalidTransition {
                entity: "maintenance request",
                from: self.status.to_string(),
                action: "assign staff".to_string(),
            });
        }
        if staff_id.trim().is_empty() {
            return Err(Error::Validation("staff is required".to_string()));
        }

        let status = status.unwrap_or(MaintenanceStatus::Assigned);
        if status == MaintenanceStatus::Pending {
            return Err(Error::InvalidTransition {
                entity: "maintenance request",
                from: self.status.to_string(),
                action: "move back to Pending".to_string(),
            });
        }
        Ok(Assignment {
            assigned_staff: staff_id.to_string(),
            status,
        })
    }

    pub fn apply(&mut self, assignment: &Assignment) {
        self.assigned_to = Some(assignment.assigned_staff.clone());
        self.status = assignment.status;
    }
}

/// Requests that still need attention, in their original order.
pub fn open_requests(requests: &[MaintenanceRequest]) -> impl Iterator<Item = &MaintenanceRequest> {
    requests.iter().filter(|request| request.is_open())
}

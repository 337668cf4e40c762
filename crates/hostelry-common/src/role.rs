use crate::Error;
use serde::{Deserialize, Serialize};

/// Closed set of roles the backend assigns to accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Resident,
    Staff,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Resident, Role::Staff];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Resident => "Resident",
            Role::Staff => "Staff",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Admin" => Ok(Role::Admin),
            "Resident" => Ok(Role::Resident),
            "Staff" => Ok(Role::Staff),
            other => Err(Error::UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_round_trip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn role_parsing_is_case_sensitive() {
        assert!(matches!("admin".parse::<Role>(), Err(Error::UnknownRole(r)) if r == "admin"));
    }
}

//! Role value object — the purpose a prompt is routed under.
//!
//! Roles form a closed set; parsing anything outside it is an error so
//! misconfigured role names fail at the mapping boundary instead of
//! surfacing as a missing model later.

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The purpose a prompt is executed under, used to select a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Produces development plans from project descriptions.
    Planner,
    /// Writes code.
    Coder,
    /// Reviews code and plans.
    Reviewer,
}

impl Role {
    /// Get the string identifier for this role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Planner => "planner",
            Role::Coder => "coder",
            Role::Reviewer => "reviewer",
        }
    }

    /// All roles, in configuration order.
    pub fn all() -> [Role; 3] {
        [Role::Planner, Role::Coder, Role::Reviewer]
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planner" => Ok(Role::Planner),
            "coder" => Ok(Role::Coder),
            "reviewer" => Ok(Role::Reviewer),
            other => Err(DomainError::InvalidRole(other.to_string())),
        }
    }
}

impl Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        for role in Role::all() {
            let parsed: Role = role.as_str().parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result = "architect".parse::<Role>();
        assert!(matches!(result, Err(DomainError::InvalidRole(_))));
        assert!(result.unwrap_err().to_string().contains("architect"));
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Planner.to_string(), "planner");
        assert_eq!(Role::Coder.to_string(), "coder");
        assert_eq!(Role::Reviewer.to_string(), "reviewer");
    }

    #[test]
    fn test_role_serde() {
        let json = serde_json::to_string(&Role::Reviewer).unwrap();
        assert_eq!(json, "\"reviewer\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::Reviewer);
        assert!(serde_json::from_str::<Role>("\"architect\"").is_err());
    }
}

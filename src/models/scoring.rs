// src/models/scoring.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use std::fmt;
use std::str::FromStr;

/// Which kind of roster slot a point total is credited to
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Field,
    Goalkeeper,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Field, Role::Goalkeeper];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Field => "field",
            Role::Goalkeeper => "goalkeeper",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "field" => Ok(Role::Field),
            "goalkeeper" => Ok(Role::Goalkeeper),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Weight applied to one named statistic for one role
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct ScoringRule {
    pub id: Uuid,
    pub stat_name: String,
    pub points_per_unit: f64,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateScoringRuleRequest {
    pub stat_name: String,
    pub points_per_unit: f64,
    pub role: Role,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScoringRuleQuery {
    pub role: Option<Role>,
}

impl fmt::Display for ScoringRuleQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "role: {:?}", self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Goalkeeper).unwrap(), "\"goalkeeper\"");
        let role: Role = serde_json::from_str("\"field\"").unwrap();
        assert_eq!(role, Role::Field);
    }

    #[test]
    fn role_parses_storage_strings() {
        assert_eq!("GOALKEEPER".parse::<Role>(), Ok(Role::Goalkeeper));
        assert!("defender".parse::<Role>().is_err());
    }
}

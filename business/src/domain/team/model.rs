use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::TeamError;
use crate::domain::shared::contact::is_valid_email;
use crate::domain::shared::value_objects::BusinessId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamRole {
    Manager,
    #[default]
    Staff,
}

impl std::fmt::Display for TeamRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamRole::Manager => write!(f, "manager"),
            TeamRole::Staff => write!(f, "staff"),
        }
    }
}

impl std::str::FromStr for TeamRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manager" => Ok(TeamRole::Manager),
            "staff" => Ok(TeamRole::Staff),
            _ => Err(format!("Invalid team role: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    /// Invited, has not accepted yet.
    #[default]
    Pending,
    Active,
}

impl std::fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberStatus::Pending => write!(f, "pending"),
            MemberStatus::Active => write!(f, "active"),
        }
    }
}

impl std::str::FromStr for MemberStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(MemberStatus::Pending),
            "active" => Ok(MemberStatus::Active),
            _ => Err(format!("Invalid member status: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TeamMember {
    pub id: Uuid,
    pub business_id: BusinessId,
    pub name: String,
    pub email: String,
    pub role: TeamRole,
    pub status: MemberStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TeamMember {
    pub fn new(
        business_id: BusinessId,
        name: String,
        email: String,
        role: TeamRole,
    ) -> Result<Self, TeamError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(TeamError::NameEmpty);
        }

        let email = email.trim().to_lowercase();
        if !is_valid_email(&email) {
            return Err(TeamError::InvalidEmail);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            business_id,
            name,
            email,
            role,
            status: MemberStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        business_id: BusinessId,
        name: String,
        email: String,
        role: TeamRole,
        status: MemberStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            business_id,
            name,
            email,
            role,
            status,
            created_at,
            updated_at,
        }
    }
}

use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};

use business::domain::team::model::{TeamMember, TeamRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[oai(rename_all = "snake_case")]
pub enum TeamRoleDto {
    Manager,
    Staff,
}

impl From<TeamRoleDto> for TeamRole {
    fn from(role: TeamRoleDto) -> Self {
        match role {
            TeamRoleDto::Manager => TeamRole::Manager,
            TeamRoleDto::Staff => TeamRole::Staff,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddTeamMemberRequest {
    pub name: String,
    pub email: String,
    /// Defaults to staff
    #[oai(skip_serializing_if_is_none)]
    pub role: Option<TeamRoleDto>,
}

#[derive(Debug, Clone, Object)]
pub struct TeamMemberResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    /// pending until the invitation is accepted
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<TeamMember> for TeamMemberResponse {
    fn from(member: TeamMember) -> Self {
        Self {
            id: member.id.to_string(),
            name: member.name,
            email: member.email,
            role: member.role.to_string(),
            status: member.status.to_string(),
            created_at: member.created_at,
        }
    }
}

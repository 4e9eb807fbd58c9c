use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::shared::value_objects::BusinessId;
use business::domain::team::model::{MemberStatus, TeamMember, TeamRole};

#[derive(Debug, FromRow)]
pub struct TeamMemberEntity {
    pub id: Uuid,
    pub business_id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TeamMemberEntity {
    pub fn into_domain(self) -> TeamMember {
        TeamMember::from_repository(
            self.id,
            BusinessId::new(self.business_id),
            self.name,
            self.email,
            self.role.parse::<TeamRole>().unwrap_or_default(),
            self.status.parse::<MemberStatus>().unwrap_or_default(),
            self.created_at,
            self.updated_at,
        )
    }
}

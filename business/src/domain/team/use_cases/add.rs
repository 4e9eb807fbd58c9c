use async_trait::async_trait;

use crate::domain::shared::value_objects::BusinessId;
use crate::domain::team::errors::TeamError;
use crate::domain::team::model::{TeamMember, TeamRole};

pub struct AddTeamMemberParams {
    pub business_id: BusinessId,
    pub name: String,
    pub email: String,
    pub role: Option<TeamRole>,
}

#[async_trait]
pub trait AddTeamMemberUseCase: Send + Sync {
    async fn execute(&self, params: AddTeamMemberParams) -> Result<TeamMember, TeamError>;
}

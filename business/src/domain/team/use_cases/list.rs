use async_trait::async_trait;

use crate::domain::shared::value_objects::BusinessId;
use crate::domain::team::errors::TeamError;
use crate::domain::team::model::TeamMember;

pub struct ListTeamMembersParams {
    pub business_id: BusinessId,
}

#[async_trait]
pub trait ListTeamMembersUseCase: Send + Sync {
    async fn execute(&self, params: ListTeamMembersParams) -> Result<Vec<TeamMember>, TeamError>;
}

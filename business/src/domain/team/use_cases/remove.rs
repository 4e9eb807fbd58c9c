use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::BusinessId;
use crate::domain::team::errors::TeamError;

pub struct RemoveTeamMemberParams {
    pub id: Uuid,
    pub business_id: BusinessId,
}

#[async_trait]
pub trait RemoveTeamMemberUseCase: Send + Sync {
    async fn execute(&self, params: RemoveTeamMemberParams) -> Result<(), TeamError>;
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::BusinessId;

use super::model::TeamMember;

#[async_trait]
pub trait TeamMemberRepository: Send + Sync {
    /// Members of one business, oldest first.
    async fn list_by_business(
        &self,
        business_id: &BusinessId,
    ) -> Result<Vec<TeamMember>, RepositoryError>;
    async fn get_by_id(
        &self,
        id: Uuid,
        business_id: &BusinessId,
    ) -> Result<TeamMember, RepositoryError>;
    async fn find_by_email(
        &self,
        email: &str,
        business_id: &BusinessId,
    ) -> Result<Option<TeamMember>, RepositoryError>;
    async fn save(&self, member: &TeamMember) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid, business_id: &BusinessId) -> Result<(), RepositoryError>;
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::team::errors::TeamError;
use crate::domain::team::model::TeamMember;
use crate::domain::team::repository::TeamMemberRepository;
use crate::domain::team::use_cases::list::{ListTeamMembersParams, ListTeamMembersUseCase};

pub struct ListTeamMembersUseCaseImpl {
    pub repository: Arc<dyn TeamMemberRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListTeamMembersUseCase for ListTeamMembersUseCaseImpl {
    async fn execute(&self, params: ListTeamMembersParams) -> Result<Vec<TeamMember>, TeamError> {
        self.logger.debug(&format!(
            "Listing team members for business {}",
            params.business_id
        ));

        let members = self
            .repository
            .list_by_business(&params.business_id)
            .await?;
        Ok(members)
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::team::errors::TeamError;
use crate::domain::team::model::TeamMember;
use crate::domain::team::repository::TeamMemberRepository;
use crate::domain::team::use_cases::add::{AddTeamMemberParams, AddTeamMemberUseCase};

pub struct AddTeamMemberUseCaseImpl {
    pub repository: Arc<dyn TeamMemberRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddTeamMemberUseCase for AddTeamMemberUseCaseImpl {
    async fn execute(&self, params: AddTeamMemberParams) -> Result<TeamMember, TeamError> {
        let member = TeamMember::new(
            params.business_id,
            params.name,
            params.email,
            params.role.unwrap_or_default(),
        )?;

        if self
            .repository
            .find_by_email(&member.email, &member.business_id)
            .await?
            .is_some()
        {
            return Err(TeamError::AlreadyExists);
        }

        self.repository
            .save(&member)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => TeamError::AlreadyExists,
                other => TeamError::Repository(other),
            })?;

        self.logger.info(&format!(
            "Team member {} invited to business {} as {}",
            member.id, member.business_id, member.role
        ));
        Ok(member)
    }
}

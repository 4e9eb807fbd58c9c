use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::team::errors::TeamError;
use crate::domain::team::repository::TeamMemberRepository;
use crate::domain::team::use_cases::remove::{RemoveTeamMemberParams, RemoveTeamMemberUseCase};

pub struct RemoveTeamMemberUseCaseImpl {
    pub repository: Arc<dyn TeamMemberRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveTeamMemberUseCase for RemoveTeamMemberUseCaseImpl {
    async fn execute(&self, params: RemoveTeamMemberParams) -> Result<(), TeamError> {
        self.logger
            .info(&format!("Removing team member: {}", params.id));

        // Verify member belongs to this business
        self.repository
            .get_by_id(params.id, &params.business_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => TeamError::NotFound,
                other => TeamError::Repository(other),
            })?;

        self.repository
            .delete(params.id, &params.business_id)
            .await?;

        self.logger
            .info(&format!("Team member removed: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::model::{TeamMember, TeamRole};
    use crate::test_support::{MockTeamRepo, business_id, mock_logger};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_remove_member_of_business() {
        let member = TeamMember::new(
            business_id(),
            "Chidi".to_string(),
            "chidi@example.com".to_string(),
            TeamRole::Manager,
        )
        .unwrap();
        let id = member.id;
        let mut mock_repo = MockTeamRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_, _| Ok(member.clone()));
        mock_repo.expect_delete().times(1).returning(|_, _| Ok(()));

        let use_case = RemoveTeamMemberUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveTeamMemberParams {
                id,
                business_id: business_id(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_member_missing() {
        let mut mock_repo = MockTeamRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_, _| Err(RepositoryError::NotFound));
        mock_repo.expect_delete().never();

        let use_case = RemoveTeamMemberUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveTeamMemberParams {
                id: Uuid::new_v4(),
                business_id: business_id(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), TeamError::NotFound));
    }
}

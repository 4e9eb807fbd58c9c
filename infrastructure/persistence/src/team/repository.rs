use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::BusinessId;
use business::domain::team::model::TeamMember;
use business::domain::team::repository::TeamMemberRepository;

use super::entity::TeamMemberEntity;
use crate::errors::{map_read_error, map_write_error};

pub struct TeamMemberRepositoryPostgres {
    pool: PgPool,
}

impl TeamMemberRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamMemberRepository for TeamMemberRepositoryPostgres {
    async fn list_by_business(
        &self,
        business_id: &BusinessId,
    ) -> Result<Vec<TeamMember>, RepositoryError> {
        let entities = sqlx::query_as::<_, TeamMemberEntity>(
            "SELECT id, business_id, name, email, role, status, created_at, updated_at FROM team_members WHERE business_id = $1 ORDER BY created_at ASC",
        )
        .bind(business_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(
        &self,
        id: Uuid,
        business_id: &BusinessId,
    ) -> Result<TeamMember, RepositoryError> {
        let entity = sqlx::query_as::<_, TeamMemberEntity>(
            "SELECT id, business_id, name, email, role, status, created_at, updated_at FROM team_members WHERE id = $1 AND business_id = $2",
        )
        .bind(id)
        .bind(business_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_by_email(
        &self,
        email: &str,
        business_id: &BusinessId,
    ) -> Result<Option<TeamMember>, RepositoryError> {
        let entity = sqlx::query_as::<_, TeamMemberEntity>(
            "SELECT id, business_id, name, email, role, status, created_at, updated_at FROM team_members WHERE email = $1 AND business_id = $2",
        )
        .bind(email)
        .bind(business_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, member: &TeamMember) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO team_members (id, business_id, name, email, role, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                role = EXCLUDED.role,
                status = EXCLUDED.status,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(member.id)
        .bind(member.business_id.as_str())
        .bind(&member.name)
        .bind(&member.email)
        .bind(member.role.to_string())
        .bind(member.status.to_string())
        .bind(member.created_at)
        .bind(member.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid, business_id: &BusinessId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM team_members WHERE id = $1 AND business_id = $2")
            .bind(id)
            .bind(business_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(())
    }
}

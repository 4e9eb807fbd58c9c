use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::shared::value_objects::BusinessId;
use business::domain::team::use_cases::add::{AddTeamMemberParams, AddTeamMemberUseCase};
use business::domain::team::use_cases::list::{ListTeamMembersParams, ListTeamMembersUseCase};
use business::domain::team::use_cases::remove::{RemoveTeamMemberParams, RemoveTeamMemberUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::SupabaseBearer;
use crate::api::tags::ApiTags;
use crate::api::team::dto::{AddTeamMemberRequest, TeamMemberResponse};

pub struct TeamApi {
    list_use_case: Arc<dyn ListTeamMembersUseCase>,
    add_use_case: Arc<dyn AddTeamMemberUseCase>,
    remove_use_case: Arc<dyn RemoveTeamMemberUseCase>,
}

impl TeamApi {
    pub fn new(
        list_use_case: Arc<dyn ListTeamMembersUseCase>,
        add_use_case: Arc<dyn AddTeamMemberUseCase>,
        remove_use_case: Arc<dyn RemoveTeamMemberUseCase>,
    ) -> Self {
        Self {
            list_use_case,
            add_use_case,
            remove_use_case,
        }
    }
}

/// Team API
///
/// Owner endpoints for the people invited to help run the store.
#[OpenApi]
impl TeamApi {
    /// List team members, oldest first
    #[oai(path = "/team-members", method = "get", tag = "ApiTags::Team")]
    async fn list(&self, auth: SupabaseBearer) -> ListTeamMembersResponse {
        let params = ListTeamMembersParams {
            business_id: BusinessId::new(auth.0),
        };

        match self.list_use_case.execute(params).await {
            Ok(members) => {
                let responses: Vec<TeamMemberResponse> =
                    members.into_iter().map(Into::into).collect();
                ListTeamMembersResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                ListTeamMembersResponse::InternalError(json)
            }
        }
    }

    /// Invite a team member
    #[oai(path = "/team-members", method = "post", tag = "ApiTags::Team")]
    async fn add(
        &self,
        auth: SupabaseBearer,
        body: Json<AddTeamMemberRequest>,
    ) -> AddTeamMemberResponse {
        let params = AddTeamMemberParams {
            business_id: BusinessId::new(auth.0),
            name: body.0.name,
            email: body.0.email,
            role: body.0.role.map(Into::into),
        };

        match self.add_use_case.execute(params).await {
            Ok(member) => AddTeamMemberResponse::Created(Json(member.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddTeamMemberResponse::BadRequest(json),
                    409 => AddTeamMemberResponse::Conflict(json),
                    _ => AddTeamMemberResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a team member
    #[oai(path = "/team-members/:id", method = "delete", tag = "ApiTags::Team")]
    async fn remove(&self, auth: SupabaseBearer, id: Path<String>) -> RemoveTeamMemberResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return RemoveTeamMemberResponse::BadRequest(ErrorResponse::validation(
                    "team.invalid_id",
                ));
            }
        };

        let params = RemoveTeamMemberParams {
            id: uuid,
            business_id: BusinessId::new(auth.0),
        };

        match self.remove_use_case.execute(params).await {
            Ok(()) => RemoveTeamMemberResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveTeamMemberResponse::NotFound(json),
                    _ => RemoveTeamMemberResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListTeamMembersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<TeamMemberResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddTeamMemberResponse {
    #[oai(status = 201)]
    Created(Json<TeamMemberResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveTeamMemberResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

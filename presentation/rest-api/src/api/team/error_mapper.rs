use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::team::errors::TeamError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for TeamError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            TeamError::NameEmpty | TeamError::InvalidEmail => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", self.to_string())
            }
            TeamError::AlreadyExists => {
                error_response(StatusCode::CONFLICT, "Conflict", self.to_string())
            }
            TeamError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFoundError", self.to_string())
            }
            TeamError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}

use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            OrderError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFoundError", self.to_string())
            }
            OrderError::SubscriptionFailed => error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "ServiceUnavailable",
                self.to_string(),
            ),
            OrderError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}

use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::checkout::errors::CheckoutError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CheckoutError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            CheckoutError::Validation { .. } => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", self.to_string())
            }
            CheckoutError::CartNotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFoundError", self.to_string())
            }
            CheckoutError::AlreadySubmitting => {
                error_response(StatusCode::CONFLICT, "Conflict", self.to_string())
            }
            CheckoutError::SubmissionFailed => {
                error_response(StatusCode::BAD_GATEWAY, "SubmissionError", self.to_string())
            }
            CheckoutError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}

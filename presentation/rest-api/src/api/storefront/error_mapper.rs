use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::storefront::errors::StorefrontError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for StorefrontError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            StorefrontError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFoundError", self.to_string())
            }
            StorefrontError::InvalidColor(field) => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                format!("{}.{}", self, field),
            ),
            StorefrontError::InvalidLogoUrl
            | StorefrontError::InvalidCurrency
            | StorefrontError::InvalidPublicName => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", self.to_string())
            }
            StorefrontError::PublicNameTaken => {
                error_response(StatusCode::CONFLICT, "Conflict", self.to_string())
            }
            StorefrontError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}

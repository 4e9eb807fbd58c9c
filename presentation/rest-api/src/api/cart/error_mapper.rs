use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            CartError::NotFound | CartError::StoreNotFound | CartError::ItemNotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFoundError", self.to_string())
            }
            CartError::CheckoutInProgress => {
                error_response(StatusCode::CONFLICT, "Conflict", self.to_string())
            }
            CartError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}

use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::menu::errors::MenuError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for MenuError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            MenuError::NameEmpty | MenuError::NegativePrice | MenuError::PricePrecision => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", self.to_string())
            }
            MenuError::DuplicateItemId(id) => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                format!("{}: {}", self, id),
            ),
            MenuError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_name_duplicated_id_in_message() {
        let (status, json) = MenuError::DuplicateItemId("rice".to_string()).into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "menu.duplicate_item_id: rice");
    }

    #[test]
    fn should_hide_repository_detail() {
        let (status, json) =
            MenuError::Repository(RepositoryError::database("connection reset")).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "repository.persistence");
    }

    #[test]
    fn should_map_sub_cent_price_to_validation_error() {
        let (status, json) = MenuError::PricePrecision.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "menu.price_precision");
    }
}

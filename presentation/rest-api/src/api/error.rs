use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn json(name: &str, message: impl Into<String>) -> Json<Self> {
        Json(Self {
            name: name.to_string(),
            message: message.into(),
        })
    }

    /// 400 body for input rejected before reaching a use case.
    pub fn validation(message: impl Into<String>) -> Json<Self> {
        Self::json("ValidationError", message)
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

pub(crate) fn error_response(
    status: StatusCode,
    name: &str,
    message: impl Into<String>,
) -> (StatusCode, Json<ErrorResponse>) {
    (status, ErrorResponse::json(name, message))
}

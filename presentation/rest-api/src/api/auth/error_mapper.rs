use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::UserError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            UserError::MissingCredentials => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "user.missing_credentials",
            ),
            UserError::DuplicateUsername => {
                (StatusCode::BAD_REQUEST, "DuplicateUser", "user.duplicated")
            }
            UserError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "InvalidCredentials",
                "user.invalid_credentials",
            ),
            UserError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "user.not_found"),
            UserError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.database_error",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}

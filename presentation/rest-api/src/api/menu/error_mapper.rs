use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::menu::errors::MenuError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for MenuError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            MenuError::ExportUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ExportError",
                "menu.export_unavailable",
            ),
            MenuError::Repository(_) => (
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

use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            OrderError::EmptyOrder => (StatusCode::BAD_REQUEST, "ValidationError", "order.empty"),
            OrderError::QuantityMismatch => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.quantity_mismatch",
            ),
            OrderError::NoBills => (StatusCode::NOT_FOUND, "NotFound", "order.no_bills"),
            OrderError::Billing(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "BillingFailure",
                "order.billing_failed",
            ),
            OrderError::Repository(_) => (
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

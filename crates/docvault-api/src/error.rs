//! Maps domain `AppError` to HTTP responses on the wire contract.
//!
//! Plain failures are `{"msg": "..."}`; validation failures with
//! field-level detail are `{"errors": [{"field", "message"}]}`. Duplicate
//! identity and duplicate connection requests surface as 400 on this wire,
//! not 409.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;

use docvault_core::error::{AppError, ErrorKind};

/// Newtype carrying `AppError` across the axum boundary.
///
/// Handlers return `Result<_, ApiError>`; `?` on any service call converts
/// through `From<AppError>`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

#[derive(Debug, Serialize)]
struct FieldErrorBody {
    field: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = match err.kind {
            ErrorKind::Validation | ErrorKind::Conflict => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Database
            | ErrorKind::Storage
            | ErrorKind::Configuration
            | ErrorKind::Internal => {
                tracing::error!(error = %err, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Internal detail stays in the log; the body carries a fixed message.
        let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
            json!({ "msg": "Server Error" })
        } else if err.kind == ErrorKind::Validation && !err.fields.is_empty() {
            let errors: Vec<FieldErrorBody> = err
                .fields
                .into_iter()
                .map(|f| FieldErrorBody {
                    field: f.field,
                    message: f.message,
                })
                .collect();
            json!({ "errors": errors })
        } else {
            json!({ "msg": err.message })
        };

        (status, Json(body)).into_response()
    }
}

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use finapi_core::DomainError;

/// Translate a domain failure into the client-facing response.
///
/// Every domain error is a client error (400); the `error` code tells them apart.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound => {
            json_error(StatusCode::BAD_REQUEST, "not_found", "Customer not found!")
        }
        DomainError::Conflict(_) => json_error(
            StatusCode::BAD_REQUEST,
            "conflict",
            "Customer already exists!",
        ),
        DomainError::InsufficientFunds { .. } => json_error(
            StatusCode::BAD_REQUEST,
            "insufficient_funds",
            "Insufficient funds!",
        ),
        DomainError::Validation(msg) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
    }
}

/// Answer a body that failed to deserialize.
///
/// Well-formed JSON with invalid values (e.g. a negative `Amount`) is a
/// validation error; anything else keeps axum's status.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    match rejection {
        JsonRejection::JsonDataError(e) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", e.body_text())
        }
        other => json_error(other.status(), "invalid_body", other.body_text()),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

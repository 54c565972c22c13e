use axum::{extract::Query, http::StatusCode, response::IntoResponse, Json};
use chrono::NaiveDate;

use crate::app::{dto, errors};
use crate::guard::GuardedCustomer;

pub async fn get_statement(GuardedCustomer(customer): GuardedCustomer) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "Success",
            "statement": customer.statement(),
        })),
    )
        .into_response()
}

/// Operations of the caller created on `?date=YYYY-MM-DD` (UTC day).
pub async fn get_statement_by_date(
    GuardedCustomer(customer): GuardedCustomer,
    Query(query): Query<dto::StatementDateQuery>,
) -> axum::response::Response {
    let Some(raw) = query.date else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "date query parameter is required (YYYY-MM-DD)",
        );
    };

    let date = match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_date",
                format!("date must be formatted as YYYY-MM-DD (got {raw:?})"),
            );
        }
    };

    (StatusCode::OK, Json(customer.statement().on_date(date))).into_response()
}

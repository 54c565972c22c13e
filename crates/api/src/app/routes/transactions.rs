use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use finapi_accounts::CustomerRegistry;

use crate::app::{dto, errors};
use crate::guard::GuardedCustomer;

pub async fn deposit(
    Extension(registry): Extension<Arc<CustomerRegistry>>,
    guarded: GuardedCustomer,
    body: Result<Json<dto::DepositRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(v) => v,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    let deposited = registry.deposit(
        guarded.identifier(),
        body.amount,
        body.description,
        Utc::now(),
    );
    let op = match deposited {
        Ok(op) => op,
        Err(e) => {
            tracing::warn!(
                identifier = %guarded.identifier(),
                error = %e,
                "deposit rejected"
            );
            return errors::domain_error_to_response(e);
        }
    };

    tracing::info!(
        identifier = %guarded.identifier(),
        amount = %op.amount,
        "deposit recorded"
    );

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": format!("Deposit of {} completed successfully!", op.amount),
        })),
    )
        .into_response()
}

pub async fn withdraw(
    Extension(registry): Extension<Arc<CustomerRegistry>>,
    guarded: GuardedCustomer,
    body: Result<Json<dto::WithdrawRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(v) => v,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    match registry.withdraw(guarded.identifier(), body.amount, Utc::now()) {
        Ok(op) => {
            tracing::info!(
                identifier = %guarded.identifier(),
                amount = %op.amount,
                "withdrawal recorded"
            );
            (
                StatusCode::CREATED,
                Json(serde_json::json!({ "message": "Withdrawal completed successfully!" })),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(
                identifier = %guarded.identifier(),
                error = %e,
                "withdrawal rejected"
            );
            errors::domain_error_to_response(e)
        }
    }
}

pub async fn get_balance(GuardedCustomer(customer): GuardedCustomer) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "This is your balance!",
            "balance": customer.balance(),
        })),
    )
        .into_response()
}

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use finapi_accounts::CustomerRegistry;
use finapi_core::AccountIdentifier;

use crate::app::{dto, errors};
use crate::guard::GuardedCustomer;

pub async fn create_account(
    Extension(registry): Extension<Arc<CustomerRegistry>>,
    body: Result<Json<dto::CreateAccountRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(v) => v,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    let identifier = match AccountIdentifier::parse(&body.identifier) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let customer = match registry.register(identifier, body.name) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!(error = %e, "account registration rejected");
            return errors::domain_error_to_response(e);
        }
    };

    tracing::info!(
        identifier = %customer.identifier(),
        customer_id = %customer.id_typed(),
        "customer registered"
    );

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Customer created!",
            "id": customer.id_typed().to_string(),
        })),
    )
        .into_response()
}

pub async fn get_account(GuardedCustomer(customer): GuardedCustomer) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "Success",
            "customer": customer,
        })),
    )
        .into_response()
}

pub async fn update_account(
    Extension(registry): Extension<Arc<CustomerRegistry>>,
    guarded: GuardedCustomer,
    body: Result<Json<dto::UpdateAccountRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(v) => v,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    if let Err(e) = registry.rename(guarded.identifier(), body.name) {
        return errors::domain_error_to_response(e);
    }

    tracing::info!(identifier = %guarded.identifier(), "customer renamed");
    (StatusCode::OK, Json(serde_json::json!({ "message": "Account updated!" }))).into_response()
}

pub async fn delete_account(
    Extension(registry): Extension<Arc<CustomerRegistry>>,
    guarded: GuardedCustomer,
) -> axum::response::Response {
    let remaining = match registry.delete(guarded.identifier()) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    tracing::info!(
        identifier = %guarded.identifier(),
        remaining = remaining.len(),
        "customer deleted"
    );

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "Account deleted!",
            "customers": remaining,
        })),
    )
        .into_response()
}

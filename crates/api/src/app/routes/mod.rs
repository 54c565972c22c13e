use axum::{
    routing::{get, post},
    Router,
};

pub mod account;
pub mod statement;
pub mod system;
pub mod transactions;

/// Router for every customer-scoped endpoint.
///
/// Everything except `POST /account` resolves the caller through the access
/// guard before touching state.
pub fn router() -> Router {
    Router::new()
        .route(
            "/account",
            post(account::create_account)
                .get(account::get_account)
                .patch(account::update_account)
                .delete(account::delete_account),
        )
        .route("/statement", get(statement::get_statement))
        .route("/statement/date", get(statement::get_statement_by_date))
        .route("/deposit", post(transactions::deposit))
        .route("/withdraw", post(transactions::withdraw))
        .route("/balance", get(transactions::get_balance))
}

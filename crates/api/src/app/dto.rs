use serde::Deserialize;

use finapi_accounts::Amount;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    #[serde(alias = "cpf")]
    pub identifier: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    pub amount: Amount,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    pub amount: Amount,
}

#[derive(Debug, Deserialize)]
pub struct StatementDateQuery {
    /// Calendar day, `YYYY-MM-DD`.
    pub date: Option<String>,
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use finapi_core::{DomainError, DomainResult, ValueObject};

use crate::balance::balance;
use crate::money::Amount;

/// Direction of a statement operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Credit,
    Debit,
}

/// One statement entry (immutable once appended).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operation {
    pub amount: Amount,
    /// Free text attached to deposits; debits never carry one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: OperationKind,
}

impl ValueObject for Operation {}

/// Append-only, creation-ordered list of a customer's operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Statement {
    operations: Vec<Operation>,
}

impl Statement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Current signed total of the statement.
    pub fn balance(&self) -> rust_decimal::Decimal {
        balance(&self.operations)
    }

    /// Record a credit.
    ///
    /// Rejected only when the resulting balance would not be representable;
    /// every accepted statement therefore folds without overflow.
    pub fn append_credit(
        &mut self,
        amount: Amount,
        description: Option<String>,
        at: DateTime<Utc>,
    ) -> DomainResult<Operation> {
        self.balance()
            .checked_add(amount.value())
            .ok_or_else(|| DomainError::validation("balance overflow"))?;

        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(self.push(Operation {
            amount,
            description,
            created_at: at,
            kind: OperationKind::Credit,
        }))
    }

    /// Record a debit if the current balance covers it.
    ///
    /// On `InsufficientFunds` the statement is left untouched.
    pub fn append_debit(&mut self, amount: Amount, at: DateTime<Utc>) -> DomainResult<Operation> {
        let available = self.balance();
        if amount.value() > available {
            return Err(DomainError::insufficient_funds(amount.value(), available));
        }

        Ok(self.push(Operation {
            amount,
            description: None,
            created_at: at,
            kind: OperationKind::Debit,
        }))
    }

    /// Operations created on `date` (UTC calendar day), in statement order.
    pub fn on_date(&self, date: NaiveDate) -> Vec<Operation> {
        self.operations
            .iter()
            .filter(|op| op.created_at.date_naive() == date)
            .cloned()
            .collect()
    }

    fn push(&mut self, op: Operation) -> Operation {
        self.operations.push(op.clone());
        op
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;

use finapi_core::{AccountIdentifier, CustomerId, DomainError, DomainResult, Entity};

use crate::money::Amount;
use crate::statement::{Operation, Statement};

/// A registered account holder and its statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    id: CustomerId,
    identifier: AccountIdentifier,
    name: String,
    statement: Statement,
}

impl Customer {
    /// Open an account with an empty statement and a freshly generated id.
    pub fn open(identifier: AccountIdentifier, name: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            id: CustomerId::new(),
            identifier,
            name: validate_name(name.into())?,
            statement: Statement::new(),
        })
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn identifier(&self) -> &AccountIdentifier {
        &self.identifier
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    pub fn balance(&self) -> rust_decimal::Decimal {
        self.statement.balance()
    }

    /// Replace the display name. Renaming to the current name is a no-op.
    pub fn rename(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.name = validate_name(name.into())?;
        Ok(())
    }

    pub fn deposit(
        &mut self,
        amount: Amount,
        description: Option<String>,
        at: DateTime<Utc>,
    ) -> DomainResult<Operation> {
        self.statement.append_credit(amount, description, at)
    }

    pub fn withdraw(&mut self, amount: Amount, at: DateTime<Utc>) -> DomainResult<Operation> {
        self.statement.append_debit(amount, at)
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn validate_name(name: String) -> DomainResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("customer name must not be empty"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn identifier() -> AccountIdentifier {
        AccountIdentifier::parse("111").unwrap()
    }

    #[test]
    fn open_starts_with_empty_statement() {
        let customer = Customer::open(identifier(), "Ana").unwrap();
        assert_eq!(customer.name(), "Ana");
        assert!(customer.statement().is_empty());
        assert_eq!(customer.balance(), Decimal::ZERO);
        assert_eq!(customer.id(), &customer.id_typed());
    }

    #[test]
    fn open_rejects_empty_name() {
        let err = Customer::open(identifier(), "   ").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rename_is_idempotent_and_keeps_identity() {
        let mut customer = Customer::open(identifier(), "Ana").unwrap();
        let id = customer.id_typed();

        customer.rename("Ana Maria").unwrap();
        customer.rename("Ana Maria").unwrap();

        assert_eq!(customer.name(), "Ana Maria");
        assert_eq!(customer.id_typed(), id);
        assert_eq!(customer.identifier(), &identifier());
    }

    #[test]
    fn rename_to_blank_keeps_old_name() {
        let mut customer = Customer::open(identifier(), "Ana").unwrap();
        assert!(customer.rename("").is_err());
        assert_eq!(customer.name(), "Ana");
    }

    #[test]
    fn serializes_with_statement() {
        let mut customer = Customer::open(identifier(), "Ana").unwrap();
        customer.deposit(
            Amount::new(Decimal::new(100, 0)).unwrap(),
            Some("salary".to_string()),
            Utc::now(),
        )
        .unwrap();

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["identifier"], "111");
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["id"], customer.id_typed().to_string());
        assert_eq!(json["statement"].as_array().unwrap().len(), 1);
        assert_eq!(json["statement"][0]["type"], "credit");
    }
}

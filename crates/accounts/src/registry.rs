use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use finapi_core::{AccountIdentifier, DomainError, DomainResult};

use crate::customer::Customer;
use crate::money::Amount;
use crate::statement::Operation;

/// In-memory owner of every customer record, keyed by external identifier.
///
/// Reads hand out cloned snapshots. Every mutation (including the
/// duplicate check of `register` and the balance check of `withdraw`) runs
/// under a single write lock, so there is one logical writer at a time.
#[derive(Debug, Default)]
pub struct CustomerRegistry {
    inner: RwLock<HashMap<AccountIdentifier, Customer>>,
}

impl CustomerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new customer. Fails with `Conflict` if the identifier is taken.
    pub fn register(
        &self,
        identifier: AccountIdentifier,
        name: impl Into<String>,
    ) -> DomainResult<Customer> {
        let mut map = self.write();
        if map.contains_key(&identifier) {
            return Err(DomainError::conflict(format!(
                "identifier {identifier} already registered"
            )));
        }

        let customer = Customer::open(identifier.clone(), name)?;
        map.insert(identifier, customer.clone());
        Ok(customer)
    }

    pub fn get(&self, identifier: &AccountIdentifier) -> DomainResult<Customer> {
        self.read()
            .get(identifier)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    pub fn contains(&self, identifier: &AccountIdentifier) -> bool {
        self.read().contains_key(identifier)
    }

    /// All customers, in registration order.
    pub fn list(&self) -> Vec<Customer> {
        sorted(&self.read())
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn rename(
        &self,
        identifier: &AccountIdentifier,
        name: impl Into<String>,
    ) -> DomainResult<Customer> {
        self.update(identifier, |customer| {
            customer.rename(name)?;
            Ok(customer.clone())
        })
    }

    /// Remove the customer registered under `identifier` and return the
    /// customers that remain.
    pub fn delete(&self, identifier: &AccountIdentifier) -> DomainResult<Vec<Customer>> {
        let mut map = self.write();
        map.remove(identifier).ok_or(DomainError::NotFound)?;
        Ok(sorted(&map))
    }

    pub fn deposit(
        &self,
        identifier: &AccountIdentifier,
        amount: Amount,
        description: Option<String>,
        at: DateTime<Utc>,
    ) -> DomainResult<Operation> {
        self.update(identifier, |customer| customer.deposit(amount, description, at))
    }

    pub fn withdraw(
        &self,
        identifier: &AccountIdentifier,
        amount: Amount,
        at: DateTime<Utc>,
    ) -> DomainResult<Operation> {
        self.update(identifier, |customer| customer.withdraw(amount, at))
    }

    fn update<T>(
        &self,
        identifier: &AccountIdentifier,
        f: impl FnOnce(&mut Customer) -> DomainResult<T>,
    ) -> DomainResult<T> {
        let mut map = self.write();
        let customer = map.get_mut(identifier).ok_or(DomainError::NotFound)?;
        f(customer)
    }

    // Mutations never leave the map half-updated, so a poisoned lock still
    // guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<AccountIdentifier, Customer>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<AccountIdentifier, Customer>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn sorted(map: &HashMap<AccountIdentifier, Customer>) -> Vec<Customer> {
    let mut customers: Vec<Customer> = map.values().cloned().collect();
    customers.sort_by_key(Customer::id_typed);
    customers
}

//! Accounts domain module (customers, statements, balances).
//!
//! This crate contains business rules for customer accounts, implemented as
//! deterministic domain logic (no IO, no HTTP). The only shared state is the
//! in-memory [`CustomerRegistry`], which owns every customer record.

pub mod balance;
pub mod customer;
pub mod money;
pub mod registry;
pub mod statement;

pub use balance::balance;
pub use customer::Customer;
pub use money::Amount;
pub use registry::CustomerRegistry;
pub use statement::{Operation, OperationKind, Statement};

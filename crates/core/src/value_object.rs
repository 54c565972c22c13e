//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**: they are defined entirely by their
//! attribute values. Two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (an `Amount` of 10 equals any other `Amount` of 10)
/// - **Entity**: has identity (two customers with the same name are still different customers)
///
/// Statement operations are value objects too: once appended they never change,
/// and an operation is described completely by its amount, kind, description and
/// timestamp.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Amount(Decimal);
///
/// impl ValueObject for Amount {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

//! Access guard: resolves the caller's identifier header to a customer.
//!
//! Handlers that take a [`GuardedCustomer`] never run for unknown identifiers;
//! the request is answered with 400 "Customer not found!" and nothing is
//! mutated.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{HeaderMap, StatusCode, request::Parts},
    response::Response,
};

use finapi_accounts::{Customer, CustomerRegistry};
use finapi_core::{AccountIdentifier, DomainError, DomainResult};

use crate::app::errors;

/// Header carrying the caller's account identifier.
pub const IDENTIFIER_HEADER: &str = "identifier";

/// Older header name, still accepted when `identifier` is absent.
pub const LEGACY_IDENTIFIER_HEADER: &str = "cpf";

/// Customer resolved from the request, as of the moment the guard ran.
#[derive(Debug, Clone)]
pub struct GuardedCustomer(pub Customer);

impl GuardedCustomer {
    pub fn identifier(&self) -> &AccountIdentifier {
        self.0.identifier()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for GuardedCustomer
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let registry = parts
            .extensions
            .get::<Arc<CustomerRegistry>>()
            .cloned()
            .ok_or_else(|| {
                tracing::error!("customer registry extension missing from router");
                errors::json_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "customer registry unavailable",
                )
            })?;

        resolve(&registry, &parts.headers)
            .map(GuardedCustomer)
            .map_err(errors::domain_error_to_response)
    }
}

/// Look up the customer named by the request headers.
pub fn resolve(registry: &CustomerRegistry, headers: &HeaderMap) -> DomainResult<Customer> {
    let identifier = extract_identifier(headers).inspect_err(|_| {
        tracing::debug!("access guard: missing or blank identifier header");
    })?;

    registry.get(&identifier).inspect_err(|_| {
        tracing::debug!(identifier = %identifier, "access guard: unknown identifier");
    })
}

fn extract_identifier(headers: &HeaderMap) -> DomainResult<AccountIdentifier> {
    let header = headers
        .get(IDENTIFIER_HEADER)
        .or_else(|| headers.get(LEGACY_IDENTIFIER_HEADER))
        .ok_or(DomainError::NotFound)?;

    let value = header.to_str().map_err(|_| DomainError::NotFound)?;

    AccountIdentifier::parse(value).map_err(|_| DomainError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn registry_with(identifier: &str) -> CustomerRegistry {
        let registry = CustomerRegistry::new();
        registry
            .register(AccountIdentifier::parse(identifier).unwrap(), "Ana")
            .unwrap();
        registry
    }

    fn headers(name: &'static str, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn resolves_known_identifier() {
        let registry = registry_with("111");
        let customer = resolve(&registry, &headers(IDENTIFIER_HEADER, "111")).unwrap();
        assert_eq!(customer.identifier().as_str(), "111");
    }

    #[test]
    fn accepts_legacy_header() {
        let registry = registry_with("111");
        let customer = resolve(&registry, &headers(LEGACY_IDENTIFIER_HEADER, " 111 ")).unwrap();
        assert_eq!(customer.name(), "Ana");
    }

    #[test]
    fn unknown_missing_or_blank_identifier_is_not_found() {
        let registry = registry_with("111");

        assert_eq!(
            resolve(&registry, &headers(IDENTIFIER_HEADER, "999")),
            Err(DomainError::NotFound)
        );
        assert_eq!(resolve(&registry, &HeaderMap::new()), Err(DomainError::NotFound));
        assert_eq!(
            resolve(&registry, &headers(IDENTIFIER_HEADER, "   ")),
            Err(DomainError::NotFound)
        );
        assert_eq!(registry.len(), 1);
    }
}

//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Routine operations are total (duplicates and absent ids are no-ops), so this
/// only surfaces at the edges: catalog construction, fail-closed lookups,
/// input validation and blob storage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A requested resource was not found (e.g. a product outside the catalog).
    #[error("not found: {0}")]
    NotFound(String),

    /// A stored blob could not be read or written.
    #[error("storage: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = DomainError::not_found("product retinol");
        assert_eq!(err.to_string(), "not found: product retinol");

        let err = DomainError::validation("price must be positive");
        assert_eq!(err.to_string(), "validation failed: price must be positive");
    }
}

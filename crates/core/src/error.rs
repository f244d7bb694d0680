//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic stock-keeping failures (rejected input,
/// unknown items). Persistence failures belong to the infra layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input was rejected before touching the inventory (empty name, wrong type).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The named item is not held in the inventory.
    #[error("item '{0}' not found in inventory")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_item() {
        let err = DomainError::not_found("orange");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "item 'orange' not found in inventory");
    }

    #[test]
    fn validation_message_is_prefixed() {
        let err = DomainError::validation("item name cannot be empty");
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "validation failed: item name cannot be empty");
    }
}

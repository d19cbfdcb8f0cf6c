//! Domain error model.

use thiserror::Error;

use crate::PartNumber;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (malformed
/// records, invalid values, key conflicts). File and process concerns belong
/// elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A delimited record had the wrong shape (e.g. field count).
    #[error("malformed record: {0}")]
    Format(String),

    /// A price was not a finite number, or was negative where that is not allowed.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// A value failed validation (e.g. empty part number).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A part with this number is already present.
    #[error("part {0} already exists")]
    DuplicateKey(PartNumber),

    /// No part with this number is present.
    #[error("part {0} not found")]
    NotFound(PartNumber),
}

impl DomainError {
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    pub fn invalid_price(msg: impl Into<String>) -> Self {
        Self::InvalidPrice(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate(part_number: PartNumber) -> Self {
        Self::DuplicateKey(part_number)
    }

    pub fn not_found(part_number: PartNumber) -> Self {
        Self::NotFound(part_number)
    }
}

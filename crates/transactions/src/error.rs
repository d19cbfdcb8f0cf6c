use thiserror::Error;

use stockroom_core::{PartNumber, Price};

use crate::transaction::TransactionKind;

/// Recoverable, per-line transaction failure.
///
/// The `Display` text is exactly what gets written to the audit log.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransactionError {
    #[error("Invalid transaction format: {line}")]
    Malformed { line: String },

    #[error("Invalid transaction type: {0}")]
    InvalidType(String),

    #[error("Invalid {kind} transaction format (expected {expected} fields, found {found})")]
    WrongFieldCount {
        kind: TransactionKind,
        expected: usize,
        found: usize,
    },

    #[error("Invalid part number: {0}")]
    InvalidPartNumber(String),

    #[error("Invalid price format for part {part_number}: {value}.")]
    InvalidPrice { part_number: PartNumber, value: String },

    #[error("Negative price for part {part_number}: {price}.")]
    NegativePrice { part_number: PartNumber, price: Price },

    #[error("Part {0} already exists.")]
    Duplicate(PartNumber),

    #[error("Part {part_number} not found for {kind}.")]
    NotFound {
        part_number: PartNumber,
        kind: TransactionKind,
    },

    #[error("Invalid change type {field} for part {part_number}.")]
    InvalidChangeField { field: String, part_number: PartNumber },
}

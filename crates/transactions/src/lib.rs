//! Transaction records and the engine that applies them to an inventory.
//!
//! A transaction line is parsed into a [`Transaction`], applied to an
//! [`InventoryStore`](stockroom_inventory::InventoryStore) by the
//! [`TransactionProcessor`], and its outcome is written to the [`AuditLog`].
//! Problems with a single line never abort the batch.

pub mod audit;
pub mod error;
pub mod processor;
pub mod transaction;

pub use audit::{AuditEntry, AuditLog, SUCCESS_PREFIX};
pub use error::TransactionError;
pub use processor::{BatchSummary, ProcessorOptions, TransactionProcessor};
pub use transaction::{AddPart, ChangeField, ChangePart, DeletePart, Transaction, TransactionKind};

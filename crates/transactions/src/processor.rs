use serde::Serialize;

use stockroom_core::{PartNumber, Price};
use stockroom_inventory::{InventoryStore, Part, PartUpdate};

use crate::audit::{AuditEntry, AuditLog};
use crate::error::TransactionError;
use crate::transaction::{AddPart, ChangeField, ChangePart, DeletePart, Transaction, TransactionKind};

/// Knobs for how strictly transactions are validated.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ProcessorOptions {
    /// Reject negative prices on additions and price changes.
    ///
    /// Off by default: the transaction paths only require a numeric price,
    /// unlike inventory loading.
    pub strict_prices: bool,
}

/// Counts for one processed batch.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub processed: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Applies transaction lines to an inventory and records every outcome.
///
/// Each line yields exactly one audit entry. A failing line leaves the store
/// untouched and processing moves on to the next one.
#[derive(Debug, Clone, Default)]
pub struct TransactionProcessor {
    store: InventoryStore,
    audit: AuditLog,
    options: ProcessorOptions,
}

impl TransactionProcessor {
    pub fn new(store: InventoryStore) -> Self {
        Self::with_options(store, ProcessorOptions::default())
    }

    pub fn with_options(store: InventoryStore, options: ProcessorOptions) -> Self {
        Self {
            store,
            audit: AuditLog::new(),
            options,
        }
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    pub fn options(&self) -> ProcessorOptions {
        self.options
    }

    pub fn into_parts(self) -> (InventoryStore, AuditLog) {
        (self.store, self.audit)
    }

    /// Empty both the store and the audit log.
    pub fn reset(&mut self) {
        self.store.clear();
        self.audit.clear();
    }

    /// Process one raw line and record its outcome.
    ///
    /// The error is returned for inspection only; it has already been written
    /// to the audit log.
    pub fn process_line(&mut self, line: &str) -> Result<&AuditEntry, TransactionError> {
        match Transaction::parse(line).and_then(|tx| self.apply(&tx)) {
            Ok(message) => {
                tracing::debug!(outcome = %message, "transaction applied");
                Ok(self.audit.append_success(message))
            }
            Err(err) => {
                tracing::warn!(line = line.trim(), "transaction rejected: {err}");
                self.audit.append(err.to_string());
                Err(err)
            }
        }
    }

    /// Process a batch of lines in order; never stops early.
    pub fn process_lines<I, S>(&mut self, lines: I) -> BatchSummary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = BatchSummary::default();
        for line in lines {
            summary.processed += 1;
            match self.process_line(line.as_ref()) {
                Ok(_) => summary.succeeded += 1,
                Err(_) => summary.failed += 1,
            }
        }

        tracing::info!(
            processed = summary.processed,
            succeeded = summary.succeeded,
            failed = summary.failed,
            "transaction batch complete"
        );
        summary
    }

    /// Apply an already-parsed transaction, returning the success message.
    pub fn apply(&mut self, tx: &Transaction) -> Result<String, TransactionError> {
        tracing::debug!(code = %tx.kind().code(), part_number = %tx.part_number(), "applying transaction");
        match tx {
            Transaction::Add(add) => self.apply_add(add),
            Transaction::Change(change) => self.apply_change(change),
            Transaction::Delete(delete) => self.apply_delete(delete),
        }
    }

    fn apply_add(&mut self, add: &AddPart) -> Result<String, TransactionError> {
        self.check_price(&add.part_number, add.price)?;

        let part = Part::new(add.part_number.clone(), add.description.clone(), add.price);
        self.store
            .add(part)
            .map_err(|_| TransactionError::Duplicate(add.part_number.clone()))?;

        Ok(format!("Part {} added successfully.", add.part_number))
    }

    fn apply_change(&mut self, change: &ChangePart) -> Result<String, TransactionError> {
        let part_number = &change.part_number;
        if !self.store.exists(part_number) {
            return Err(not_found(part_number, TransactionKind::Change));
        }

        let field: ChangeField = change
            .field
            .parse()
            .map_err(|_| TransactionError::InvalidChangeField {
                field: change.field.to_ascii_lowercase(),
                part_number: part_number.clone(),
            })?;

        match field {
            ChangeField::Description => {
                self.store
                    .update(part_number, PartUpdate::Description(change.new_value.clone()))
                    .map_err(|_| not_found(part_number, TransactionKind::Change))?;
                Ok(format!("Description of part {part_number} updated."))
            }
            ChangeField::Price => {
                let price = Price::parse(&change.new_value).map_err(|_| TransactionError::InvalidPrice {
                    part_number: part_number.clone(),
                    value: change.new_value.clone(),
                })?;
                self.check_price(part_number, price)?;

                let updated = self
                    .store
                    .update(part_number, PartUpdate::Price(price))
                    .map_err(|_| not_found(part_number, TransactionKind::Change))?;
                Ok(format!("Price of part {part_number} updated to {}.", updated.price()))
            }
        }
    }

    fn apply_delete(&mut self, delete: &DeletePart) -> Result<String, TransactionError> {
        self.store
            .remove(&delete.part_number)
            .map_err(|_| not_found(&delete.part_number, TransactionKind::Delete))?;
        Ok(format!("Part {} removed successfully.", delete.part_number))
    }

    fn check_price(&self, part_number: &PartNumber, price: Price) -> Result<(), TransactionError> {
        if self.options.strict_prices && price.is_negative() {
            return Err(TransactionError::NegativePrice {
                part_number: part_number.clone(),
                price,
            });
        }
        Ok(())
    }
}

// `update` and `remove` fail only when the part is absent.
fn not_found(part_number: &PartNumber, kind: TransactionKind) -> TransactionError {
    TransactionError::NotFound {
        part_number: part_number.clone(),
        kind,
    }
}

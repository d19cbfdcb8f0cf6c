use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;

use stockroom_infra::InventoryLoader;
use stockroom_transactions::{BatchSummary, TransactionProcessor};

use crate::config::Config;

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub inventory: PathBuf,
    pub parts_loaded: usize,
    pub transactions: BatchSummary,
    pub output: PathBuf,
    pub parts_written: usize,
    pub audit_log: PathBuf,
}

/// Load the baseline, apply every transaction line, write inventory and audit log.
///
/// Missing or malformed input files are fatal; bad transaction lines are not
/// (they end up in the audit log).
pub fn run(config: &Config) -> anyhow::Result<RunReport> {
    let loader = InventoryLoader;

    let store = loader
        .read_inventory(&config.inventory)
        .context("failed to load baseline inventory")?;
    let parts_loaded = store.len();

    let lines = loader
        .read_transactions(&config.transactions)
        .context("failed to read transactions")?;

    let mut processor = TransactionProcessor::with_options(store, config.processor_options());
    let summary = processor.process_lines(&lines);
    let (store, audit) = processor.into_parts();

    loader
        .write_inventory(&config.output, &store)
        .context("failed to write updated inventory")?;
    loader
        .write_audit_log(&config.audit_log, &audit)
        .context("failed to write audit log")?;

    Ok(RunReport {
        inventory: config.inventory.clone(),
        parts_loaded,
        transactions: summary,
        output: config.output.clone(),
        parts_written: store.len(),
        audit_log: config.audit_log.clone(),
    })
}

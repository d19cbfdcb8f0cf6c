use std::path::PathBuf;

use clap::Parser;

use stockroom_observability::LogFormat;
use stockroom_transactions::ProcessorOptions;

/// Apply a transaction file to an inventory file and write the results.
///
/// Every flag can also be set through its `STOCKROOM_*` environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "stockroom", version, about, long_about = None)]
pub struct Config {
    /// Baseline inventory file (`part_number,description,price` per line)
    #[arg(long, env = "STOCKROOM_INVENTORY", default_value = "inventory.txt")]
    pub inventory: PathBuf,

    /// Transaction file (one `A`/`C`/`D` record per line)
    #[arg(long, env = "STOCKROOM_TRANSACTIONS", default_value = "transactions.txt")]
    pub transactions: PathBuf,

    /// Where to write the updated inventory
    #[arg(long, env = "STOCKROOM_OUTPUT", default_value = "new_inventory.txt")]
    pub output: PathBuf,

    /// Where to write the audit log
    #[arg(long, env = "STOCKROOM_AUDIT_LOG", default_value = "audit_log.txt")]
    pub audit_log: PathBuf,

    /// Reject negative prices in addition and change transactions
    #[arg(long, env = "STOCKROOM_STRICT_PRICES")]
    pub strict_prices: bool,

    /// Log output format: pretty or json
    #[arg(long, env = "STOCKROOM_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormat,

    /// Print a JSON run summary on stdout
    #[arg(long)]
    pub summary_json: bool,
}

impl Config {
    pub fn processor_options(&self) -> ProcessorOptions {
        ProcessorOptions {
            strict_prices: self.strict_prices,
        }
    }
}

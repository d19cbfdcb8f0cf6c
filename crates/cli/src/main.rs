use clap::Parser;

use stockroom_cli::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    stockroom_observability::init(config.log_format);

    let report = stockroom_cli::run(&config).inspect_err(|err| tracing::error!("run aborted: {err:#}"))?;

    tracing::info!(
        parts_loaded = report.parts_loaded,
        parts_written = report.parts_written,
        succeeded = report.transactions.succeeded,
        failed = report.transactions.failed,
        "run complete"
    );

    if config.summary_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

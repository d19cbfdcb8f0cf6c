//! Command-line entry point: configuration and run orchestration.

pub mod config;
pub mod run;

pub use config::Config;
pub use run::{RunReport, run};

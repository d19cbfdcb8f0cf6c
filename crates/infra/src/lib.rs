//! Infrastructure layer: flat-file input and output for the inventory engine.

pub mod loader;

pub use loader::{InventoryLoader, LoaderError};

//! Inventory domain module.
//!
//! This crate contains the part entity and the ordered in-memory store,
//! implemented purely as deterministic domain logic (no IO, no logging).

pub mod part;
pub mod store;

pub use part::{FIELD_DELIMITER, Part, PartUpdate};
pub use store::InventoryStore;

//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no file IO, no logging setup).

pub mod entity;
pub mod error;
pub mod part_number;
pub mod price;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use part_number::PartNumber;
pub use price::Price;

//! Part price value object.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Unit price of a part.
///
/// Always finite. The sign is only checked by the `*_non_negative`
/// constructors: inventory files must carry non-negative prices, while the
/// transaction paths accept whatever numeric value they are given unless the
/// caller opts into strict checking.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::invalid_price(format!("{value} is not a finite number")));
        }
        Ok(Self(value))
    }

    pub fn new_non_negative(value: f64) -> DomainResult<Self> {
        let price = Self::new(value)?;
        price.ensure_non_negative()?;
        Ok(price)
    }

    /// Parse a decimal literal. Negative values are accepted.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| DomainError::invalid_price(format!("'{trimmed}' is not a number")))?;
        Self::new(value)
    }

    pub fn parse_non_negative(raw: &str) -> DomainResult<Self> {
        let price = Self::parse(raw)?;
        price.ensure_non_negative()?;
        Ok(price)
    }

    pub fn ensure_non_negative(self) -> DomainResult<()> {
        if self.is_negative() {
            return Err(DomainError::invalid_price(format!("price cannot be negative: {self}")));
        }
        Ok(())
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Shortest round-tripping form with at least one fractional digit
/// (`2.0`, `4.5`, `10.99`).
impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.0, f)
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

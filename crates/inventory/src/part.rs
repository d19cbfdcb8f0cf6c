use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, PartNumber, Price};

/// Field delimiter shared by inventory records and transaction records.
pub const FIELD_DELIMITER: char = ',';

const RECORD_FIELDS: usize = 3;

/// Entity: Part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    part_number: PartNumber,
    description: String,
    price: Price,
}

impl Part {
    pub fn new(part_number: PartNumber, description: impl Into<String>, price: Price) -> Self {
        Self {
            part_number,
            description: description.into(),
            price,
        }
    }

    /// Parse one `part_number,description,price` inventory record.
    ///
    /// Every shape or price problem is reported as `DomainError::Format`; the
    /// price must be non-negative. Part number and price are trimmed, the
    /// description is kept as written.
    pub fn from_record(record: &str) -> DomainResult<Self> {
        let fields: Vec<&str> = record.split(FIELD_DELIMITER).collect();
        if fields.len() != RECORD_FIELDS {
            return Err(DomainError::format(format!(
                "expected {RECORD_FIELDS} fields, found {}: {record}",
                fields.len()
            )));
        }

        let part_number = PartNumber::new(fields[0])
            .map_err(|e| DomainError::format(format!("{e}: {record}")))?;
        let price = Price::parse_non_negative(fields[2]).map_err(|e| {
            DomainError::format(format!("price for part {part_number}: {e}"))
        })?;

        Ok(Self::new(part_number, fields[1], price))
    }

    /// Render as an inventory record (inverse of `from_record`).
    pub fn to_record(&self) -> String {
        let d = FIELD_DELIMITER;
        format!("{}{d}{}{d}{}", self.part_number, self.description, self.price)
    }

    pub fn part_number(&self) -> &PartNumber {
        &self.part_number
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Produce the record that replaces this one after `update`.
    pub fn with_update(&self, update: PartUpdate) -> Self {
        let mut next = self.clone();
        match update {
            PartUpdate::Description(description) => next.description = description,
            PartUpdate::Price(price) => next.price = price,
        }
        next
    }
}

impl Entity for Part {
    type Id = PartNumber;

    fn id(&self) -> &Self::Id {
        &self.part_number
    }
}

/// A single-field change applied through `InventoryStore::update`.
#[derive(Debug, Clone, PartialEq)]
pub enum PartUpdate {
    Description(String),
    Price(Price),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_inventory_record() {
        let part = Part::from_record("P1,Widget,9.99").unwrap();
        assert_eq!(part.part_number().as_str(), "P1");
        assert_eq!(part.description(), "Widget");
        assert_eq!(part.price().value(), 9.99);
    }

    #[test]
    fn rejects_wrong_field_count() {
        for record in ["P1,Widget", "P1,Widget,9.99,extra", ""] {
            match Part::from_record(record).unwrap_err() {
                DomainError::Format(_) => {}
                other => panic!("Expected Format error for {record:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_bad_prices_as_format_errors() {
        for record in ["P1,Widget,abc", "P1,Widget,-1.00", "P1,Widget,inf"] {
            match Part::from_record(record).unwrap_err() {
                DomainError::Format(msg) => assert!(msg.contains("P1")),
                other => panic!("Expected Format error for {record:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_empty_part_number() {
        match Part::from_record(" ,Widget,1.0").unwrap_err() {
            DomainError::Format(_) => {}
            other => panic!("Expected Format error, got {other:?}"),
        }
    }

    #[test]
    fn record_round_trip_preserves_fields() {
        let part = Part::from_record("P2,Gadget,4.50").unwrap();
        assert_eq!(part.to_record(), "P2,Gadget,4.5");
        assert_eq!(Part::from_record(&part.to_record()).unwrap(), part);
    }

    #[test]
    fn with_update_changes_only_the_named_field() {
        let part = Part::from_record("P1,Widget,9.99").unwrap();

        let renamed = part.with_update(PartUpdate::Description("Sprocket".to_string()));
        assert_eq!(renamed.description(), "Sprocket");
        assert_eq!(renamed.price(), part.price());

        let repriced = part.with_update(PartUpdate::Price(Price::parse("1.25").unwrap()));
        assert_eq!(repriced.description(), "Widget");
        assert_eq!(repriced.price().value(), 1.25);
        assert_eq!(repriced.id(), part.id());
    }
}

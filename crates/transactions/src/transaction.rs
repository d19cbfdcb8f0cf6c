use core::str::FromStr;

use stockroom_core::{PartNumber, Price};
use stockroom_inventory::FIELD_DELIMITER;

use crate::error::TransactionError;

const MIN_FIELDS: usize = 3;
const ADD_FIELDS: usize = 5;
const CHANGE_FIELDS: usize = 5;

/// Transaction type, selected by the one-letter code in the first field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Add,
    Change,
    Delete,
}

impl TransactionKind {
    /// Resolve a type code case-insensitively (`A`, `C`, `D`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Self::Add),
            "C" => Some(Self::Change),
            "D" => Some(Self::Delete),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Self::Add => 'A',
            Self::Change => 'C',
            Self::Delete => 'D',
        }
    }
}

impl core::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Add => "addition",
            Self::Change => "change",
            Self::Delete => "deletion",
        })
    }
}

/// Field targeted by a change transaction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChangeField {
    Description,
    Price,
}

impl FromStr for ChangeField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "description" => Ok(Self::Description),
            "price" => Ok(Self::Price),
            _ => Err(()),
        }
    }
}

/// `A,part_number,entry_date,description,price`
#[derive(Debug, Clone, PartialEq)]
pub struct AddPart {
    pub part_number: PartNumber,
    pub entry_date: String,
    pub description: String,
    pub price: Price,
}

/// `C,part_number,entry_date,field_name,new_value`
///
/// `field` is kept raw: it is resolved against [`ChangeField`] only once the
/// target part is known to exist, so a missing part is reported first.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangePart {
    pub part_number: PartNumber,
    pub entry_date: String,
    pub field: String,
    pub new_value: String,
}

/// `D,part_number,...` (only the part number is used)
#[derive(Debug, Clone, PartialEq)]
pub struct DeletePart {
    pub part_number: PartNumber,
    pub entry_date: String,
}

/// One parsed transaction record.
#[derive(Debug, Clone, PartialEq)]
pub enum Transaction {
    Add(AddPart),
    Change(ChangePart),
    Delete(DeletePart),
}

impl Transaction {
    /// Parse one raw transaction line.
    ///
    /// Fields are split on the record delimiter. Type code, part number, change
    /// field name and price are trimmed; description, entry date and change
    /// value are kept as written. The type code is checked before the
    /// type-specific field count, and the addition price is validated here so
    /// that a bad price is reported ahead of a duplicate.
    pub fn parse(line: &str) -> Result<Self, TransactionError> {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        if fields.len() < MIN_FIELDS {
            return Err(TransactionError::Malformed {
                line: line.trim().to_string(),
            });
        }

        let code = fields[0].trim();
        let kind = TransactionKind::from_code(code)
            .ok_or_else(|| TransactionError::InvalidType(code.to_ascii_uppercase()))?;

        match kind {
            TransactionKind::Add => {
                expect_fields(kind, &fields, ADD_FIELDS)?;
                let part_number = parse_part_number(fields[1])?;
                let price = Price::parse(fields[4]).map_err(|_| TransactionError::InvalidPrice {
                    part_number: part_number.clone(),
                    value: fields[4].trim().to_string(),
                })?;
                Ok(Self::Add(AddPart {
                    part_number,
                    entry_date: fields[2].to_string(),
                    description: fields[3].to_string(),
                    price,
                }))
            }
            TransactionKind::Change => {
                expect_fields(kind, &fields, CHANGE_FIELDS)?;
                Ok(Self::Change(ChangePart {
                    part_number: parse_part_number(fields[1])?,
                    entry_date: fields[2].to_string(),
                    field: fields[3].trim().to_string(),
                    new_value: fields[4].to_string(),
                }))
            }
            TransactionKind::Delete => Ok(Self::Delete(DeletePart {
                part_number: parse_part_number(fields[1])?,
                entry_date: fields[2].to_string(),
            })),
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Add(_) => TransactionKind::Add,
            Self::Change(_) => TransactionKind::Change,
            Self::Delete(_) => TransactionKind::Delete,
        }
    }

    /// The part this transaction targets.
    pub fn part_number(&self) -> &PartNumber {
        match self {
            Self::Add(t) => &t.part_number,
            Self::Change(t) => &t.part_number,
            Self::Delete(t) => &t.part_number,
        }
    }

    pub fn entry_date(&self) -> &str {
        match self {
            Self::Add(t) => &t.entry_date,
            Self::Change(t) => &t.entry_date,
            Self::Delete(t) => &t.entry_date,
        }
    }
}

impl FromStr for Transaction {
    type Err = TransactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn expect_fields(kind: TransactionKind, fields: &[&str], expected: usize) -> Result<(), TransactionError> {
    if fields.len() != expected {
        return Err(TransactionError::WrongFieldCount {
            kind,
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

fn parse_part_number(raw: &str) -> Result<PartNumber, TransactionError> {
    PartNumber::new(raw).map_err(|e| TransactionError::InvalidPartNumber(e.to_string()))
}

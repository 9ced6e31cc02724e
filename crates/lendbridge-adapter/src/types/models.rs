/*
[INPUT]:  Backend JSON records
[OUTPUT]: Typed read-only records for display
[POS]:    Data layer - backend response models
[UPDATE]: When the backend record shape changes
*/

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One field of a backend record, kept as received.
///
/// Numbers and numeric strings decode into [`Decimal`] without losing the
/// carried precision; any other string stays text, and everything else is
/// held as raw JSON. Decoding a field never fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoanValue {
    Number(Decimal),
    Text(String),
    Raw(Value),
}

impl LoanValue {
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            LoanValue::Number(number) => Some(*number),
            _ => None,
        }
    }
}

impl Default for LoanValue {
    fn default() -> Self {
        LoanValue::Raw(Value::Null)
    }
}

impl fmt::Display for LoanValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoanValue::Number(number) => write!(f, "{}", number.normalize()),
            LoanValue::Text(text) => f.write_str(text),
            LoanValue::Raw(value) => write!(f, "{value}"),
        }
    }
}

/// One loan as returned by `GET /view-loans/{customer_id}`.
///
/// The backend owns the shape; missing fields decode as JSON null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanRecord {
    pub loan_id: LoanValue,
    pub loan_amount: LoanValue,
    pub interest_rate: LoanValue,
    pub monthly_installment: LoanValue,
}

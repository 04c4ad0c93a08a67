//! The shared view of a person record consumed by the validator.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifies which record type a request carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// An [`Employee`](super::Employee) record.
    Employee,
    /// A [`Staff`](super::Staff) record.
    Staff,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Employee => write!(f, "employee"),
            RecordKind::Staff => write!(f, "staff"),
        }
    }
}

/// Read access to the fields of a person record.
///
/// Implemented by every record type accepted by the API. Fields a record
/// type does not carry return `None`.
pub trait PersonRecord {
    /// The kind of record this is.
    const KIND: RecordKind;

    /// The person's full name.
    fn name(&self) -> &str;

    /// The person's date of birth, when the record type carries one.
    fn date_of_birth(&self) -> Option<NaiveDate>;

    /// The contact email address, if supplied.
    fn email(&self) -> Option<&str>;

    /// The contact phone number, if supplied.
    fn phone(&self) -> Option<&str>;

    /// The hourly salary.
    fn hourly_salary(&self) -> Decimal;
}

//! Staff record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::record::{PersonRecord, RecordKind};

/// A staff member submitted to `POST /api/staff`.
///
/// Staff records carry no date of birth, so no age-based rule applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    /// The staff member's full name.
    pub name: String,
    /// Optional contact email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// The hourly salary.
    #[serde(with = "rust_decimal::serde::float")]
    pub hourly_salary: Decimal,
}

impl PersonRecord for Staff {
    const KIND: RecordKind = RecordKind::Staff;

    fn name(&self) -> &str {
        &self.name
    }

    fn date_of_birth(&self) -> Option<NaiveDate> {
        None
    }

    fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    fn hourly_salary(&self) -> Decimal {
        self.hourly_salary
    }
}

//! Declarative constraint sets for person records.
//!
//! Each record type has exactly one [`RecordConstraints`] value. It is the
//! only place the limits for that type are declared, and it is consumed by
//! the single evaluation routine in [`validate`](super::validate).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An inclusive character-count range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRange {
    /// Minimum number of characters (inclusive).
    pub min: usize,
    /// Maximum number of characters (inclusive).
    pub max: usize,
}

impl LengthRange {
    /// Creates a new inclusive length range.
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Returns true if `len` lies within the range.
    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

impl Default for LengthRange {
    /// The name length limits shared by every record type.
    fn default() -> Self {
        Self::new(10, 250)
    }
}

/// Constraints on the phone field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneConstraints {
    /// Whether a missing or blank phone number is a violation.
    #[serde(default = "default_phone_required")]
    pub required: bool,
    /// Allowed length of the phone number.
    #[serde(default = "default_phone_length")]
    pub length: LengthRange,
}

fn default_phone_required() -> bool {
    true
}

fn default_phone_length() -> LengthRange {
    LengthRange::new(10, 20)
}

impl Default for PhoneConstraints {
    fn default() -> Self {
        Self {
            required: default_phone_required(),
            length: default_phone_length(),
        }
    }
}

/// The raised salary floor applied to senior subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeniorFloor {
    /// Age in whole years from which a subject is senior (inclusive).
    pub age: u32,
    /// Minimum hourly salary for a senior subject.
    pub minimum: Decimal,
}

/// Constraints on the hourly salary.
///
/// The effective floor is `min`, raised to `senior_floor.minimum` for
/// senior subjects. The ceiling is always `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryConstraints {
    /// Minimum hourly salary (inclusive).
    pub min: Decimal,
    /// Maximum hourly salary (inclusive).
    pub max: Decimal,
    /// Age-dependent floor, for record types that carry a date of birth.
    #[serde(default)]
    pub senior_floor: Option<SeniorFloor>,
}

/// The complete constraint set for one record type.
///
/// # Example
///
/// ```
/// use person_validation::validation::RecordConstraints;
/// use rust_decimal::Decimal;
///
/// let employee = RecordConstraints::employee();
/// assert_eq!(employee.salary.min, Decimal::from(50));
/// assert_eq!(employee.max_age, Some(65));
///
/// let staff = RecordConstraints::staff();
/// assert_eq!(staff.salary.min, Decimal::from(30));
/// assert!(staff.salary.senior_floor.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordConstraints {
    /// Allowed length of the name.
    #[serde(default)]
    pub name: LengthRange,
    /// Maximum age in whole years; `None` disables the birthdate rule.
    #[serde(default)]
    pub max_age: Option<u32>,
    /// Phone number constraints.
    #[serde(default)]
    pub phone: PhoneConstraints,
    /// Hourly salary constraints.
    pub salary: SalaryConstraints,
}

impl RecordConstraints {
    /// The constraint set for employee records.
    pub fn employee() -> Self {
        Self {
            name: LengthRange::default(),
            max_age: Some(65),
            phone: PhoneConstraints::default(),
            salary: SalaryConstraints {
                min: Decimal::from(50),
                max: Decimal::from(400),
                senior_floor: Some(SeniorFloor {
                    age: 30,
                    minimum: Decimal::from(200),
                }),
            },
        }
    }

    /// The constraint set for staff records.
    pub fn staff() -> Self {
        Self {
            name: LengthRange::default(),
            max_age: None,
            phone: PhoneConstraints::default(),
            salary: SalaryConstraints {
                min: Decimal::from(30),
                max: Decimal::from(400),
                senior_floor: None,
            },
        }
    }

    /// Checks the constraint set for internal consistency.
    ///
    /// Returns a description of the first inconsistency found.
    pub fn check(&self) -> Result<(), String> {
        if self.name.min > self.name.max {
            return Err(format!(
                "name length minimum {} exceeds maximum {}",
                self.name.min, self.name.max
            ));
        }
        if self.phone.length.min > self.phone.length.max {
            return Err(format!(
                "phone length minimum {} exceeds maximum {}",
                self.phone.length.min, self.phone.length.max
            ));
        }
        if self.salary.min.is_sign_negative() {
            return Err(format!("salary minimum {} is negative", self.salary.min));
        }
        if self.salary.min > self.salary.max {
            return Err(format!(
                "salary minimum {} exceeds maximum {}",
                self.salary.min, self.salary.max
            ));
        }
        if let Some(floor) = self.salary.senior_floor {
            if floor.minimum > self.salary.max {
                return Err(format!(
                    "senior salary floor {} exceeds maximum {}",
                    floor.minimum, self.salary.max
                ));
            }
        }
        Ok(())
    }
}

//! Record validation for the person validation service.
//!
//! Every record type is checked by the single routine [`validate`] against
//! its [`RecordConstraints`]. The current date is always passed in, so a
//! given record, constraint set and date always produce the same result.

mod age;
mod constraints;
mod result;
mod rules;

pub use age::{exceeds_max_age, has_reached_age, minimum_salary, years_before};
pub use constraints::{
    LengthRange, PhoneConstraints, RecordConstraints, SalaryConstraints, SeniorFloor,
};
pub use result::{ValidationResult, Violation};
pub use rules::{
    INVALID_BIRTHDATE, INVALID_EMAIL, INVALID_NAME, INVALID_PHONE, MISSING_PHONE,
    SALARY_OUT_OF_RANGE, is_email_address, is_phone_number,
};

use chrono::NaiveDate;

use crate::models::PersonRecord;

/// Evaluates every rule of `constraints` against `record` as of `today`.
///
/// Rules run in the order name, date of birth, email, phone, hourly
/// salary. A failing rule never prevents the others from running.
///
/// # Examples
///
/// ```
/// use person_validation::models::Staff;
/// use person_validation::validation::{validate, RecordConstraints, INVALID_EMAIL};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let staff = Staff {
///     name: "Jane Doe Smith".to_string(),
///     email: Some("not-an-email".to_string()),
///     phone: Some("123-456-7890".to_string()),
///     hourly_salary: Decimal::from(50),
/// };
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
///
/// let result = validate(&staff, &RecordConstraints::staff(), today);
/// assert!(!result.is_valid());
/// assert_eq!(result.errors().collect::<Vec<_>>(), vec![INVALID_EMAIL]);
/// ```
pub fn validate<R: PersonRecord>(
    record: &R,
    constraints: &RecordConstraints,
    today: NaiveDate,
) -> ValidationResult {
    let mut result = ValidationResult::default();

    rules::check_name(record.name(), constraints.name, &mut result);
    rules::check_birthdate(
        record.date_of_birth(),
        constraints.max_age,
        today,
        &mut result,
    );
    rules::check_email(record.email(), &mut result);
    rules::check_phone(record.phone(), constraints.phone, &mut result);
    rules::check_salary(
        record.hourly_salary(),
        record.date_of_birth(),
        &constraints.salary,
        today,
        &mut result,
    );

    result
}

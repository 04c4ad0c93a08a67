//! Individual field rules.
//!
//! Each function checks one field and pushes at most one violation per
//! distinct rule onto the result. None of them short-circuits another.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;

use super::age::{exceeds_max_age, minimum_salary};
use super::constraints::{LengthRange, PhoneConstraints, SalaryConstraints};
use super::result::ValidationResult;

/// Message for an empty name.
pub const INVALID_NAME: &str = "Invalid Name";
/// Message for a subject older than the maximum age.
pub const INVALID_BIRTHDATE: &str = "Birthdate is not valid.";
/// Message for a malformed email address.
pub const INVALID_EMAIL: &str = "Email address is not valid.";
/// Message for a missing phone number.
pub const MISSING_PHONE: &str = "Phone is not valid.";
/// Message for a phone number that does not match the phone pattern.
pub const INVALID_PHONE: &str = "PhoneNumber not valid";
/// Message for a salary outside the allowed range or below the age floor.
pub const SALARY_OUT_OF_RANGE: &str = "Hourly salary does not fall within allowed range.";

/// Optional area code as `(DDD) ` or `DDD-`, then `DDD-DDDD`.
///
/// Anchored at both ends: the whole value must be the number, so text
/// before or after it (`x123-456-7890`) does not match.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((\(\d{3}\) ?)|(\d{3}-))?\d{3}-\d{4}$").expect("phone pattern is valid")
});

/// Returns true if `phone` matches the phone-number pattern.
///
/// # Examples
///
/// ```
/// use person_validation::validation::is_phone_number;
///
/// assert!(is_phone_number("(123) 456-7890"));
/// assert!(is_phone_number("123-456-7890"));
/// assert!(is_phone_number("456-7890"));
/// assert!(!is_phone_number("12345"));
/// ```
pub fn is_phone_number(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// Returns true if `email` is a syntactically valid address.
///
/// Requires exactly one `@` that is neither the first nor the last
/// character, and no whitespace.
pub fn is_email_address(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.find('@') {
        Some(at) => at > 0 && at + 1 < email.len() && email.rfind('@') == Some(at),
        None => false,
    }
}

pub(crate) fn check_name(name: &str, limits: LengthRange, result: &mut ValidationResult) {
    if name.trim().is_empty() {
        result.push("name", INVALID_NAME);
        return;
    }
    let len = name.chars().count();
    if !limits.contains(len) {
        result.push(
            "name",
            format!(
                "Name must be between {} and {} characters. You entered {} characters.",
                limits.min, limits.max, len
            ),
        );
    }
}

pub(crate) fn check_birthdate(
    date_of_birth: Option<NaiveDate>,
    max_age: Option<u32>,
    today: NaiveDate,
    result: &mut ValidationResult,
) {
    if let (Some(dob), Some(max_age)) = (date_of_birth, max_age) {
        if exceeds_max_age(dob, today, max_age) {
            result.push("dateOfBirth", INVALID_BIRTHDATE);
        }
    }
}

pub(crate) fn check_email(email: Option<&str>, result: &mut ValidationResult) {
    if let Some(email) = email {
        if !is_email_address(email) {
            result.push("email", INVALID_EMAIL);
        }
    }
}

pub(crate) fn check_phone(
    phone: Option<&str>,
    constraints: PhoneConstraints,
    result: &mut ValidationResult,
) {
    let phone = match phone {
        Some(p) if !p.trim().is_empty() => p,
        _ => {
            if constraints.required {
                result.push("phone", MISSING_PHONE);
            }
            return;
        }
    };

    let len = phone.chars().count();
    if len < constraints.length.min {
        result.push(
            "phone",
            format!(
                "PhoneNumber must not be less than {} characters.",
                constraints.length.min
            ),
        );
    }
    if len > constraints.length.max {
        result.push(
            "phone",
            format!(
                "PhoneNumber must not exceed {} characters.",
                constraints.length.max
            ),
        );
    }
    if !is_phone_number(phone) {
        result.push("phone", INVALID_PHONE);
    }
}

pub(crate) fn check_salary(
    salary: Decimal,
    date_of_birth: Option<NaiveDate>,
    constraints: &SalaryConstraints,
    today: NaiveDate,
    result: &mut ValidationResult,
) {
    let floor = minimum_salary(date_of_birth, today, constraints);
    if salary < floor || salary > constraints.max {
        result.push("hourlySalary", SALARY_OUT_OF_RANGE);
    }
}

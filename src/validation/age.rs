//! Age calculations shared by the age-based rules.
//!
//! All ages are computed with calendar arithmetic: subtracting whole years
//! keeps the month and day, and February 29 becomes February 28 in years
//! without one.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

use super::constraints::SalaryConstraints;

/// Returns the date exactly `years` calendar years before `today`.
///
/// # Examples
///
/// ```
/// use person_validation::validation::years_before;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2028, 2, 29).unwrap();
/// assert_eq!(
///     years_before(today, 1),
///     NaiveDate::from_ymd_opt(2027, 2, 28).unwrap()
/// );
/// ```
pub fn years_before(today: NaiveDate, years: u32) -> NaiveDate {
    today
        .checked_sub_months(Months::new(years.saturating_mul(12)))
        .unwrap_or(NaiveDate::MIN)
}

/// Returns true if a subject born on `date_of_birth` has reached `age`
/// years on `today`. A subject whose birthday is today counts.
pub fn has_reached_age(date_of_birth: NaiveDate, today: NaiveDate, age: u32) -> bool {
    date_of_birth <= years_before(today, age)
}

/// Returns true if a subject born on `date_of_birth` is older than
/// `max_age` on `today`. Turning exactly `max_age` today is not older.
pub fn exceeds_max_age(date_of_birth: NaiveDate, today: NaiveDate, max_age: u32) -> bool {
    date_of_birth < years_before(today, max_age)
}

/// Returns the minimum hourly salary for a subject.
///
/// The base floor is `salary.min`. When the constraints declare a senior
/// floor and the subject's date of birth is known and senior on `today`,
/// the higher of the two floors applies.
pub fn minimum_salary(
    date_of_birth: Option<NaiveDate>,
    today: NaiveDate,
    salary: &SalaryConstraints,
) -> Decimal {
    match (salary.senior_floor, date_of_birth) {
        (Some(floor), Some(dob)) if has_reached_age(dob, today, floor.age) => {
            salary.min.max(floor.minimum)
        }
        _ => salary.min,
    }
}

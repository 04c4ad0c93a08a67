//! Employee record.
//!
//! An employee carries a date of birth, which drives both the maximum age
//! rule and the age-dependent salary floor.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::record::{PersonRecord, RecordKind};

/// An employee submitted to `POST /api/employee`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// The employee's full name.
    pub name: String,
    /// The employee's date of birth.
    pub date_of_birth: NaiveDate,
    /// Optional contact email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone number. Declared optional; whether it is required is
    /// decided by the configured phone constraints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// The hourly salary.
    #[serde(with = "rust_decimal::serde::float")]
    pub hourly_salary: Decimal,
}

impl PersonRecord for Employee {
    const KIND: RecordKind = RecordKind::Employee;

    fn name(&self) -> &str {
        &self.name
    }

    fn date_of_birth(&self) -> Option<NaiveDate> {
        Some(self.date_of_birth)
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

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee() -> Employee {
        Employee {
            name: "Jane Doe Smith".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
            email: Some("jane@example.com".to_string()),
            phone: Some("123-456-7890".to_string()),
            hourly_salary: Decimal::from(250),
        }
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "name": "Jane Doe Smith",
            "dateOfBirth": "1990-01-15",
            "email": "jane@example.com",
            "phone": "123-456-7890",
            "hourlySalary": 250
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee, create_test_employee());
    }

    #[test]
    fn test_deserialize_employee_without_optional_fields() {
        let json = r#"{
            "name": "Jane Doe Smith",
            "dateOfBirth": "1990-01-15",
            "hourlySalary": 99.5
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert!(employee.email.is_none());
        assert!(employee.phone.is_none());
        assert_eq!(employee.hourly_salary, Decimal::new(995, 1));
    }

    #[test]
    fn test_deserialize_employee_missing_date_of_birth_fails() {
        let json = r#"{"name": "Jane Doe Smith", "hourlySalary": 100}"#;
        let result: Result<Employee, _> = serde_json::from_str(json);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("dateOfBirth"));
    }

    #[test]
    fn test_serialize_employee_uses_camel_case_and_numbers() {
        let employee = create_test_employee();
        let value = serde_json::to_value(&employee).unwrap();

        assert_eq!(value["dateOfBirth"], "1990-01-15");
        assert_eq!(value["hourlySalary"].as_f64(), Some(250.0));
        assert!(value.get("date_of_birth").is_none());
    }

    #[test]
    fn test_serialize_skips_absent_email() {
        let mut employee = create_test_employee();
        employee.email = None;
        let json = serde_json::to_string(&employee).unwrap();
        assert!(!json.contains("email"));
    }

    #[test]
    fn test_person_record_accessors() {
        let employee = create_test_employee();
        assert_eq!(PersonRecord::name(&employee), "Jane Doe Smith");
        assert_eq!(
            PersonRecord::date_of_birth(&employee),
            NaiveDate::from_ymd_opt(1990, 1, 15)
        );
        assert_eq!(PersonRecord::email(&employee), Some("jane@example.com"));
        assert_eq!(PersonRecord::phone(&employee), Some("123-456-7890"));
        assert_eq!(Employee::KIND, RecordKind::Employee);
    }
}

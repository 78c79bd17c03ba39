//! Seed roster file structures.
//!
//! This module contains the strongly-typed structures that are
//! deserialized from the seed roster YAML file.

use serde::Deserialize;

use crate::models::Employee;

/// Seed roster file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedFile {
    /// Employees present when the service starts.
    pub employees: Vec<SeedEmployee>,
}

/// One employee entry in a seed roster file.
///
/// Seed entries carry explicit ids, unlike records created through the
/// API, and always start with no vacations and no documents.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedEmployee {
    /// Stable identifier for the seeded record.
    pub id: String,
    /// Company badge number; must be unique within the file.
    pub badge_number: u32,
    /// The employee's given name.
    pub first_name: String,
    /// The employee's family name.
    pub last_name: String,
    /// ISO country code of the employee's home office.
    #[serde(default)]
    pub country_code: String,
    /// Vacation hours accrued per pay period.
    #[serde(default)]
    pub vacation_accrual_rate: f64,
    /// Starting vacation balance in hours.
    #[serde(default)]
    pub vacation_accrued: f64,
}

impl From<SeedEmployee> for Employee {
    fn from(seed: SeedEmployee) -> Self {
        Employee {
            id: seed.id,
            badge_number: seed.badge_number,
            first_name: seed.first_name,
            last_name: seed.last_name,
            country_code: seed.country_code,
            vacation_accrual_rate: seed.vacation_accrual_rate,
            vacation_accrued: seed.vacation_accrued,
            vacations: Vec::new(),
            documents: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_seed_file() {
        let yaml = r#"
employees:
  - id: "1"
    badge_number: 7975
    first_name: John
    last_name: Doe
    vacation_accrual_rate: 2.0
    vacation_accrued: 30.0
  - id: "2"
    badge_number: 7294
    first_name: Mark
    last_name: Murphy
"#;

        let file: SeedFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.employees.len(), 2);
        assert_eq!(file.employees[0].id, "1");
        assert_eq!(file.employees[0].badge_number, 7975);
        assert_eq!(file.employees[0].vacation_accrued, 30.0);
        assert_eq!(file.employees[1].country_code, "");
        assert_eq!(file.employees[1].vacation_accrual_rate, 0.0);
    }

    #[test]
    fn test_deserialize_missing_required_field_fails() {
        let yaml = r#"
employees:
  - id: "1"
    first_name: John
    last_name: Doe
"#;

        let result: Result<SeedFile, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_seed_employee_converts_to_employee() {
        let seed = SeedEmployee {
            id: "4".to_string(),
            badge_number: 8480,
            first_name: "Micheal".to_string(),
            last_name: "Wood".to_string(),
            country_code: String::new(),
            vacation_accrual_rate: 3.4,
            vacation_accrued: 45.2,
        };

        let employee = Employee::from(seed);
        assert_eq!(employee.id, "4");
        assert_eq!(employee.badge_number, 8480);
        assert_eq!(employee.first_name, "Micheal");
        assert_eq!(employee.last_name, "Wood");
        assert_eq!(employee.vacation_accrual_rate, 3.4);
        assert_eq!(employee.vacation_accrued, 45.2);
        assert!(employee.vacations.is_empty());
        assert!(employee.documents.is_empty());
    }
}

//! Employee model and partial-update merge.
//!
//! This module defines the Employee struct stored by the roster service
//! and the merge rule the store applies when updating a record in place.

use serde::{Deserialize, Serialize};

use super::vacation::Vacation;

/// Represents an employee held in the roster.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier assigned by the store.
    pub id: String,
    /// Company badge number; unique among stored employees.
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
    /// Vacation hours currently banked.
    #[serde(default)]
    pub vacation_accrued: f64,
    /// Vacations booked for this employee, in booking order.
    #[serde(default)]
    pub vacations: Vec<Vacation>,
    /// Identifiers of documents attached to this employee, in attachment order.
    #[serde(default)]
    pub documents: Vec<String>,
}

impl Employee {
    /// Merges the updatable fields of `patch` into this record.
    ///
    /// Only the badge number, the two name fields and the accrual rate can
    /// change through an update. A field is applied only when its value in
    /// `patch` is non-zero (non-empty for strings); the zero value marks a
    /// field as absent, which also means an update can never reset a field
    /// back to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_service::models::Employee;
    ///
    /// let mut employee = Employee {
    ///     id: "1".to_string(),
    ///     badge_number: 7975,
    ///     first_name: "John".to_string(),
    ///     last_name: "Doe".to_string(),
    ///     ..Employee::default()
    /// };
    ///
    /// let patch = Employee {
    ///     first_name: "Jane".to_string(),
    ///     ..Employee::default()
    /// };
    ///
    /// employee.apply_update(&patch);
    /// assert_eq!(employee.first_name, "Jane");
    /// assert_eq!(employee.badge_number, 7975);
    /// ```
    pub fn apply_update(&mut self, patch: &Employee) {
        if patch.badge_number != 0 {
            self.badge_number = patch.badge_number;
        }
        if !patch.first_name.is_empty() {
            self.first_name = patch.first_name.clone();
        }
        if !patch.last_name.is_empty() {
            self.last_name = patch.last_name.clone();
        }
        if patch.vacation_accrual_rate != 0.0 {
            self.vacation_accrual_rate = patch.vacation_accrual_rate;
        }
    }
}

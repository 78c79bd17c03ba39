//! Request types for the roster service API.
//!
//! This module defines the JSON request structures for the employee
//! endpoints and their conversions into the domain types handed to the
//! store.

use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// Request body for the `POST /employees` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployeeRequest {
    /// Company badge number; must not be held by any stored employee.
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
}

/// Request body for the `PATCH /employees/:id` endpoint.
///
/// Every field is optional; absent fields leave the stored value
/// unchanged. The conversion into the store's patch shape maps an absent
/// field to the zero value the store treats as "not provided", so this
/// endpoint cannot reset a field to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployeeRequest {
    /// Replacement badge number.
    #[serde(default)]
    pub badge_number: Option<u32>,
    /// Replacement given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Replacement family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Replacement accrual rate.
    #[serde(default)]
    pub vacation_accrual_rate: Option<f64>,
}

/// Request body for the `POST /employees/:id/vacations` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookVacationRequest {
    /// When the vacation starts, in seconds since the Unix epoch.
    pub start_date: i64,
    /// Length of the vacation in hours.
    pub duration_hours: f64,
}

/// Request body for the `POST /employees/:id/documents` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachDocumentRequest {
    /// Identifier of the document to attach.
    pub document_id: String,
}

impl From<NewEmployeeRequest> for Employee {
    fn from(req: NewEmployeeRequest) -> Self {
        Employee {
            id: String::new(),
            badge_number: req.badge_number,
            first_name: req.first_name,
            last_name: req.last_name,
            country_code: req.country_code,
            vacation_accrual_rate: req.vacation_accrual_rate,
            vacation_accrued: 0.0,
            vacations: Vec::new(),
            documents: Vec::new(),
        }
    }
}

impl UpdateEmployeeRequest {
    /// Builds the store's patch shape for the employee stored under `id`.
    pub fn into_patch(self, id: String) -> Employee {
        Employee {
            id,
            badge_number: self.badge_number.unwrap_or(0),
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            vacation_accrual_rate: self.vacation_accrual_rate.unwrap_or(0.0),
            ..Employee::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_new_employee_request() {
        let json = r#"{
            "badge_number": 6238,
            "first_name": "Louis",
            "last_name": "Alvarez",
            "country_code": "US",
            "vacation_accrual_rate": 0.485
        }"#;

        let request: NewEmployeeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.badge_number, 6238);
        assert_eq!(request.first_name, "Louis");
        assert_eq!(request.last_name, "Alvarez");
        assert_eq!(request.country_code, "US");
        assert_eq!(request.vacation_accrual_rate, 0.485);
    }

    #[test]
    fn test_deserialize_new_employee_request_defaults_optional_fields() {
        let json = r#"{
            "badge_number": 6238,
            "first_name": "Louis",
            "last_name": "Alvarez"
        }"#;

        let request: NewEmployeeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.country_code, "");
        assert_eq!(request.vacation_accrual_rate, 0.0);
    }

    #[test]
    fn test_new_employee_conversion_starts_with_clean_record() {
        let request = NewEmployeeRequest {
            badge_number: 6238,
            first_name: "Louis".to_string(),
            last_name: "Alvarez".to_string(),
            country_code: "US".to_string(),
            vacation_accrual_rate: 0.485,
        };

        let employee: Employee = request.into();
        assert_eq!(employee.id, "");
        assert_eq!(employee.badge_number, 6238);
        assert_eq!(employee.vacation_accrued, 0.0);
        assert!(employee.vacations.is_empty());
        assert!(employee.documents.is_empty());
    }

    #[test]
    fn test_deserialize_partial_update_request() {
        let json = r#"{"first_name": "Jane"}"#;

        let request: UpdateEmployeeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.first_name, Some("Jane".to_string()));
        assert_eq!(request.badge_number, None);
        assert_eq!(request.last_name, None);
        assert_eq!(request.vacation_accrual_rate, None);
    }

    #[test]
    fn test_update_conversion_maps_absent_fields_to_zero_values() {
        let request = UpdateEmployeeRequest {
            first_name: Some("Jane".to_string()),
            ..UpdateEmployeeRequest::default()
        };

        let patch = request.into_patch("1".to_string());
        assert_eq!(patch.id, "1");
        assert_eq!(patch.first_name, "Jane");
        assert_eq!(patch.badge_number, 0);
        assert_eq!(patch.last_name, "");
        assert_eq!(patch.vacation_accrual_rate, 0.0);
    }

    #[test]
    fn test_deserialize_book_vacation_request() {
        let json = r#"{"start_date": 1767225600, "duration_hours": 40.0}"#;

        let request: BookVacationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.start_date, 1_767_225_600);
        assert_eq!(request.duration_hours, 40.0);
    }

    #[test]
    fn test_deserialize_attach_document_request() {
        let json = r#"{"document_id": "passport_scan"}"#;

        let request: AttachDocumentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.document_id, "passport_scan");
    }
}

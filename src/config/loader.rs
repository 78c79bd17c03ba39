//! Seed roster loading functionality.
//!
//! This module provides the [`SeedRoster`] type for loading the initial
//! employee roster from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{RosterError, RosterResult};
use crate::models::Employee;

use super::types::SeedFile;

/// Loads and provides access to the initial employee roster.
///
/// # File Structure
///
/// The seed roster is a single YAML file:
/// ```text
/// employees:
///   - id: "1"
///     badge_number: 7975
///     first_name: John
///     last_name: Doe
///     vacation_accrual_rate: 2.0
///     vacation_accrued: 30.0
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_service::config::SeedRoster;
///
/// let roster = SeedRoster::load("./config/roster.yaml").unwrap();
/// println!("Seeded {} employees", roster.employees().len());
/// ```
#[derive(Debug, Clone)]
pub struct SeedRoster {
    employees: Vec<Employee>,
}

impl SeedRoster {
    /// Loads a seed roster from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the roster file (e.g., "./config/roster.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `SeedRoster` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - Any required field is missing from an employee entry
    ///
    /// Uniqueness of ids and badge numbers is checked by the store when
    /// the roster is handed to it, not here.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use roster_service::config::SeedRoster;
    ///
    /// let roster = SeedRoster::load("./config/roster.yaml")?;
    /// # Ok::<(), roster_service::error::RosterError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RosterError::SeedNotFound {
            path: path_str.clone(),
        })?;

        let file: SeedFile =
            serde_yaml::from_str(&content).map_err(|e| RosterError::SeedParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self {
            employees: file.employees.into_iter().map(Employee::from).collect(),
        })
    }

    /// Returns the seeded employees.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Consumes the roster, yielding the seeded employees.
    pub fn into_employees(self) -> Vec<Employee> {
        self.employees
    }
}

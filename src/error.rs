//! Error types for the roster service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while storing employees and
//! booking vacations.

use thiserror::Error;

/// The main error type for the roster service.
///
/// Storage operations return the first three variants; the seed roster
/// loader returns the `Seed*` variants. The HTTP layer maps each variant
/// to a status code and structured error body.
///
/// # Example
///
/// ```
/// use roster_service::error::RosterError;
///
/// let error = RosterError::EmployeeNotFound {
///     id: "42".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee with id 42 not found");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// No employee is stored under the given identifier.
    #[error("Employee with id {id} not found")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// Another stored employee already holds this badge number.
    #[error("Badge number {badge_number} is already in use")]
    DuplicateBadge {
        /// The badge number that collided.
        badge_number: u32,
    },

    /// A vacation booking did not satisfy the 24-hour lead-time rule.
    #[error("Vacation starting at {start_date} must begin more than 24 hours from now")]
    InsufficientLeadTime {
        /// The requested start instant, in seconds since the Unix epoch.
        start_date: i64,
    },

    /// Seed roster file was not found at the specified path.
    #[error("Seed roster file not found: {path}")]
    SeedNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Seed roster file could not be parsed.
    #[error("Failed to parse seed roster file '{path}': {message}")]
    SeedParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Seed roster data violates a store invariant.
    #[error("Invalid seed roster: {message}")]
    SeedInvalid {
        /// A description of the violated invariant.
        message: String,
    },
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;

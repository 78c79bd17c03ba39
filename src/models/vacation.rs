//! Vacation model.
//!
//! This module defines the Vacation struct representing a single booked
//! absence on an employee's record.

use serde::{Deserialize, Serialize};

/// Represents one booked vacation on an employee's record.
///
/// Bookings are created through the store, which assigns the id and
/// starts every vacation in the not-cancelled, not-approved state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Vacation {
    /// Unique identifier for the booking.
    pub id: String,
    /// When the vacation starts, in seconds since the Unix epoch.
    pub start_date: i64,
    /// Length of the vacation in hours.
    pub duration_hours: f64,
    /// Whether the booking has been cancelled.
    #[serde(default)]
    pub cancelled: bool,
    /// Whether the booking has been approved.
    #[serde(default)]
    pub approved: bool,
}

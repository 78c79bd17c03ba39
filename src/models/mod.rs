//! Core data models for the roster service.
//!
//! This module contains the domain models used throughout the service.

mod employee;
mod vacation;

pub use employee::Employee;
pub use vacation::Vacation;

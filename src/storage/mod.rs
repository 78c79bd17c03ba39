//! Employee storage for the roster service.
//!
//! This module contains the repository contract, its in-memory
//! implementation and the injectable clock used by time-dependent
//! validation.

mod clock;
mod memory;

pub use clock::{Clock, FixedClock, SystemClock};
pub use memory::{EmployeeStore, InMemoryStore};

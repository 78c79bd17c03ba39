//! Seed roster loading for the roster service.
//!
//! This module provides functionality to load the initial employee roster
//! from a YAML file at service start.
//!
//! # Example
//!
//! ```no_run
//! use roster_service::config::SeedRoster;
//!
//! let roster = SeedRoster::load("./config/roster.yaml").unwrap();
//! println!("Seeded {} employees", roster.employees().len());
//! ```

mod loader;
mod types;

pub use loader::SeedRoster;
pub use types::SeedEmployee;

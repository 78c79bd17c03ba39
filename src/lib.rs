//! Employee roster and vacation booking service
//!
//! This crate provides an in-memory employee repository with uniqueness
//! rules for badge numbers, a lead-time rule for vacation bookings, and a
//! REST API exposing the repository over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;

//! Application state for the roster service API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::storage::EmployeeStore;

/// Shared application state.
///
/// Contains the employee store shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The store backing every endpoint.
    store: Arc<dyn EmployeeStore>,
}

impl AppState {
    /// Creates a new application state around the given store.
    pub fn new<S>(store: S) -> Self
    where
        S: EmployeeStore + 'static,
    {
        Self {
            store: Arc::new(store),
        }
    }

    /// Returns a reference to the employee store.
    pub fn store(&self) -> &dyn EmployeeStore {
        self.store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}

//! Employee storage contract and its in-memory implementation.
//!
//! The store is the sole owner of employee records for the process
//! lifetime. It enforces the two business rules that live at this layer:
//! badge numbers are unique among stored employees, and a vacation may
//! only be booked more than 24 hours before it starts.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Duration;
use uuid::Uuid;

use crate::error::{RosterError, RosterResult};
use crate::models::{Employee, Vacation};

use super::clock::{Clock, SystemClock};

/// Hours of notice required between booking time and a vacation's start.
const VACATION_LEAD_TIME_HOURS: i64 = 24;

/// The employee repository contract.
///
/// Implementations hand out owned copies of stored records, never
/// references into their own state, so callers can hold results across
/// later mutations. Every operation either completes fully or leaves the
/// store untouched.
pub trait EmployeeStore: Send + Sync {
    /// Returns the employee stored under `id`.
    ///
    /// Fails with [`RosterError::EmployeeNotFound`] if no record exists.
    fn get_employee(&self, id: &str) -> RosterResult<Employee>;

    /// Returns a snapshot of every stored employee, in no particular order.
    fn get_all(&self) -> RosterResult<Vec<Employee>>;

    /// Returns the number of stored employees.
    fn count(&self) -> RosterResult<usize>;

    /// Stores `candidate` under a freshly generated id and returns the
    /// record as stored.
    ///
    /// Any id supplied on `candidate` is discarded. Fails with
    /// [`RosterError::DuplicateBadge`] if another employee already holds
    /// the candidate's badge number, in which case nothing is stored.
    fn add_employee(&self, candidate: Employee) -> RosterResult<Employee>;

    /// Applies `patch` to the employee stored under `patch.id` and returns
    /// the record after the merge.
    ///
    /// Only the badge number, first name, last name and accrual rate can
    /// change; a zero-valued field in `patch` leaves the stored value
    /// alone. Fails with [`RosterError::EmployeeNotFound`] if no record
    /// exists.
    fn update_employee(&self, patch: Employee) -> RosterResult<Employee>;

    /// Removes the employee stored under `id` and returns its final state.
    ///
    /// The employee's badge number becomes available again immediately.
    /// Fails with [`RosterError::EmployeeNotFound`] if no record exists.
    fn delete_employee(&self, id: &str) -> RosterResult<Employee>;

    /// Appends `document_id` to the employee's document list.
    ///
    /// Repeated identifiers are appended again; the list is not
    /// deduplicated. Fails with [`RosterError::EmployeeNotFound`] if no
    /// record exists.
    fn add_document(&self, employee_id: &str, document_id: &str) -> RosterResult<()>;

    /// Books a vacation for the employee and returns the new booking.
    ///
    /// `start_date` is in seconds since the Unix epoch and must lie more
    /// than 24 hours past the store's clock, otherwise the booking fails
    /// with [`RosterError::InsufficientLeadTime`]. Fails with
    /// [`RosterError::EmployeeNotFound`] if no record exists.
    fn add_vacation(
        &self,
        employee_id: &str,
        start_date: i64,
        duration_hours: f64,
    ) -> RosterResult<Vacation>;
}

/// In-memory employee store backed by a mutex-guarded map.
///
/// Each operation holds the lock for its whole check-then-mutate sequence,
/// so the store is linearizable for concurrent callers: two racing
/// `add_employee` calls with the same badge number can never both succeed.
///
/// # Example
///
/// ```
/// use roster_service::models::Employee;
/// use roster_service::storage::{EmployeeStore, InMemoryStore};
///
/// let store = InMemoryStore::new();
/// let stored = store.add_employee(Employee {
///     badge_number: 7975,
///     first_name: "John".to_string(),
///     last_name: "Doe".to_string(),
///     ..Employee::default()
/// })?;
///
/// assert!(!stored.id.is_empty());
/// assert_eq!(store.count()?, 1);
/// # Ok::<(), roster_service::error::RosterError>(())
/// ```
pub struct InMemoryStore {
    employees: Mutex<HashMap<String, Employee>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryStore {
    /// Creates an empty store that validates bookings against the system
    /// clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty store with an injected clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            employees: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Creates a store pre-populated with `employees`.
    ///
    /// Seed records keep their given ids, unlike records added through
    /// [`EmployeeStore::add_employee`]. Fails with
    /// [`RosterError::SeedInvalid`] if an id is empty or repeated, and with
    /// [`RosterError::DuplicateBadge`] if two records share a badge number.
    pub fn with_employees<I>(employees: I, clock: Arc<dyn Clock>) -> RosterResult<Self>
    where
        I: IntoIterator<Item = Employee>,
    {
        let mut map = HashMap::new();
        let mut badges = HashSet::new();
        for employee in employees {
            if employee.id.is_empty() {
                return Err(RosterError::SeedInvalid {
                    message: format!(
                        "employee with badge number {} has an empty id",
                        employee.badge_number
                    ),
                });
            }
            if map.contains_key(&employee.id) {
                return Err(RosterError::SeedInvalid {
                    message: format!("employee id {} appears more than once", employee.id),
                });
            }
            if !badges.insert(employee.badge_number) {
                return Err(RosterError::DuplicateBadge {
                    badge_number: employee.badge_number,
                });
            }
            map.insert(employee.id.clone(), employee);
        }
        Ok(Self {
            employees: Mutex::new(map),
            clock,
        })
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Employee>> {
        // No operation panics while holding the guard, so a poisoned lock
        // still holds consistent data.
        self.employees
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeStore for InMemoryStore {
    fn get_employee(&self, id: &str) -> RosterResult<Employee> {
        let employees = self.lock();
        employees
            .get(id)
            .cloned()
            .ok_or_else(|| RosterError::EmployeeNotFound { id: id.to_string() })
    }

    fn get_all(&self) -> RosterResult<Vec<Employee>> {
        let employees = self.lock();
        Ok(employees.values().cloned().collect())
    }

    fn count(&self) -> RosterResult<usize> {
        Ok(self.lock().len())
    }

    fn add_employee(&self, candidate: Employee) -> RosterResult<Employee> {
        let mut employees = self.lock();
        if employees
            .values()
            .any(|stored| stored.badge_number == candidate.badge_number)
        {
            return Err(RosterError::DuplicateBadge {
                badge_number: candidate.badge_number,
            });
        }

        let mut stored = candidate;
        stored.id = Uuid::new_v4().to_string();
        let employee = stored.clone();
        employees.insert(stored.id.clone(), stored);
        Ok(employee)
    }

    fn update_employee(&self, patch: Employee) -> RosterResult<Employee> {
        let mut employees = self.lock();
        let stored = employees
            .get_mut(&patch.id)
            .ok_or_else(|| RosterError::EmployeeNotFound {
                id: patch.id.clone(),
            })?;
        stored.apply_update(&patch);
        Ok(stored.clone())
    }

    fn delete_employee(&self, id: &str) -> RosterResult<Employee> {
        let mut employees = self.lock();
        employees
            .remove(id)
            .ok_or_else(|| RosterError::EmployeeNotFound { id: id.to_string() })
    }

    fn add_document(&self, employee_id: &str, document_id: &str) -> RosterResult<()> {
        let mut employees = self.lock();
        let stored =
            employees
                .get_mut(employee_id)
                .ok_or_else(|| RosterError::EmployeeNotFound {
                    id: employee_id.to_string(),
                })?;
        stored.documents.push(document_id.to_string());
        Ok(())
    }

    fn add_vacation(
        &self,
        employee_id: &str,
        start_date: i64,
        duration_hours: f64,
    ) -> RosterResult<Vacation> {
        let mut employees = self.lock();
        let stored =
            employees
                .get_mut(employee_id)
                .ok_or_else(|| RosterError::EmployeeNotFound {
                    id: employee_id.to_string(),
                })?;

        let earliest_start = self.clock.now() + Duration::hours(VACATION_LEAD_TIME_HOURS);
        if start_date <= earliest_start.timestamp() {
            return Err(RosterError::InsufficientLeadTime { start_date });
        }

        let vacation = Vacation {
            id: Uuid::new_v4().to_string(),
            start_date,
            duration_hours,
            cancelled: false,
            approved: false,
        };
        stored.vacations.push(vacation.clone());
        Ok(vacation)
    }
}

//! Driven port for employee persistence.
//!
//! The request handler depends only on this capability set. Production uses
//! the Diesel adapter, servers without a database use the in-memory adapter,
//! and unit tests use the generated mock.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by employee repository adapters.
    pub enum EmployeeRepositoryError {
        /// Storage could not be reached.
        Connection { message } => "employee repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message } => "employee repository query failed: {message}",
        /// No employee with the given identifier exists.
        NotFound { id } => "employee not found: {id}",
    }
}

/// CRUD access to stored employees.
///
/// Each mutating call touches at most one record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Every stored employee, ordered by name then identifier.
    async fn get_all(&self) -> Result<Vec<Employee>, EmployeeRepositoryError>;

    /// Fetch one employee; `None` when the identifier is unknown.
    async fn find_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Insert a new employee.
    async fn create(&self, employee: &Employee) -> Result<(), EmployeeRepositoryError>;

    /// Replace the fields of the employee sharing `employee.id`.
    ///
    /// Returns [`EmployeeRepositoryError::NotFound`] when no such employee
    /// exists.
    async fn update(&self, employee: &Employee) -> Result<(), EmployeeRepositoryError>;

    /// Remove the employee with the given identifier.
    ///
    /// Returns [`EmployeeRepositoryError::NotFound`] when no such employee
    /// exists.
    async fn delete(&self, id: &EmployeeId) -> Result<(), EmployeeRepositoryError>;
}

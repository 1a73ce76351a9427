//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod employee_repository;
mod employee_requests;

#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
pub use employee_repository::{EmployeeRepository, EmployeeRepositoryError};
#[cfg(test)]
pub use employee_requests::MockEmployeeRequests;
pub use employee_requests::{
    EmployeeForm, EmployeeRequests, EmployeeResponse, EmployeeRoute, EmployeeView,
    UpdateEmployeeRequest,
};

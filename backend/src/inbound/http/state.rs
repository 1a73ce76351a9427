//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the domain port and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::EmployeeRequests;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub employees: Arc<dyn EmployeeRequests>,
}

impl HttpState {
    pub fn new(employees: Arc<dyn EmployeeRequests>) -> Self {
        Self { employees }
    }
}

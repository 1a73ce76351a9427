//! Driving port for the employee pages.
//!
//! Inbound adapters call this port and translate the returned
//! [`EmployeeResponse`] into their own terms: an HTML page for
//! [`EmployeeResponse::Render`], an HTTP redirect for
//! [`EmployeeResponse::Redirect`].

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeDraft, EmployeeId, Error, FieldErrors};

/// Named destinations a request may redirect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeRoute {
    /// The employee index.
    List,
}

impl EmployeeRoute {
    /// Path the route is served under.
    pub fn path(self) -> &'static str {
        match self {
            Self::List => "/Employees",
        }
    }
}

/// Model behind the create and edit forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    /// Identifier of the employee being edited; `None` on the create form.
    pub id: Option<EmployeeId>,
    pub draft: EmployeeDraft,
    pub errors: FieldErrors,
}

impl EmployeeForm {
    /// Re-populated form carrying validation messages.
    pub fn rejected(id: Option<EmployeeId>, draft: EmployeeDraft, errors: FieldErrors) -> Self {
        Self { id, draft, errors }
    }
}

/// Page to render, together with its model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeView {
    Index(Vec<Employee>),
    Create(EmployeeForm),
    Edit(EmployeeForm),
}

/// Response descriptor returned by every employee request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeResponse {
    /// Render a view with its model.
    Render(EmployeeView),
    /// Send the client to another route.
    Redirect(EmployeeRoute),
}

/// Update submitted for an existing employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateEmployeeRequest {
    pub id: EmployeeId,
    pub draft: EmployeeDraft,
}

/// Use-cases behind the employee pages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRequests: Send + Sync {
    /// Index of every employee.
    async fn list(&self) -> Result<EmployeeResponse, Error>;

    /// Empty create form.
    fn create_form(&self) -> EmployeeResponse;

    /// Validate and store a new employee.
    async fn create(&self, draft: EmployeeDraft) -> Result<EmployeeResponse, Error>;

    /// Edit form pre-filled with a stored employee.
    async fn edit_form(&self, id: &EmployeeId) -> Result<EmployeeResponse, Error>;

    /// Validate and apply new values to an existing employee.
    async fn update(&self, request: UpdateEmployeeRequest) -> Result<EmployeeResponse, Error>;

    /// Remove an employee.
    async fn delete(&self, id: &EmployeeId) -> Result<EmployeeResponse, Error>;
}

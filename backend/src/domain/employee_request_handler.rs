//! Orchestration behind the employee pages.
//!
//! Each request does at most one repository write. Form problems never
//! surface as errors: the form is rendered again with field messages and the
//! repository is left untouched.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    EmployeeForm, EmployeeRepository, EmployeeRepositoryError, EmployeeRequests,
    EmployeeResponse, EmployeeRoute, EmployeeView, UpdateEmployeeRequest,
};
use crate::domain::{
    ACCOUNT_NUMBER_INVALID, AccountNumberPolicy, Employee, EmployeeDetails, EmployeeDraft,
    EmployeeField, EmployeeId, Error, FieldErrors,
};

/// Request handler implementing [`EmployeeRequests`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use roster::domain::EmployeeRequestHandler;
/// use roster::domain::AccountNumberFormatValidator;
/// use roster::outbound::memory::InMemoryEmployeeRepository;
///
/// let handler = EmployeeRequestHandler::new(
///     Arc::new(InMemoryEmployeeRepository::seeded()),
///     Arc::new(AccountNumberFormatValidator),
/// );
/// # let _ = handler;
/// ```
#[derive(Clone)]
pub struct EmployeeRequestHandler<R, V> {
    repository: Arc<R>,
    account_numbers: Arc<V>,
}

impl<R, V> EmployeeRequestHandler<R, V> {
    /// Create a handler over the given repository and account number policy.
    pub fn new(repository: Arc<R>, account_numbers: Arc<V>) -> Self {
        Self {
            repository,
            account_numbers,
        }
    }
}

impl<R, V> EmployeeRequestHandler<R, V>
where
    R: EmployeeRepository,
    V: AccountNumberPolicy,
{
    fn map_repository_error(error: EmployeeRepositoryError) -> Error {
        match error {
            EmployeeRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("employee repository unavailable: {message}"))
            }
            EmployeeRepositoryError::Query { message } => {
                Error::internal(format!("employee repository error: {message}"))
            }
            EmployeeRepositoryError::NotFound { id } => {
                Error::not_found(format!("employee {id} not found"))
            }
        }
    }

    /// Required fields first, then the account number format.
    fn validate(&self, draft: &EmployeeDraft) -> Result<EmployeeDetails, FieldErrors> {
        let details = draft.validate()?;
        match self.account_numbers.is_valid(&details.account_number) {
            Ok(true) => Ok(details),
            Ok(false) => Err(FieldErrors::single(
                EmployeeField::AccountNumber,
                ACCOUNT_NUMBER_INVALID,
            )),
            Err(malformed) => {
                debug!(error = %malformed, "account number rejected as malformed");
                Err(FieldErrors::single(
                    EmployeeField::AccountNumber,
                    ACCOUNT_NUMBER_INVALID,
                ))
            }
        }
    }
}

#[async_trait]
impl<R, V> EmployeeRequests for EmployeeRequestHandler<R, V>
where
    R: EmployeeRepository,
    V: AccountNumberPolicy,
{
    async fn list(&self) -> Result<EmployeeResponse, Error> {
        let employees = self
            .repository
            .get_all()
            .await
            .map_err(Self::map_repository_error)?;
        Ok(EmployeeResponse::Render(EmployeeView::Index(employees)))
    }

    fn create_form(&self) -> EmployeeResponse {
        EmployeeResponse::Render(EmployeeView::Create(EmployeeForm::default()))
    }

    async fn create(&self, draft: EmployeeDraft) -> Result<EmployeeResponse, Error> {
        let details = match self.validate(&draft) {
            Ok(details) => details,
            Err(errors) => {
                debug!(rejected = errors.iter().count(), "create form rejected");
                return Ok(EmployeeResponse::Render(EmployeeView::Create(
                    EmployeeForm::rejected(None, draft, errors),
                )));
            }
        };

        let employee = Employee::new(EmployeeId::random(), details);
        self.repository
            .create(&employee)
            .await
            .map_err(Self::map_repository_error)?;
        info!(employee_id = %employee.id, "employee created");
        Ok(EmployeeResponse::Redirect(EmployeeRoute::List))
    }

    async fn edit_form(&self, id: &EmployeeId) -> Result<EmployeeResponse, Error> {
        let employee = self
            .repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("employee {id} not found")))?;
        Ok(EmployeeResponse::Render(EmployeeView::Edit(EmployeeForm {
            id: Some(employee.id),
            draft: EmployeeDraft::from_employee(&employee),
            errors: FieldErrors::default(),
        })))
    }

    async fn update(&self, request: UpdateEmployeeRequest) -> Result<EmployeeResponse, Error> {
        let UpdateEmployeeRequest { id, draft } = request;
        let details = match self.validate(&draft) {
            Ok(details) => details,
            Err(errors) => {
                debug!(employee_id = %id, "update form rejected");
                return Ok(EmployeeResponse::Render(EmployeeView::Edit(
                    EmployeeForm::rejected(Some(id), draft, errors),
                )));
            }
        };

        self.repository
            .update(&Employee::new(id, details))
            .await
            .map_err(Self::map_repository_error)?;
        info!(employee_id = %id, "employee updated");
        Ok(EmployeeResponse::Redirect(EmployeeRoute::List))
    }

    async fn delete(&self, id: &EmployeeId) -> Result<EmployeeResponse, Error> {
        self.repository
            .delete(id)
            .await
            .map_err(Self::map_repository_error)?;
        info!(employee_id = %id, "employee deleted");
        Ok(EmployeeResponse::Redirect(EmployeeRoute::List))
    }
}

#[cfg(test)]
#[path = "employee_request_handler_tests.rs"]
mod tests;

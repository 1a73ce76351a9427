//! Identifier parsing shared by the employee handlers.

use uuid::Uuid;

use crate::domain::{EmployeeId, Error};

/// Newtype wrapper for form field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

/// Form key carrying the employee identifier on update.
pub(crate) const ID_FIELD: FieldName = FieldName::new("Id");

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    Error::invalid_request(format!("missing required field: {}", field.as_str()))
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    Error::invalid_request(format!(
        "{} must be a valid UUID, got {value:?}",
        field.as_str()
    ))
}

/// Parse the identifier submitted in a form body.
///
/// A missing or malformed value is a bad request.
pub(crate) fn parse_form_id(value: Option<&str>, field: FieldName) -> Result<EmployeeId, Error> {
    let raw = value
        .filter(|raw| !raw.trim().is_empty())
        .ok_or_else(|| missing_field_error(field))?;
    raw.parse().map_err(|_| invalid_uuid_error(field, raw))
}

/// Parse the identifier taken from a URL path segment.
///
/// Anything that is not a UUID cannot name an employee, so it is reported
/// as not found rather than as a bad request.
pub(crate) fn parse_path_id(value: &str) -> Result<EmployeeId, Error> {
    Uuid::parse_str(value)
        .map(EmployeeId::from_uuid)
        .map_err(|_| Error::not_found(format!("no employee at {value:?}")))
}

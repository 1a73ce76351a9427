//! Domain primitives, aggregates and request orchestration.
//!
//! Purpose: Define the employee entity, the account number policy and the
//! request handler behind the employee pages. Adapters reach the domain only
//! through the traits in [`ports`].
//!
//! Public surface:
//! - Error (alias to `error::Error`) - failure descriptor mapped to HTTP.
//! - ErrorCode (alias to `error::ErrorCode`) - stable error identifier.
//! - Employee / EmployeeDraft - stored record and raw form input.
//! - AccountNumberFormatValidator - segment-length account number check.
//! - EmployeeRequestHandler - implementation of the employee use-cases.

pub mod account_number;
pub mod employee;
pub mod employee_request_handler;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::account_number::{
    AccountNumberFormatValidator, AccountNumberPolicy, FIRST_SEGMENT_LEN, LAST_SEGMENT_LEN,
    MIDDLE_SEGMENT_LEN, MalformedAccountNumber,
};
#[cfg(test)]
pub use self::account_number::MockAccountNumberPolicy;
pub use self::employee::{
    ACCOUNT_NUMBER_INVALID, ACCOUNT_NUMBER_REQUIRED, AGE_NOT_A_NUMBER, AGE_REQUIRED, Employee,
    EmployeeDetails, EmployeeDraft, EmployeeField, EmployeeId, FieldErrors, NAME_REQUIRED,
    seed_employees,
};
pub use self::employee_request_handler::EmployeeRequestHandler;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};


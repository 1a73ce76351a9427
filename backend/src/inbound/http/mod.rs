//! HTTP inbound adapter serving the employee pages.

pub mod employees;
pub mod error;
pub mod health;
pub mod state;
pub mod validation;
pub mod views;

pub use error::ApiResult;

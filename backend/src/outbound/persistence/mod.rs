//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! - **Thin adapter**: the repository only translates between Diesel rows
//!   and domain employees.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) never leave this module.
//! - **Async pooling**: connections come from a `bb8` pool through
//!   `diesel-async`.
//! - **Embedded migrations**: the schema and seed rows ship with the binary.
//!
//! # Example
//!
//! ```no_run
//! use roster::outbound::persistence::{DbPool, DieselEmployeeRepository, PoolConfig};
//!
//! # async fn build() -> Result<(), roster::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/roster")).await?;
//! let repo = DieselEmployeeRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_employee_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_employee_repository::DieselEmployeeRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DEFAULT_MAX_CONNECTIONS, DbPool, PoolConfig, PoolError};

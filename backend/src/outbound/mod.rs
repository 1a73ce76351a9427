//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: PostgreSQL-backed repository using Diesel ORM
//! - **memory**: process-local repository used without a database
//!
//! Adapters convert between domain types and storage representations. They
//! contain no business logic.

pub mod memory;
pub mod persistence;

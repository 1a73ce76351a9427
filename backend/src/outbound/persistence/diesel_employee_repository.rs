//! PostgreSQL-backed `EmployeeRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{EmployeeRow, EmployeeUpdate, NewEmployeeRow};
use super::pool::{DbPool, PoolError};
use super::schema::employees;

/// Diesel-backed implementation of the `EmployeeRepository` port.
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> EmployeeRepositoryError {
    map_basic_pool_error(error, EmployeeRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> EmployeeRepositoryError {
    map_basic_diesel_error(
        error,
        EmployeeRepositoryError::query,
        EmployeeRepositoryError::connection,
    )
}

/// Zero affected rows means the identifier did not match anything.
fn require_affected(affected: usize, id: &EmployeeId) -> Result<(), EmployeeRepositoryError> {
    if affected == 0 {
        debug!(employee_id = %id, "no employee row matched");
        return Err(EmployeeRepositoryError::not_found(id.to_string()));
    }
    Ok(())
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn get_all(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<EmployeeRow> = employees::table
            .select(EmployeeRow::as_select())
            .order((employees::name.asc(), employees::id.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<EmployeeRow> = employees::table
            .filter(employees::id.eq(id.as_uuid()))
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Employee::from))
    }

    async fn create(&self, employee: &Employee) -> Result<(), EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(employees::table)
            .values(NewEmployeeRow::from(employee))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn update(&self, employee: &Employee) -> Result<(), EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::update(employees::table.find(employee.id.as_uuid()))
            .set(EmployeeUpdate::from(employee))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        require_affected(affected, &employee.id)
    }

    async fn delete(&self, id: &EmployeeId) -> Result<(), EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(employees::table.find(id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        require_affected(affected, id)
    }
}

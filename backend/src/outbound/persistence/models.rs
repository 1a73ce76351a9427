//! Internal Diesel row structs.
//!
//! These never leave the persistence layer; the repository converts them to
//! and from domain employees.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{Employee, EmployeeId};

use super::schema::employees;

/// Row read from the `employees` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub account_number: String,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: EmployeeId::from_uuid(row.id),
            name: row.name,
            age: row.age,
            account_number: row.account_number,
        }
    }
}

/// Insertable employee record.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub(crate) struct NewEmployeeRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub age: i32,
    pub account_number: &'a str,
}

impl<'a> From<&'a Employee> for NewEmployeeRow<'a> {
    fn from(employee: &'a Employee) -> Self {
        Self {
            id: *employee.id.as_uuid(),
            name: &employee.name,
            age: employee.age,
            account_number: &employee.account_number,
        }
    }
}

/// Changeset replacing every mutable employee column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = employees)]
pub(crate) struct EmployeeUpdate<'a> {
    pub name: &'a str,
    pub age: i32,
    pub account_number: &'a str,
}

impl<'a> From<&'a Employee> for EmployeeUpdate<'a> {
    fn from(employee: &'a Employee) -> Self {
        Self {
            name: &employee.name,
            age: employee.age,
            account_number: &employee.account_number,
        }
    }
}

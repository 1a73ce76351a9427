//! Process-local employee storage.
//!
//! Used when the server runs without a database URL, and by the HTTP
//! integration tests. Contents are lost on restart.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeId, seed_employees};

/// `EmployeeRepository` backed by a mutex-guarded vector.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    employees: Mutex<Vec<Employee>>,
}

impl InMemoryEmployeeRepository {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the seed employees.
    pub fn seeded() -> Self {
        Self::with_employees(seed_employees())
    }

    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self {
            employees: Mutex::new(employees),
        }
    }

    // A panic while holding the lock cannot leave the vector half-written,
    // so a poisoned guard is still usable.
    fn lock(&self) -> MutexGuard<'_, Vec<Employee>> {
        self.employees
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn get_all(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let mut employees = self.lock().clone();
        employees.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(employees)
    }

    async fn find_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        Ok(self.lock().iter().find(|employee| employee.id == *id).cloned())
    }

    async fn create(&self, employee: &Employee) -> Result<(), EmployeeRepositoryError> {
        let mut employees = self.lock();
        if employees.iter().any(|existing| existing.id == employee.id) {
            return Err(EmployeeRepositoryError::query(format!(
                "duplicate employee id {}",
                employee.id
            )));
        }
        employees.push(employee.clone());
        Ok(())
    }

    async fn update(&self, employee: &Employee) -> Result<(), EmployeeRepositoryError> {
        let mut employees = self.lock();
        let slot = employees
            .iter_mut()
            .find(|existing| existing.id == employee.id)
            .ok_or_else(|| EmployeeRepositoryError::not_found(employee.id.to_string()))?;
        *slot = employee.clone();
        Ok(())
    }

    async fn delete(&self, id: &EmployeeId) -> Result<(), EmployeeRepositoryError> {
        let mut employees = self.lock();
        let index = employees
            .iter()
            .position(|existing| existing.id == *id)
            .ok_or_else(|| EmployeeRepositoryError::not_found(id.to_string()))?;
        employees.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repo() -> InMemoryEmployeeRepository {
        InMemoryEmployeeRepository::seeded()
    }

    fn employee(name: &str) -> Employee {
        Employee {
            id: EmployeeId::random(),
            name: name.to_owned(),
            age: 25,
            account_number: "214-5874986532-21".to_owned(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn get_all_orders_by_name(repo: InMemoryEmployeeRepository) {
        repo.create(&employee("Aaron Abbot")).await.expect("create");

        let names: Vec<_> = repo
            .get_all()
            .await
            .expect("list")
            .into_iter()
            .map(|e| e.name)
            .collect();

        assert_eq!(names, vec!["Aaron Abbot", "Evelin Rhodes", "Mark Miens"]);
    }

    #[rstest]
    #[tokio::test]
    async fn create_rejects_duplicate_id(repo: InMemoryEmployeeRepository) {
        let existing = seed_employees().remove(0);

        let err = repo.create(&existing).await.expect_err("duplicate");

        assert!(matches!(err, EmployeeRepositoryError::Query { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn update_replaces_only_the_matching_record(repo: InMemoryEmployeeRepository) {
        let mut changed = seed_employees().remove(0);
        changed.age = 31;

        repo.update(&changed).await.expect("update");

        assert_eq!(repo.find_by_id(&changed.id).await, Ok(Some(changed)));
        let untouched = seed_employees().remove(1);
        assert_eq!(repo.find_by_id(&untouched.id).await, Ok(Some(untouched)));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_removes_exactly_one_record(repo: InMemoryEmployeeRepository) {
        let target = seed_employees().remove(1);

        repo.delete(&target.id).await.expect("delete");

        let remaining = repo.get_all().await.expect("list");
        assert_eq!(remaining, vec![seed_employees().remove(0)]);
    }

    #[rstest]
    #[tokio::test]
    async fn mutations_of_unknown_ids_are_not_found(repo: InMemoryEmployeeRepository) {
        let stranger = employee("Nobody");

        assert!(matches!(
            repo.update(&stranger).await,
            Err(EmployeeRepositoryError::NotFound { .. })
        ));
        assert!(matches!(
            repo.delete(&stranger.id).await,
            Err(EmployeeRepositoryError::NotFound { .. })
        ));
        assert_eq!(repo.get_all().await.map(|all| all.len()), Ok(2));
    }

    #[tokio::test]
    async fn new_store_is_empty() {
        let repo = InMemoryEmployeeRepository::new();
        assert_eq!(repo.get_all().await, Ok(Vec::new()));
    }
}

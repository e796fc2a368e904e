//! Employee service: record CRUD and filtered search.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Employee, EmployeeUpdate, NewEmployee};
use crate::errors::{AppError, AppResult, FieldError};
use crate::infra::media::resolve_photo;
use crate::infra::{EmployeeRepository, MediaHost};

/// Employee service trait for dependency injection.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// All employees, most recently created first.
    async fn list(&self) -> AppResult<Vec<Employee>>;

    async fn get(&self, id: Uuid) -> AppResult<Employee>;

    /// AND-filter over designation and/or department. At least one must
    /// be non-empty after trimming.
    async fn search(
        &self,
        designation: Option<String>,
        department: Option<String>,
    ) -> AppResult<Vec<Employee>>;

    /// Create a record, resolving a raw photo payload to a durable URL
    /// first.
    async fn create(&self, data: NewEmployee) -> AppResult<Employee>;

    /// Partial update; photo resolution applies when a photo is supplied.
    async fn update(&self, id: Uuid, changes: EmployeeUpdate) -> AppResult<Employee>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of [`EmployeeService`].
pub struct EmployeeManager {
    employees: Arc<dyn EmployeeRepository>,
    media: Arc<dyn MediaHost>,
}

impl EmployeeManager {
    pub fn new(employees: Arc<dyn EmployeeRepository>, media: Arc<dyn MediaHost>) -> Self {
        Self { employees, media }
    }
}

#[async_trait]
impl EmployeeService for EmployeeManager {
    async fn list(&self) -> AppResult<Vec<Employee>> {
        self.employees.list().await
    }

    async fn get(&self, id: Uuid) -> AppResult<Employee> {
        self.employees
            .find_by_id(id)
            .await?
            .ok_or(AppError::EmployeeNotFound)
    }

    async fn search(
        &self,
        designation: Option<String>,
        department: Option<String>,
    ) -> AppResult<Vec<Employee>> {
        let designation = designation
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let department = department
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        // The store is never queried when both filters are blank.
        if designation.is_none() && department.is_none() {
            return Err(AppError::validation(vec![FieldError::new(
                "designation/department",
                "Provide designation or department",
            )]));
        }

        self.employees.search(designation, department).await
    }

    async fn create(&self, mut data: NewEmployee) -> AppResult<Employee> {
        data.employee_photo = resolve_photo(self.media.as_ref(), data.employee_photo).await?;
        let employee = self.employees.create(data).await?;

        tracing::debug!(employee_id = %employee.id, "employee created");
        Ok(employee)
    }

    async fn update(&self, id: Uuid, mut changes: EmployeeUpdate) -> AppResult<Employee> {
        if let Some(photo) = changes.employee_photo.take() {
            changes.employee_photo = Some(resolve_photo(self.media.as_ref(), photo).await?);
        }

        self.employees
            .update(id, changes)
            .await?
            .ok_or(AppError::EmployeeNotFound)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.employees.delete(id).await? {
            return Err(AppError::EmployeeNotFound);
        }
        Ok(())
    }
}

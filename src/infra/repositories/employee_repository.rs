//! Employee repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::base::classify_write_err;
use super::entities::employee::{self, ActiveModel, Entity as EmployeeEntity};
use crate::domain::{Employee, EmployeeUpdate, NewEmployee};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const UNIQUE_FIELDS: &[&str] = &["email"];

/// Employee repository trait for dependency injection.
///
/// Every listing method orders by creation time, most recent first.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>>;

    async fn list(&self) -> AppResult<Vec<Employee>>;

    /// AND-filter over whichever of designation/department is supplied.
    /// The caller guarantees at least one is present.
    async fn search(
        &self,
        designation: Option<String>,
        department: Option<String>,
    ) -> AppResult<Vec<Employee>>;

    async fn create(&self, data: NewEmployee) -> AppResult<Employee>;

    /// Apply a partial update; `Ok(None)` when no record matches.
    async fn update(&self, id: Uuid, changes: EmployeeUpdate) -> AppResult<Option<Employee>>;

    /// Delete by id; `Ok(false)` when no record matched.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// SeaORM-backed implementation of [`EmployeeRepository`].
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>> {
        let result = EmployeeEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Employee::from))
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .order_by_desc(employee::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Employee::from).collect())
    }

    async fn search(
        &self,
        designation: Option<String>,
        department: Option<String>,
    ) -> AppResult<Vec<Employee>> {
        let mut query = EmployeeEntity::find();
        if let Some(designation) = designation {
            query = query.filter(employee::Column::Designation.eq(designation));
        }
        if let Some(department) = department {
            query = query.filter(employee::Column::Department.eq(department));
        }

        let models = query
            .order_by_desc(employee::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Employee::from).collect())
    }

    async fn create(&self, data: NewEmployee) -> AppResult<Employee> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            email: Set(data.email),
            gender: Set(data.gender.to_string()),
            designation: Set(data.designation),
            salary: Set(data.salary),
            date_of_joining: Set(data.date_of_joining),
            department: Set(data.department),
            employee_photo: Set(data.employee_photo),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| classify_write_err(e, UNIQUE_FIELDS))?;
        Ok(Employee::from(model))
    }

    async fn update(&self, id: Uuid, changes: EmployeeUpdate) -> AppResult<Option<Employee>> {
        let Some(model) = EmployeeEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
        else {
            return Ok(None);
        };

        let mut active: ActiveModel = model.into();
        if let Some(first_name) = changes.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(email) = changes.email {
            active.email = Set(email);
        }
        if let Some(gender) = changes.gender {
            active.gender = Set(gender.to_string());
        }
        if let Some(designation) = changes.designation {
            active.designation = Set(designation);
        }
        if let Some(salary) = changes.salary {
            active.salary = Set(salary);
        }
        if let Some(date_of_joining) = changes.date_of_joining {
            active.date_of_joining = Set(date_of_joining);
        }
        if let Some(department) = changes.department {
            active.department = Set(department);
        }
        if let Some(employee_photo) = changes.employee_photo {
            active.employee_photo = Set(employee_photo);
        }
        active.updated_at = Set(Utc::now());

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| classify_write_err(e, UNIQUE_FIELDS))?;
        Ok(Some(Employee::from(model)))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = EmployeeEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(result.rows_affected > 0)
    }
}

//! GraphQL object types for the domain entities.

use async_graphql::{SimpleObject, ID};
use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{Employee, User};

/// User as returned to clients. The password hash is not part of this
/// type and can never appear in a response.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "User", rename_fields = "snake_case")]
pub struct UserObject {
    pub id: ID,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        Self {
            id: ID(user.id.to_string()),
            username: user.username,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Employee as returned to clients.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Employee", rename_fields = "snake_case")]
pub struct EmployeeObject {
    pub id: ID,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub designation: String,
    pub salary: f64,
    pub date_of_joining: NaiveDate,
    pub department: String,
    pub employee_photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeObject {
    fn from(employee: Employee) -> Self {
        Self {
            id: ID(employee.id.to_string()),
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            gender: employee.gender.to_string(),
            designation: employee.designation,
            salary: employee.salary,
            date_of_joining: employee.date_of_joining,
            department: employee.department,
            employee_photo: employee.employee_photo,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

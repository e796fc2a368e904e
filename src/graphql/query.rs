//! GraphQL query resolvers.

use async_graphql::{Context, Object, ID};
use std::sync::Arc;

use super::parse_eid;
use super::response::{AuthResponse, EmployeeResponse, EmployeesResponse};
use crate::errors::{AppError, FieldError};
use crate::services::{AuthService, EmployeeService};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Authenticate by username or email. Both "User not found" and
    /// "Invalid password" are reported inside the envelope.
    async fn login(
        &self,
        ctx: &Context<'_>,
        username_or_email: String,
        password: String,
    ) -> AuthResponse {
        let mut errors = Vec::new();
        if username_or_email.is_empty() {
            errors.push(FieldError::new(
                "usernameOrEmail",
                "usernameOrEmail is required",
            ));
        }
        if password.is_empty() {
            errors.push(FieldError::new("password", "password is required"));
        }
        if !errors.is_empty() {
            return AuthResponse::failure(AppError::Validation(errors), "Login failed");
        }

        let auth = ctx.data_unchecked::<Arc<dyn AuthService>>();
        match auth.login(username_or_email, password).await {
            Ok(user) => AuthResponse::ok("Login successful", user),
            Err(error) => AuthResponse::failure(error, "Login failed"),
        }
    }

    /// All employees, most recently created first.
    async fn get_all_employees(&self, ctx: &Context<'_>) -> EmployeesResponse {
        let employees = ctx.data_unchecked::<Arc<dyn EmployeeService>>();
        match employees.list().await {
            Ok(list) => EmployeesResponse::ok("Employees fetched", list),
            Err(error) => EmployeesResponse::failure(error, "Fetch employees failed"),
        }
    }

    async fn search_employee_by_eid(&self, ctx: &Context<'_>, eid: ID) -> EmployeeResponse {
        let Some(id) = parse_eid(&eid) else {
            return EmployeeResponse::failure(AppError::EmployeeNotFound, "Fetch employee failed");
        };

        let employees = ctx.data_unchecked::<Arc<dyn EmployeeService>>();
        match employees.get(id).await {
            Ok(employee) => EmployeeResponse::ok("Employee fetched", employee),
            Err(error) => EmployeeResponse::failure(error, "Fetch employee failed"),
        }
    }

    /// AND-filter over designation and/or department; at least one must
    /// be non-empty after trimming.
    async fn search_employee_by_designation_or_department(
        &self,
        ctx: &Context<'_>,
        designation: Option<String>,
        department: Option<String>,
    ) -> EmployeesResponse {
        let employees = ctx.data_unchecked::<Arc<dyn EmployeeService>>();
        match employees.search(designation, department).await {
            Ok(list) => EmployeesResponse::ok("Employees fetched", list),
            Err(error) => EmployeesResponse::failure(error, "Search employees failed"),
        }
    }
}

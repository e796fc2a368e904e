//! GraphQL mutation resolvers.

use async_graphql::{Context, Object, ID};
use std::sync::Arc;

use super::inputs::{EmployeeInput, EmployeeUpdateInput, SignupInput};
use super::parse_eid;
use super::response::{AuthResponse, DeleteResponse, EmployeeResponse};
use crate::errors::AppError;
use crate::services::{AuthService, EmployeeService};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn signup(&self, ctx: &Context<'_>, input: SignupInput) -> AuthResponse {
        if let Err(error) = input.check() {
            return AuthResponse::failure(error, "Signup failed");
        }

        let auth = ctx.data_unchecked::<Arc<dyn AuthService>>();
        match auth.signup(input.username, input.email, input.password).await {
            Ok(user) => AuthResponse::ok("Signup successful", user),
            Err(error) => AuthResponse::failure(error, "Signup failed"),
        }
    }

    async fn add_new_employee(&self, ctx: &Context<'_>, input: EmployeeInput) -> EmployeeResponse {
        let data = match input.into_validated() {
            Ok(data) => data,
            Err(error) => return EmployeeResponse::failure(error, "Create employee failed"),
        };

        let employees = ctx.data_unchecked::<Arc<dyn EmployeeService>>();
        match employees.create(data).await {
            Ok(employee) => EmployeeResponse::ok("Employee created", employee),
            Err(error) => EmployeeResponse::failure(error, "Create employee failed"),
        }
    }

    async fn update_employee_by_eid(
        &self,
        ctx: &Context<'_>,
        eid: ID,
        input: EmployeeUpdateInput,
    ) -> EmployeeResponse {
        let changes = match input.into_validated() {
            Ok(changes) => changes,
            Err(error) => return EmployeeResponse::failure(error, "Update employee failed"),
        };

        let Some(id) = parse_eid(&eid) else {
            return EmployeeResponse::failure(AppError::EmployeeNotFound, "Update employee failed");
        };

        let employees = ctx.data_unchecked::<Arc<dyn EmployeeService>>();
        match employees.update(id, changes).await {
            Ok(employee) => EmployeeResponse::ok("Employee updated", employee),
            Err(error) => EmployeeResponse::failure(error, "Update employee failed"),
        }
    }

    async fn delete_employee_by_eid(&self, ctx: &Context<'_>, eid: ID) -> DeleteResponse {
        let Some(id) = parse_eid(&eid) else {
            return DeleteResponse::failure(AppError::EmployeeNotFound, "Delete employee failed");
        };

        let employees = ctx.data_unchecked::<Arc<dyn EmployeeService>>();
        match employees.delete(id).await {
            Ok(()) => DeleteResponse::ok("Employee deleted"),
            Err(error) => DeleteResponse::failure(error, "Delete employee failed"),
        }
    }
}

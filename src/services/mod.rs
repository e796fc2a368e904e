//! Application use cases, dependency-injected behind traits.

mod auth_service;
mod employee_service;

pub use auth_service::{AuthService, Authenticator};
pub use employee_service::{EmployeeManager, EmployeeService};

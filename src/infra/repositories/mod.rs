//! Repository layer - data access abstraction over the document store.

mod base;
pub(crate) mod entities;
mod employee_repository;
mod user_repository;

pub use employee_repository::{EmployeeRepository, EmployeeStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use employee_repository::MockEmployeeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

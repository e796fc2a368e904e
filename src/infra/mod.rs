//! Infrastructure concerns: database, repositories, media host.

mod db;
pub mod media;
pub mod repositories;

pub use db::Database;
pub use media::{CloudinaryHost, MediaHost};
pub use repositories::{EmployeeRepository, EmployeeStore, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use media::MockMediaHost;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockEmployeeRepository, MockUserRepository};

//! Application state - dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::graphql::{build_schema, AppSchema};
use crate::infra::{CloudinaryHost, Database, EmployeeStore, MediaHost, UserStore};
use crate::services::{AuthService, Authenticator, EmployeeManager, EmployeeService};

/// Application state shared across requests.
#[derive(Clone)]
pub struct AppState {
    /// The GraphQL schema with services injected
    pub schema: AppSchema,
    /// Media host, reached directly by the REST upload endpoint
    pub media: Arc<dyn MediaHost>,
    /// Database connection, used by the health endpoint
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire up the full stack from configuration.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let media: Arc<dyn MediaHost> = Arc::new(CloudinaryHost::new(&config.media));
        Self::new(database, media)
    }

    /// Wire up services over an explicit media host.
    pub fn new(database: Arc<Database>, media: Arc<dyn MediaHost>) -> Self {
        let users = Arc::new(UserStore::new(database.get_connection()));
        let employee_repo = Arc::new(EmployeeStore::new(database.get_connection()));

        let auth: Arc<dyn AuthService> = Arc::new(Authenticator::new(users));
        let employees: Arc<dyn EmployeeService> =
            Arc::new(EmployeeManager::new(employee_repo, media.clone()));

        Self {
            schema: build_schema(auth, employees),
            media,
            database,
        }
    }
}

//! GraphQL schema: operations, inputs, and response envelopes.

use async_graphql::{EmptySubscription, Schema, ID};
use std::sync::Arc;
use uuid::Uuid;

use crate::services::{AuthService, EmployeeService};

pub mod inputs;
mod mutation;
mod query;
pub mod response;
pub mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// The application schema
pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the services injected into the resolver
/// context.
pub fn build_schema(
    auth: Arc<dyn AuthService>,
    employees: Arc<dyn EmployeeService>,
) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(auth)
        .data(employees)
        .finish()
}

/// Parse a client-supplied employee id. Anything that is not a UUID
/// cannot match a record, so callers treat `None` as not-found.
pub(crate) fn parse_eid(eid: &ID) -> Option<Uuid> {
    Uuid::parse_str(eid.as_str()).ok()
}

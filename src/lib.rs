//! StaffHub - employee records and user authentication over GraphQL.
//!
//! # Architecture Layers
//!
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and value objects
//! - **services**: Application use cases behind injectable traits
//! - **infra**: Infrastructure concerns (database, repositories, media host)
//! - **graphql**: Schema, resolvers, inputs, and response envelopes
//! - **api**: HTTP routes, handlers, and shared state
//! - **errors**: Centralized error handling

pub mod api;
pub mod config;
pub mod domain;
pub mod errors;
pub mod graphql;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use errors::{AppError, AppResult, FieldError};

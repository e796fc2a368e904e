//! SeaORM entity definitions.
//!
//! Database-specific entities, separate from domain models.

pub mod employee;
pub mod user;

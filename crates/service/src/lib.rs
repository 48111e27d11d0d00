//! Service layer providing business-oriented operations on top of models.
//! - Separates business logic from data access through repository traits.
//! - Ships SeaORM-backed repositories plus in-memory mocks for tests and doc examples.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod car;
pub mod auth;
#[cfg(test)]
pub mod test_support;

//! SeaORM entities and data-access functions for the rental store.
//!
//! Each entity module exposes its `Model` plus the finder functions the
//! service layer calls; connection setup lives in [`db`].

pub mod errors;
pub mod db;
pub mod car;
pub mod user;

#[cfg(test)]
mod tests;

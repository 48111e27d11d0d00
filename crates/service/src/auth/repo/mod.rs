//! Concrete [`AuthRepository`](super::repository::AuthRepository) backends.

pub mod seaorm;

//! Car inventory: domain inputs, repository abstraction and the service that
//! applies the create/update/delete rules.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::CarService;

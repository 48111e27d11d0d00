use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::auth::{repo::seaorm::SeaOrmAuthRepository, AuthService};
use service::car::{repository::SeaOrmCarRepository, CarService};

/// Shared handler state: the pool plus the services built on it.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cars: Arc<CarService<SeaOrmCarRepository>>,
    pub auth: Arc<AuthService<SeaOrmAuthRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let cars = CarService::new(Arc::new(SeaOrmCarRepository { db: db.clone() }));
        let auth = AuthService::new(Arc::new(SeaOrmAuthRepository { db: db.clone() }));
        Self { db, cars: Arc::new(cars), auth: Arc::new(auth) }
    }
}

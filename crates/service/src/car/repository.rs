use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::car::{self, CarData};
use crate::errors::ServiceError;

/// Persistence operations over the `cars` table.
#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<car::Model>, ServiceError>;
    async fn list_available(&self) -> Result<Vec<car::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<car::Model>, ServiceError>;
    async fn create(&self, data: CarData) -> Result<car::Model, ServiceError>;
    async fn replace(&self, id: i32, data: CarData) -> Result<car::Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
    async fn by_type(&self, car_type: &str) -> Result<Vec<car::Model>, ServiceError>;
    async fn by_price_range(&self, min: f64, max: f64) -> Result<Vec<car::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCarRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CarRepository for SeaOrmCarRepository {
    async fn list(&self) -> Result<Vec<car::Model>, ServiceError> {
        Ok(car::find_all(&self.db).await?)
    }

    async fn list_available(&self) -> Result<Vec<car::Model>, ServiceError> {
        Ok(car::find_available(&self.db).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<car::Model>, ServiceError> {
        Ok(car::find_by_id(&self.db, id).await?)
    }

    async fn create(&self, data: CarData) -> Result<car::Model, ServiceError> {
        Ok(car::create(&self.db, data).await?)
    }

    async fn replace(&self, id: i32, data: CarData) -> Result<car::Model, ServiceError> {
        Ok(car::replace(&self.db, id, data).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(car::delete(&self.db, id).await?)
    }

    async fn by_type(&self, car_type: &str) -> Result<Vec<car::Model>, ServiceError> {
        Ok(car::find_by_type(&self.db, car_type).await?)
    }

    async fn by_price_range(&self, min: f64, max: f64) -> Result<Vec<car::Model>, ServiceError> {
        Ok(car::find_by_daily_rate_between(&self.db, min, max).await?)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct Inner {
        cars: BTreeMap<i32, car::Model>,
        last_id: i32,
    }

    #[derive(Default)]
    pub struct MockCarRepository {
        inner: Mutex<Inner>,
    }

    fn to_model(id: i32, data: CarData) -> car::Model {
        car::Model {
            id,
            model: data.model,
            company: data.company,
            daily_rate: data.daily_rate,
            image_url: data.image_url,
            available: data.available,
            car_type: data.car_type,
        }
    }

    impl MockCarRepository {
        async fn select(&self, keep: impl Fn(&car::Model) -> bool + Send) -> Vec<car::Model> {
            let inner = self.inner.lock().await;
            inner.cars.values().filter(|c| keep(c)).cloned().collect()
        }
    }

    #[async_trait]
    impl CarRepository for MockCarRepository {
        async fn list(&self) -> Result<Vec<car::Model>, ServiceError> {
            Ok(self.select(|_| true).await)
        }

        async fn list_available(&self) -> Result<Vec<car::Model>, ServiceError> {
            Ok(self.select(|c| c.available).await)
        }

        async fn get(&self, id: i32) -> Result<Option<car::Model>, ServiceError> {
            Ok(self.inner.lock().await.cars.get(&id).cloned())
        }

        async fn create(&self, data: CarData) -> Result<car::Model, ServiceError> {
            let mut inner = self.inner.lock().await;
            inner.last_id += 1;
            let m = to_model(inner.last_id, data);
            inner.cars.insert(m.id, m.clone());
            Ok(m)
        }

        async fn replace(&self, id: i32, data: CarData) -> Result<car::Model, ServiceError> {
            let mut inner = self.inner.lock().await;
            if !inner.cars.contains_key(&id) {
                return Err(ServiceError::not_found("car"));
            }
            let m = to_model(id, data);
            inner.cars.insert(id, m.clone());
            Ok(m)
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.inner.lock().await.cars.remove(&id).is_some())
        }

        async fn by_type(&self, car_type: &str) -> Result<Vec<car::Model>, ServiceError> {
            let wanted = car_type.to_string();
            Ok(self.select(move |c| c.car_type.as_deref() == Some(wanted.as_str())).await)
        }

        async fn by_price_range(&self, min: f64, max: f64) -> Result<Vec<car::Model>, ServiceError> {
            Ok(self.select(move |c| c.daily_rate >= min && c.daily_rate <= max).await)
        }
    }
}

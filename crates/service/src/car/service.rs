use std::sync::Arc;
use tracing::{info, instrument};

use models::car;
use crate::car::domain::{CarFilter, CarInput, CarQuery};
use crate::car::repository::CarRepository;
use crate::errors::ServiceError;

/// Application service for the car inventory.
/// Holds the rules the HTTP layer relies on: no client-chosen ids on create,
/// update and delete only on existing rows.
pub struct CarService<R: CarRepository> {
    repo: Arc<R>,
}

impl<R: CarRepository> CarService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list_all(&self) -> Result<Vec<car::Model>, ServiceError> { self.repo.list().await }

    pub async fn list_available(&self) -> Result<Vec<car::Model>, ServiceError> { self.repo.list_available().await }

    pub async fn get(&self, id: i32) -> Result<Option<car::Model>, ServiceError> { self.repo.get(id).await }

    /// Create a car; the identifier is always generated.
    ///
    /// # Examples
    /// ```
    /// use service::car::{CarService, domain::CarInput, repository::mock::MockCarRepository};
    /// use std::sync::Arc;
    /// let svc = CarService::new(Arc::new(MockCarRepository::default()));
    /// let input = CarInput { id: None, model: "Civic".into(), company: "Honda".into(), daily_rate: 45.0, image_url: None, available: true, car_type: Some("Sedan".into()) };
    /// let car = tokio_test::block_on(svc.create(input.clone())).unwrap();
    /// assert_eq!(car.id, 1);
    /// let rejected = tokio_test::block_on(svc.create(CarInput { id: Some(7), ..input }));
    /// assert!(rejected.is_err());
    /// ```
    #[instrument(skip(self, input), fields(model = %input.model))]
    pub async fn create(&self, input: CarInput) -> Result<car::Model, ServiceError> {
        if let Some(id) = input.id {
            return Err(ServiceError::Validation(format!("new car must not carry an id (got {id})")));
        }
        let created = self.repo.create(input.into()).await?;
        info!(car_id = created.id, "car_created");
        Ok(created)
    }

    /// Replace every field of an existing car. The body id is ignored.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: CarInput) -> Result<car::Model, ServiceError> {
        if self.repo.get(id).await?.is_none() {
            return Err(ServiceError::not_found("car"));
        }
        let updated = self.repo.replace(id, input.into()).await?;
        info!(car_id = id, "car_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("car"));
        }
        info!(car_id = id, "car_deleted");
        Ok(())
    }

    pub async fn by_type(&self, car_type: &str) -> Result<Vec<car::Model>, ServiceError> {
        self.repo.by_type(car_type).await
    }

    /// Inclusive range; `min <= max` is the caller's business.
    pub async fn by_price_range(&self, min: f64, max: f64) -> Result<Vec<car::Model>, ServiceError> {
        self.repo.by_price_range(min, max).await
    }

    pub async fn filter(&self, filter: &CarFilter) -> Result<Vec<car::Model>, ServiceError> {
        match filter.resolve() {
            CarQuery::ByType(t) => self.by_type(&t).await,
            CarQuery::PriceRange { min, max } => self.by_price_range(min, max).await,
            CarQuery::All => self.list_all().await,
        }
    }
}

use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cars")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub model: String,
    pub company: String,
    pub daily_rate: f64,
    pub image_url: Option<String>,
    pub available: bool,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub car_type: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Every column except the generated identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct CarData {
    pub model: String,
    pub company: String,
    pub daily_rate: f64,
    pub image_url: Option<String>,
    pub available: bool,
    pub car_type: Option<String>,
}

impl CarData {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            model: Set(self.model),
            company: Set(self.company),
            daily_rate: Set(self.daily_rate),
            image_url: Set(self.image_url),
            available: Set(self.available),
            car_type: Set(self.car_type),
            ..Default::default()
        }
    }
}

pub async fn create(db: &DatabaseConnection, data: CarData) -> Result<Model, errors::ModelError> {
    Ok(data.into_active_model().insert(db).await?)
}

/// Overwrite every column of an existing row.
pub async fn replace(db: &DatabaseConnection, id: i32, data: CarData) -> Result<Model, errors::ModelError> {
    let mut am = data.into_active_model();
    am.id = Set(id);
    match am.update(db).await {
        Ok(m) => Ok(m),
        Err(DbErr::RecordNotUpdated) => Err(errors::ModelError::NotFound(format!("car {id}"))),
        Err(e) => Err(e.into()),
    }
}

/// Returns whether a row was removed.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find_available(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find()
        .filter(Column::Available.eq(true))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

pub async fn find_by_type(db: &DatabaseConnection, car_type: &str) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find()
        .filter(Column::CarType.eq(car_type))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

/// Inclusive on both ends. `min > max` simply matches nothing.
pub async fn find_by_daily_rate_between(db: &DatabaseConnection, min: f64, max: f64) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find()
        .filter(Column::DailyRate.between(min, max))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

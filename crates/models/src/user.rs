use sea_orm::{entity::prelude::*, DatabaseConnection, PaginatorTrait, Set};

use crate::errors;

/// Registered customer. The password column holds the clear-text value,
/// so this model is never serialized directly.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub username: String,
    #[sea_orm(column_name = "full_name")]
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: String,
    pub phone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_username(username: &str) -> Result<(), errors::ModelError> {
    if username.trim().is_empty() {
        return Err(errors::ModelError::Validation("username required".into()));
    }
    Ok(())
}

/// Insert a new user. A username that is already taken surfaces as
/// [`errors::ModelError::Duplicate`] through the primary key.
pub async fn create(db: &DatabaseConnection, user: Model) -> Result<Model, errors::ModelError> {
    validate_username(&user.username)?;
    let am = ActiveModel {
        username: Set(user.username),
        name: Set(user.name),
        email: Set(user.email),
        password: Set(user.password),
        phone: Set(user.phone),
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_username(db: &DatabaseConnection, username: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(username.to_string()).one(db).await?)
}

pub async fn exists(db: &DatabaseConnection, username: &str) -> Result<bool, errors::ModelError> {
    let n = Entity::find()
        .filter(Column::Username.eq(username))
        .count(db)
        .await?;
    Ok(n > 0)
}

/// Composite finder matching both columns exactly.
pub async fn find_by_email_and_password(db: &DatabaseConnection, email: &str, password: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find()
        .filter(Column::Email.eq(email))
        .filter(Column::Password.eq(password))
        .one(db)
        .await?)
}

use sea_orm::DatabaseConnection;

use crate::auth::domain::{AuthUser, RegisterInput, StoredUser};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<StoredUser>, AuthError> {
        let res = models::user::find_by_username(&self.db, username).await?;
        Ok(res.map(StoredUser::from))
    }

    async fn exists(&self, username: &str) -> Result<bool, AuthError> {
        Ok(models::user::exists(&self.db, username).await?)
    }

    async fn create_user(&self, input: &RegisterInput) -> Result<AuthUser, AuthError> {
        let created = models::user::create(&self.db, models::user::Model {
            username: input.username.clone(),
            name: input.name.clone(),
            email: input.email.clone(),
            password: input.password.clone(),
            phone: input.phone.clone(),
        })
        .await?;
        Ok(StoredUser::from(created).user)
    }

    async fn find_by_email_and_password(&self, email: &str, password: &str) -> Result<Option<AuthUser>, AuthError> {
        let res = models::user::find_by_email_and_password(&self.db, email, password).await?;
        Ok(res.map(|m| StoredUser::from(m).user))
    }
}

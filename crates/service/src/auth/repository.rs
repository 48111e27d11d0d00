use async_trait::async_trait;

use super::domain::{AuthUser, RegisterInput, StoredUser};
use super::errors::AuthError;

/// Repository abstraction for auth-related persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<StoredUser>, AuthError>;
    async fn exists(&self, username: &str) -> Result<bool, AuthError>;
    /// Must fail with [`AuthError::Conflict`] when the username is taken.
    async fn create_user(&self, input: &RegisterInput) -> Result<AuthUser, AuthError>;
    async fn find_by_email_and_password(&self, email: &str, password: &str) -> Result<Option<AuthUser>, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    #[derive(Default)]
    pub struct MockAuthRepository {
        users: Mutex<HashMap<String, StoredUser>>, // key: username
    }

    #[async_trait]
    impl AuthRepository for MockAuthRepository {
        async fn find_by_username(&self, username: &str) -> Result<Option<StoredUser>, AuthError> {
            Ok(self.users.lock().await.get(username).cloned())
        }

        async fn exists(&self, username: &str) -> Result<bool, AuthError> {
            Ok(self.users.lock().await.contains_key(username))
        }

        async fn create_user(&self, input: &RegisterInput) -> Result<AuthUser, AuthError> {
            let mut users = self.users.lock().await;
            if users.contains_key(&input.username) {
                return Err(AuthError::Conflict);
            }
            let user = AuthUser {
                username: input.username.clone(),
                name: input.name.clone(),
                email: input.email.clone(),
                phone: input.phone.clone(),
            };
            users.insert(input.username.clone(), StoredUser { user: user.clone(), password: input.password.clone() });
            Ok(user)
        }

        async fn find_by_email_and_password(&self, email: &str, password: &str) -> Result<Option<AuthUser>, AuthError> {
            let users = self.users.lock().await;
            Ok(users
                .values()
                .find(|s| s.user.email.as_deref() == Some(email) && s.password == password)
                .map(|s| s.user.clone()))
        }
    }
}

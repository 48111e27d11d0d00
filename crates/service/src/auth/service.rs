use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::domain::{AuthUser, LoginInput, RegisterInput};
use super::errors::AuthError;
use super::repository::AuthRepository;

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Register a new user under a unique username.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::AuthService, repository::mock::MockAuthRepository};
    /// use service::auth::domain::RegisterInput;
    /// use std::sync::Arc;
    /// let svc = AuthService::new(Arc::new(MockAuthRepository::default()));
    /// let input = RegisterInput { username: "jd".into(), name: Some("Jane".into()), email: None, password: "pw".into(), phone: None };
    /// let user = tokio_test::block_on(svc.register(input.clone())).unwrap();
    /// assert_eq!(user.username, "jd");
    /// assert!(tokio_test::block_on(svc.register(input)).is_err());
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn register(&self, input: RegisterInput) -> Result<AuthUser, AuthError> {
        if input.username.trim().is_empty() {
            return Err(AuthError::Validation("username required".into()));
        }
        if self.repo.exists(&input.username).await? {
            debug!("username taken");
            return Err(AuthError::Conflict);
        }
        let user = self.repo.create_user(&input).await?;
        info!(username = %user.username, "user_registered");
        Ok(user)
    }

    /// Check a username/password pair and return the user without its password.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::AuthService, repository::mock::MockAuthRepository};
    /// use service::auth::domain::{RegisterInput, LoginInput};
    /// use std::sync::Arc;
    /// let svc = AuthService::new(Arc::new(MockAuthRepository::default()));
    /// let _ = tokio_test::block_on(svc.register(RegisterInput { username: "jd".into(), name: None, email: None, password: "pw".into(), phone: None }));
    /// let user = tokio_test::block_on(svc.login(LoginInput { username: "jd".into(), password: "pw".into() })).unwrap();
    /// assert_eq!(user.username, "jd");
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthUser, AuthError> {
        let stored = self.repo
            .find_by_username(&input.username)
            .await?
            .ok_or(AuthError::NotFound)?;

        if stored.password != input.password {
            warn!("login rejected: password mismatch");
            return Err(AuthError::Unauthorized);
        }
        info!("user_logged_in");
        Ok(stored.user)
    }

    /// Look a user up by the email + password pair.
    #[instrument(skip(self, password))]
    pub async fn verify_email_credentials(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        self.repo
            .find_by_email_and_password(email, password)
            .await?
            .ok_or(AuthError::Unauthorized)
    }
}

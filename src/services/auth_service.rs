//! Authentication service: signup and login.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewUser, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Authentication service trait for dependency injection.
///
/// Inputs arrive already validated; this layer owns identifier
/// normalization, hashing, and credential checks.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user. The password is hashed before it reaches the
    /// store; the email is stored lowercased.
    async fn signup(&self, username: String, email: String, password: String) -> AppResult<User>;

    /// Look up a user by username or lowercased email and verify the
    /// password against the stored hash.
    async fn login(&self, username_or_email: String, password: String) -> AppResult<User>;
}

/// Concrete implementation of [`AuthService`].
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn signup(&self, username: String, email: String, password: String) -> AppResult<User> {
        let password_hash = Password::new(&password)?.into_string();
        let user = self
            .users
            .create(NewUser {
                username: username.trim().to_string(),
                email: email.trim().to_lowercase(),
                password_hash,
            })
            .await?;

        tracing::debug!(user_id = %user.id, "user registered");
        Ok(user)
    }

    async fn login(&self, username_or_email: String, password: String) -> AppResult<User> {
        let identifier = username_or_email.trim();
        let user = self
            .users
            .find_by_identifier(identifier)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let stored = Password::from_hash(user.password_hash.clone());
        if !stored.verify(&password) {
            return Err(AppError::InvalidPassword);
        }

        Ok(user)
    }
}

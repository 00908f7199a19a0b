//! User registration and login.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::domain::{DomainError, LoginAttempt, NewUser, User};
use crate::password::{PasswordError, PasswordHasher};
use crate::store::{StoreError, UserRepository};

/// Message returned on a successful login.
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";

/// Errors from account operations.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("Username already registered")]
    UsernameTaken,

    #[error("Email already registered")]
    EmailTaken,

    /// Unknown user, wrong password and inactive account all look the same.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for AccountError {
    fn from(err: StoreError) -> Self {
        match &err {
            StoreError::UniqueViolation(msg) if msg.contains("users.email") => {
                AccountError::EmailTaken
            }
            StoreError::UniqueViolation(msg) if msg.contains("users.username") => {
                AccountError::UsernameTaken
            }
            _ => AccountError::Store(err),
        }
    }
}

/// Result of a successful login. No session is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub message: &'static str,
    pub user_id: i64,
}

/// Registers users and checks their credentials.
#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
}

impl AccountService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self {
            users,
            hasher: PasswordHasher::new(),
        }
    }

    /// Register a new user with a hashed password.
    #[instrument(skip_all, fields(username = %username))]
    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AccountError> {
        let new_user = NewUser::new(username, email, password)?;

        if self.users.username_exists(&new_user.username).await? {
            return Err(AccountError::UsernameTaken);
        }
        if self.users.email_exists(new_user.email.as_str()).await? {
            return Err(AccountError::EmailTaken);
        }

        let hash = self.hasher.hash(&new_user.password)?;
        let user = self
            .users
            .insert(&new_user.username, new_user.email.as_str(), &hash)
            .await?;

        info!(user_id = user.id, "user registered");
        Ok(user)
    }

    /// Check a username and password.
    #[instrument(skip_all, fields(username = %username))]
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AccountError> {
        let attempt = LoginAttempt::new(username, password)?;

        let Some(credentials) = self.users.find_credentials(&attempt.username).await? else {
            self.hasher.verify_dummy(&attempt.password);
            return Err(AccountError::InvalidCredentials);
        };

        if !self
            .hasher
            .verify(&attempt.password, &credentials.password_hash)?
        {
            return Err(AccountError::InvalidCredentials);
        }

        if !credentials.is_active {
            return Err(AccountError::InvalidCredentials);
        }

        Ok(LoginOutcome {
            message: LOGIN_SUCCESS_MESSAGE,
            user_id: credentials.user_id,
        })
    }
}

impl std::fmt::Debug for AccountService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountService").finish_non_exhaustive()
    }
}

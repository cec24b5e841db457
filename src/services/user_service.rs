//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.
//! Owns the username uniqueness rule and the password transition rules.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateUser, PasswordChange, PasswordEncoder, User, UserRole};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
///
/// Inputs are expected to have passed field validation already.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new client user
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;

    /// Get user by ID
    async fn find_by_id(&self, id: i64) -> AppResult<User>;

    /// Get user by username
    async fn find_by_username(&self, username: &str) -> AppResult<User>;

    /// List all users, ordered by id
    async fn list_all(&self) -> AppResult<Vec<User>>;

    /// Replace a user's password after checking the current one
    async fn change_password(&self, id: i64, change: PasswordChange) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    encoder: Arc<dyn PasswordEncoder>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repo: Arc<dyn UserRepository>, encoder: Arc<dyn PasswordEncoder>) -> Self {
        Self { repo, encoder }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        // Fast path; the unique index still decides on a race
        if self.repo.exists_by_username(&input.username).await? {
            return Err(AppError::UniqueConstraintViolation(input.username));
        }

        let password_hash = self.encoder.hash(&input.password)?;
        let user = self
            .repo
            .insert(input.username, password_hash, UserRole::default())
            .await?;

        tracing::info!(user_id = user.id, username = %user.username, "User created");
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(format!("User id={}", id))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<User> {
        self.repo
            .find_by_username(username)
            .await?
            .ok_or_not_found(format!("User '{}'", username))
    }

    async fn list_all(&self) -> AppResult<Vec<User>> {
        self.repo.find_all().await
    }

    async fn change_password(&self, id: i64, change: PasswordChange) -> AppResult<()> {
        let mut user = self.find_by_id(id).await?;

        if change.new_password != change.confirm_new_password {
            tracing::warn!(user_id = id, "New password and confirmation differ");
            return Err(AppError::PasswordMismatch);
        }

        if !self
            .encoder
            .matches(&change.current_password, &user.password_hash)
        {
            tracing::warn!(user_id = id, "Current password does not match");
            return Err(AppError::PasswordMismatch);
        }

        let password_hash = self.encoder.hash(&change.new_password)?;
        user.replace_password_hash(password_hash);
        self.repo.save(&user).await?;

        tracing::info!(user_id = id, "Password changed");
        Ok(())
    }
}

//! Domain layer - Core business entities and rules
//!
//! This module contains the user model, role projection, password hashing
//! and the field validation rules, independent of HTTP and storage.

pub mod password;
pub mod role;
pub mod user;
pub mod validation;

pub use password::{Argon2Encoder, PasswordEncoder};
pub use role::UserRole;
pub use user::{CreateUser, PasswordChange, User, UserResponse};
pub use validation::validate_request;

#[cfg(any(test, feature = "test-utils"))]
pub use password::MockPasswordEncoder;

//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::role::UserRole;
use super::validation::USERNAME_REGEX;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Replace the stored digest after a password change
    pub fn replace_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}

/// User creation request
#[derive(Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    /// Login name, an email address
    #[validate(
        length(max = 100, message = "Username must have at most 100 characters"),
        regex(path = *USERNAME_REGEX, message = "Username must be a valid email address")
    )]
    #[schema(example = "tody@email.com")]
    pub username: String,
    /// Password (exactly 6 characters)
    #[validate(length(equal = 6, message = "Password must have exactly 6 characters"))]
    #[schema(example = "123456", min_length = 6, max_length = 6)]
    pub password: String,
}

// Don't expose the password in debug output
impl std::fmt::Debug for CreateUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUser")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Password change request. Transient, never persisted.
#[derive(Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PasswordChange {
    /// Password currently stored
    #[validate(length(equal = 6, message = "Password must have exactly 6 characters"))]
    #[schema(example = "123456", min_length = 6, max_length = 6)]
    pub current_password: String,
    /// Replacement password
    #[validate(length(equal = 6, message = "Password must have exactly 6 characters"))]
    #[schema(example = "654321", min_length = 6, max_length = 6)]
    pub new_password: String,
    /// Must repeat `new_password`
    #[validate(length(equal = 6, message = "Password must have exactly 6 characters"))]
    #[schema(example = "654321", min_length = 6, max_length = 6)]
    pub confirm_new_password: String,
}

impl std::fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordChange")
            .field("current_password", &"[REDACTED]")
            .field("new_password", &"[REDACTED]")
            .field("confirm_new_password", &"[REDACTED]")
            .finish()
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = 100)]
    pub id: i64,
    /// Login name
    #[schema(example = "ana@email.com")]
    pub username: String,
    /// Role display name
    #[schema(example = "CLIENTE")]
    pub role: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role.display_name().to_string(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            role: user.role.display_name().to_string(),
            username: user.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> User {
        let now = Utc::now();
        User {
            id: 100,
            username: "ana@email.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            role,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_response_projects_role_and_hides_digest() {
        let response = UserResponse::from(&user(UserRole::Admin));
        assert_eq!(response.id, 100);
        assert_eq!(response.username, "ana@email.com");
        assert_eq!(response.role, "ADMIN");

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("argon2"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_owned_and_borrowed_conversions_agree() {
        let u = user(UserRole::Cliente);
        assert_eq!(UserResponse::from(&u), UserResponse::from(u.clone()));
        assert_eq!(UserResponse::from(u).role, "CLIENTE");
    }

    #[test]
    fn test_replace_password_hash_touches_updated_at() {
        let mut u = user(UserRole::Cliente);
        let before = u.updated_at;
        u.replace_password_hash("$argon2id$other".to_string());
        assert_eq!(u.password_hash, "$argon2id$other");
        assert!(u.updated_at >= before);
        assert_eq!(u.created_at, before);
    }

    #[test]
    fn test_requests_redact_passwords_in_debug() {
        let create = CreateUser {
            username: "tody@email.com".to_string(),
            password: "123456".to_string(),
        };
        let printed = format!("{:?}", create);
        assert!(printed.contains("tody@email.com"));
        assert!(!printed.contains("123456"));

        let change = PasswordChange {
            current_password: "123456".to_string(),
            new_password: "654321".to_string(),
            confirm_new_password: "654321".to_string(),
        };
        let printed = format!("{:?}", change);
        assert!(!printed.contains("123456"));
        assert!(!printed.contains("654321"));
    }
}

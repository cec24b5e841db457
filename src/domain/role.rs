//! User roles and their public projection.
//!
//! Roles are stored with an internal `ROLE_` prefix (`ROLE_ADMIN`) and
//! exposed without it (`ADMIN`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{ROLE_ADMIN, ROLE_CLIENTE, ROLE_PREFIX};
use crate::errors::{AppError, AppResult};

/// User roles enumeration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum UserRole {
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    #[default]
    #[serde(rename = "ROLE_CLIENTE")]
    Cliente,
}

impl UserRole {
    /// Internal tag as stored in the database
    pub fn tag(&self) -> &'static str {
        match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::Cliente => ROLE_CLIENTE,
        }
    }

    /// Parse a stored tag.
    ///
    /// # Errors
    /// An unknown tag means the stored data broke the role invariant and is
    /// reported as an internal error, never as a client error.
    pub fn from_tag(tag: &str) -> AppResult<Self> {
        match tag {
            ROLE_ADMIN => Ok(UserRole::Admin),
            ROLE_CLIENTE => Ok(UserRole::Cliente),
            other => Err(AppError::internal(format!("Unknown role tag: {}", other))),
        }
    }

    /// Public display name: the tag without its internal prefix
    pub fn display_name(&self) -> &'static str {
        let tag = self.tag();
        tag.strip_prefix(ROLE_PREFIX).unwrap_or(tag)
    }

    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VALID_ROLES;

    #[test]
    fn test_display_name_strips_prefix() {
        assert_eq!(UserRole::Admin.display_name(), "ADMIN");
        assert_eq!(UserRole::Cliente.display_name(), "CLIENTE");
    }

    #[test]
    fn test_projection_from_stored_tag() {
        assert_eq!(UserRole::from_tag("ROLE_ADMIN").unwrap().display_name(), "ADMIN");
        assert_eq!(UserRole::from_tag("ROLE_CLIENTE").unwrap().display_name(), "CLIENTE");
    }

    #[test]
    fn test_every_valid_tag_round_trips() {
        for tag in VALID_ROLES {
            assert_eq!(UserRole::from_tag(tag).unwrap().tag(), *tag);
        }
    }

    #[test]
    fn test_unknown_tag_is_internal_error() {
        for tag in ["ADMIN", "role_admin", "ROLE_GUEST", ""] {
            assert!(matches!(UserRole::from_tag(tag), Err(AppError::Internal(_))));
        }
    }

    #[test]
    fn test_default_role_is_cliente() {
        assert_eq!(UserRole::default(), UserRole::Cliente);
        assert!(!UserRole::default().is_admin());
        assert!(UserRole::Admin.is_admin());
    }

    #[test]
    fn test_display_uses_tag() {
        assert_eq!(UserRole::Admin.to_string(), "ROLE_ADMIN");
    }
}

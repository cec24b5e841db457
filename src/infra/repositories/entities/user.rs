//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{User, UserRole};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    /// Stored role tag, e.g. `ROLE_CLIENTE`
    pub role: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity.
/// Fails only when the stored role tag is unknown.
impl TryFrom<Model> for User {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(User {
            id: model.id,
            role: UserRole::from_tag(&model.role)?,
            username: model.username,
            password_hash: model.password_hash,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(role: &str) -> Model {
        let now = chrono::Utc::now();
        Model {
            id: 101,
            username: "bia@email.com".to_string(),
            password_hash: "$argon2id$digest".to_string(),
            role: role.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_model_to_domain() {
        let user = User::try_from(model("ROLE_ADMIN")).unwrap();
        assert_eq!(user.id, 101);
        assert_eq!(user.username, "bia@email.com");
        assert_eq!(user.role, UserRole::Admin);
    }

    #[test]
    fn test_unknown_role_tag_is_rejected() {
        assert!(matches!(
            User::try_from(model("ROLE_ROOT")),
            Err(AppError::Internal(_))
        ));
    }
}

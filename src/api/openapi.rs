//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{CreateUser, PasswordChange, UserResponse};
use crate::errors::ErrorMessage;

/// OpenAPI documentation for the parking API user endpoints
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Demo Park API",
        version = "0.1.0",
        description = "User accounts of the parking management API"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        user_handler::create_user,
        user_handler::get_user,
        user_handler::list_users,
        user_handler::change_password,
    ),
    components(
        schemas(
            CreateUser,
            PasswordChange,
            UserResponse,
            ErrorMessage,
        )
    ),
    tags(
        (name = "Users", description = "User registration, lookup and password change")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_user_operations() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        let collection = paths.get("/api/v1/usuarios").unwrap();
        assert!(collection.operations.contains_key(&utoipa::openapi::PathItemType::Post));
        assert!(collection.operations.contains_key(&utoipa::openapi::PathItemType::Get));

        let item = paths.get("/api/v1/usuarios/{id}").unwrap();
        assert!(item.operations.contains_key(&utoipa::openapi::PathItemType::Get));
        assert!(item.operations.contains_key(&utoipa::openapi::PathItemType::Patch));
    }

    #[test]
    fn test_document_has_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.unwrap().schemas;
        for name in ["CreateUser", "PasswordChange", "UserResponse", "ErrorMessage"] {
            assert!(schemas.contains_key(name), "missing schema {}", name);
        }
    }
}

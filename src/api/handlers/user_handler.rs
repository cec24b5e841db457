//! User handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::{PathId, ValidatedJson};
use crate::api::AppState;
use crate::domain::{CreateUser, PasswordChange, UserResponse};
use crate::errors::{AppResult, ErrorMessage};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user).get(list_users))
        .route("/:id", get(get_user).patch(change_password))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/v1/usuarios",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 409, description = "Username already registered", body = ErrorMessage),
        (status = 422, description = "Invalid field(s)", body = ErrorMessage)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUser>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.user_service.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/v1/usuarios/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorMessage)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.find_by_id(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/v1/usuarios",
    tag = "Users",
    responses(
        (status = 200, description = "All registered users", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_all().await?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// Change a user's password
#[utoipa::path(
    patch,
    path = "/api/v1/usuarios/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = PasswordChange,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "Password does not match", body = ErrorMessage),
        (status = 404, description = "User not found", body = ErrorMessage),
        (status = 422, description = "Invalid field(s)", body = ErrorMessage)
    )
)]
pub async fn change_password(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(payload): ValidatedJson<PasswordChange>,
) -> AppResult<StatusCode> {
    state.user_service.change_password(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

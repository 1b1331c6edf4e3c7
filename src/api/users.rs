//! User management endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::envelope::Envelope,
    models::user::{CreateUser, UpdateUser},
    AppState,
};

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "List of users", body = Envelope)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Envelope> {
    state.services.users.get_all_users().await
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = Envelope),
        (status = 400, description = "Invalid input"),
        (status = 406, description = "Email already registered", body = Envelope)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUser>,
) -> AppResult<Envelope> {
    state.services.users.add_user(payload).await
}

/// Fetch a user by email
#[utoipa::path(
    get,
    path = "/users/{email}",
    tag = "users",
    params(
        ("email" = String, Path, description = "User email")
    ),
    responses(
        (status = 200, description = "User details", body = Envelope),
        (status = 404, description = "User not found", body = Envelope)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Envelope> {
    state.services.users.get_user(&email).await
}

/// Update an existing user
#[utoipa::path(
    put,
    path = "/users/{email}",
    tag = "users",
    params(
        ("email" = String, Path, description = "User email")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = Envelope),
        (status = 404, description = "User not found", body = Envelope)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<UpdateUser>,
) -> AppResult<Envelope> {
    state.services.users.update_user(&email, payload).await
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{email}",
    tag = "users",
    params(
        ("email" = String, Path, description = "User email")
    ),
    responses(
        (status = 200, description = "User deleted", body = Envelope),
        (status = 404, description = "User not found", body = Envelope)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Envelope> {
    state.services.users.remove_user(&email).await
}

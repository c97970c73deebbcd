use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        user::{UpdateUserDto, UserDto},
    },
    server::{
        controller::param::SearchParams,
        error::AppError,
        middleware::auth::AuthGuard,
        service::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List users, optionally filtered by name.
///
/// Users are created through `/auth/register`; this resource has no create endpoint.
///
/// # Returns
/// - `200 OK` - Matching users
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Successfully retrieved users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let users = service.get_all(params.search_term.as_deref()).await?;

    Ok((StatusCode::OK, Json(users)))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.get(id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Update a user's profile.
///
/// Changing the email also changes the login email.
///
/// # Access Control
/// - Requires a valid bearer token
///
/// # Returns
/// - `204 No Content` - User updated
/// - `400 Bad Request` - Invalid user data
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No user with that id
/// - `409 Conflict` - Email already registered to another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User id")
    ),
    request_body = UpdateUserDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Successfully updated user"),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt, &headers).require()?;

    payload.validate()?;

    let service = UserService::new(&state.db);

    service.update(id, payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a user together with their role assignments and advertisements.
///
/// # Access Control
/// - Requires a valid bearer token
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User id")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Successfully deleted user"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt, &headers).require()?;

    let service = UserService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

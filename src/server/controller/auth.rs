use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, RegisterDto, TokenDto},
        user::UserDto,
    },
    server::{
        controller::param::location,
        error::AppError,
        model::auth::{Credentials, RegistrationParams},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with email and password.
///
/// Issues a bearer token valid for 1 day, or 30 days when `rememberMe` is set.
/// An unknown email and a wrong password produce the same response.
///
/// # Arguments
/// - `state` - Application state containing the database connection and JWT service
/// - `payload` - Email, password and `rememberMe` flag
///
/// # Returns
/// - `200 OK` - Token issued
/// - `400 Bad Request` - Malformed email or empty password
/// - `401 Unauthorized` - Invalid username or password
/// - `500 Internal Server Error` - Database or token encoding error
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = TokenDto),
        (status = 400, description = "Invalid login data", body = ErrorDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = AuthService::new(&state.db, &state.jwt, state.password_cost);

    let token = service
        .authenticate(Credentials::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(TokenDto { token })))
}

/// Register a new account.
///
/// The new user receives the "User" role.
///
/// # Returns
/// - `201 Created` - User registered; `Location` points at `/users/{id}`
/// - `400 Bad Request` - Invalid data, weak password or email already registered
/// - `500 Internal Server Error` - Role assignment or database error
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Successfully registered", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = AuthService::new(&state.db, &state.jwt, state.password_cost);

    let user = service
        .register(RegistrationParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        [(LOCATION, location("users", &user.id))],
        Json(user),
    ))
}

use axum::{
    extract::{Path, Query, State},
    http::{header::LOCATION, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        advertisement::{AdvertisementDto, CreateAdvertisementDto, UpdateAdvertisementDto},
        api::ErrorDto,
    },
    server::{
        controller::param::{location, SearchParams},
        error::AppError,
        middleware::auth::AuthGuard,
        service::AdvertisementService,
        state::AppState,
    },
};

/// Tag for grouping advertisement endpoints in OpenAPI documentation
pub static ADVERTISEMENT_TAG: &str = "advertisement";

/// List advertisements, optionally filtered by title.
///
/// Each advertisement is returned with its owner, category and condition.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Optional `searchTerm` matched case-insensitively against the title
///
/// # Returns
/// - `200 OK` - Matching advertisements
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/advertisements",
    tag = ADVERTISEMENT_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Successfully retrieved advertisements", body = Vec<AdvertisementDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_advertisements(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdvertisementService::new(&state.db);

    let advertisements = service.get_all(params.search_term.as_deref()).await?;

    Ok((StatusCode::OK, Json(advertisements)))
}

/// Get an advertisement by id, with its owner, category and condition.
///
/// # Returns
/// - `200 OK` - Advertisement found
/// - `404 Not Found` - No advertisement with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/advertisements/{id}",
    tag = ADVERTISEMENT_TAG,
    params(
        ("id" = i32, Path, description = "Advertisement id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved advertisement", body = AdvertisementDto),
        (status = 404, description = "Advertisement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_advertisement(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdvertisementService::new(&state.db);

    let advertisement = service.get(id).await?;

    Ok((StatusCode::OK, Json(advertisement)))
}

/// Create an advertisement.
///
/// The referenced user, category and condition must exist.
///
/// # Access Control
/// - Requires a valid bearer token
///
/// # Returns
/// - `201 Created` - Advertisement created; `Location` points at the new row
/// - `400 Bad Request` - Invalid data or a reference to a missing row
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/advertisements",
    tag = ADVERTISEMENT_TAG,
    request_body = CreateAdvertisementDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Successfully created advertisement", body = AdvertisementDto),
        (status = 400, description = "Invalid advertisement data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_advertisement(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateAdvertisementDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt, &headers).require()?;

    payload.validate()?;

    let service = AdvertisementService::new(&state.db);

    let (advertisement, id) = service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        [(LOCATION, location("advertisements", id))],
        Json(advertisement),
    ))
}

/// Update an advertisement.
///
/// # Access Control
/// - Requires a valid bearer token
///
/// # Returns
/// - `204 No Content` - Advertisement updated
/// - `400 Bad Request` - Invalid data or a reference to a missing row
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No advertisement with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/advertisements/{id}",
    tag = ADVERTISEMENT_TAG,
    params(
        ("id" = i32, Path, description = "Advertisement id")
    ),
    request_body = UpdateAdvertisementDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Successfully updated advertisement"),
        (status = 400, description = "Invalid advertisement data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Advertisement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_advertisement(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAdvertisementDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt, &headers).require()?;

    payload.validate()?;

    let service = AdvertisementService::new(&state.db);

    service.update(id, payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete an advertisement.
///
/// # Access Control
/// - Requires a valid bearer token
///
/// # Returns
/// - `204 No Content` - Advertisement deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No advertisement with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/advertisements/{id}",
    tag = ADVERTISEMENT_TAG,
    params(
        ("id" = i32, Path, description = "Advertisement id")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Successfully deleted advertisement"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Advertisement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_advertisement(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt, &headers).require()?;

    let service = AdvertisementService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

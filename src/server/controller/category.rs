use axum::{
    extract::{Path, Query, State},
    http::{header::LOCATION, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
    },
    server::{
        controller::param::{location, SearchParams},
        error::AppError,
        middleware::auth::AuthGuard,
        service::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// List categories, optionally filtered by name.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Optional `searchTerm` matched case-insensitively against the name
///
/// # Returns
/// - `200 OK` - Matching categories
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/categories",
    tag = CATEGORY_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Successfully retrieved categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let categories = service.get_all(params.search_term.as_deref()).await?;

    Ok((StatusCode::OK, Json(categories)))
}

/// Get a category by id.
///
/// # Returns
/// - `200 OK` - Category found
/// - `404 Not Found` - No category with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved category", body = CategoryDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let category = service.get(id).await?;

    Ok((StatusCode::OK, Json(category)))
}

/// Create a category.
///
/// # Access Control
/// - Requires a valid bearer token
///
/// # Returns
/// - `201 Created` - Category created; `Location` points at the new row
/// - `400 Bad Request` - Invalid category data
/// - `401 Unauthorized` - Missing or invalid token
/// - `409 Conflict` - A category with that name already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Successfully created category", body = CategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 409, description = "Category name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt, &headers).require()?;

    payload.validate()?;

    let service = CategoryService::new(&state.db);

    let (category, id) = service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        [(LOCATION, location("categories", id))],
        Json(category),
    ))
}

/// Update a category.
///
/// Replaces the name and description; id and creation date are kept.
///
/// # Access Control
/// - Requires a valid bearer token
///
/// # Returns
/// - `204 No Content` - Category updated
/// - `400 Bad Request` - Invalid category data
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No category with that id
/// - `409 Conflict` - Another category already uses that name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    request_body = UpdateCategoryDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Successfully updated category"),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "Category name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt, &headers).require()?;

    payload.validate()?;

    let service = CategoryService::new(&state.db);

    service.update(id, payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a category.
///
/// Advertisements listed under the category are removed with it.
///
/// # Access Control
/// - Requires a valid bearer token
///
/// # Returns
/// - `204 No Content` - Category deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No category with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Successfully deleted category"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt, &headers).require()?;

    let service = CategoryService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

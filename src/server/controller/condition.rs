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
        condition::{ConditionDto, CreateConditionDto, UpdateConditionDto},
    },
    server::{
        controller::param::{location, SearchParams},
        error::AppError,
        middleware::auth::AuthGuard,
        service::ConditionService,
        state::AppState,
    },
};

/// Tag for grouping condition endpoints in OpenAPI documentation
pub static CONDITION_TAG: &str = "condition";

/// List item conditions, optionally filtered by name.
#[utoipa::path(
    get,
    path = "/conditions",
    tag = CONDITION_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Successfully retrieved conditions", body = Vec<ConditionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_conditions(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = ConditionService::new(&state.db);

    let conditions = service.get_all(params.search_term.as_deref()).await?;

    Ok((StatusCode::OK, Json(conditions)))
}

/// Get an item condition by id.
#[utoipa::path(
    get,
    path = "/conditions/{id}",
    tag = CONDITION_TAG,
    params(
        ("id" = i32, Path, description = "Condition id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved condition", body = ConditionDto),
        (status = 404, description = "Condition not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_condition(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ConditionService::new(&state.db);

    let condition = service.get(id).await?;

    Ok((StatusCode::OK, Json(condition)))
}

#[utoipa::path(
    post,
    path = "/conditions",
    tag = CONDITION_TAG,
    request_body = CreateConditionDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Successfully created condition", body = ConditionDto),
        (status = 400, description = "Invalid condition data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 409, description = "Condition name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_condition(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateConditionDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt, &headers).require()?;

    payload.validate()?;

    let service = ConditionService::new(&state.db);

    let (condition, id) = service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        [(LOCATION, location("conditions", id))],
        Json(condition),
    ))
}

#[utoipa::path(
    put,
    path = "/conditions/{id}",
    tag = CONDITION_TAG,
    params(
        ("id" = i32, Path, description = "Condition id")
    ),
    request_body = UpdateConditionDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Successfully updated condition"),
        (status = 400, description = "Invalid condition data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Condition not found", body = ErrorDto),
        (status = 409, description = "Condition name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_condition(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateConditionDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt, &headers).require()?;

    payload.validate()?;

    let service = ConditionService::new(&state.db);

    service.update(id, payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/conditions/{id}",
    tag = CONDITION_TAG,
    params(
        ("id" = i32, Path, description = "Condition id")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Successfully deleted condition"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Condition not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_condition(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt, &headers).require()?;

    let service = ConditionService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

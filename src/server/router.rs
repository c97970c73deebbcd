use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{advertisement, auth, category, condition, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SellnBuy API",
        description = "Classified advertisements marketplace"
    ),
    modifiers(&BearerSecurity),
    tags(
        (name = "advertisement", description = "Classified advertisements"),
        (name = "auth", description = "Login and registration"),
        (name = "category", description = "Advertisement categories"),
        (name = "condition", description = "Item condition tiers"),
        (name = "user", description = "Registered users")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by the mutating endpoints.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Collects every endpoint together with its OpenAPI description.
fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            category::get_categories,
            category::create_category
        ))
        .routes(routes!(
            category::get_category,
            category::update_category,
            category::delete_category
        ))
        .routes(routes!(
            condition::get_conditions,
            condition::create_condition
        ))
        .routes(routes!(
            condition::get_condition,
            condition::update_condition,
            condition::delete_condition
        ))
        .routes(routes!(
            advertisement::get_advertisements,
            advertisement::create_advertisement
        ))
        .routes(routes!(
            advertisement::get_advertisement,
            advertisement::update_advertisement,
            advertisement::delete_advertisement
        ))
        .routes(routes!(user::get_users))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(auth::login))
        .routes(routes!(auth::register))
}

/// Builds the application router with Swagger UI, request tracing and CORS.
///
/// # Arguments
/// - `state` - Shared application state handed to every handler
///
/// # Returns
/// - `Router` - Ready to be served
pub fn router(state: AppState) -> Router {
    let (router, api) = api_router().split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

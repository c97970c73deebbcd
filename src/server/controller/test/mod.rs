use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{router::router, service::jwt::JwtService, state::AppState};


const SECRET: &str = "router-test-secret";

fn app(db: &DatabaseConnection) -> Router {
    router(AppState::new(
        db.clone(),
        JwtService::new(SECRET),
        factory::user::TEST_BCRYPT_COST,
    ))
}

fn bearer() -> String {
    let token = JwtService::new(SECRET)
        .generate_token("router-test-user", false)
        .unwrap();

    format!("Bearer {}", token)
}

fn request(method: Method, uri: &str, body: Option<Value>, authorized: bool) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if authorized {
        builder = builder.header(header::AUTHORIZATION, bearer());
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

async fn json_body(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
}

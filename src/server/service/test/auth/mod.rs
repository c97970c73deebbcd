use crate::server::{
    error::{auth::AuthError, registration::RegistrationError, AppError},
    model::auth::{Credentials, RegistrationParams},
    service::{auth::AuthService, jwt::JwtService},
};
use entity::prelude::{User, UserRole};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, fixture};

mod authenticate;

const SECRET: &str = "service-test-secret";

fn jwt() -> JwtService {
    JwtService::new(SECRET)
}

fn registration(email: &str, password: &str) -> RegistrationParams {
    RegistrationParams {
        name: "New Seller".to_string(),
        phone_number: Some("+44 20 7946 0000".to_string()),
        email: email.to_string(),
        password: password.to_string(),
    }
}

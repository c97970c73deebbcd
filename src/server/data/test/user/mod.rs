use crate::server::data::{
    repository::EntityRepository,
    user::{CreateUserParams, UserRepository},
    Repository,
};
use chrono::Utc;
use entity::prelude::User;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_by_email;
mod generic;

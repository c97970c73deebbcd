use crate::{
    model::category::{CreateCategoryDto, UpdateCategoryDto},
    server::{error::AppError, service::CategoryService},
};
use chrono::Utc;
use entity::prelude::Category;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get;
mod get_all;

use crate::{
    model::advertisement::{CreateAdvertisementDto, UpdateAdvertisementDto},
    server::{error::AppError, service::AdvertisementService},
};
use entity::prelude::Advertisement;
use rust_decimal::Decimal;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get;
mod get_all;
mod update;

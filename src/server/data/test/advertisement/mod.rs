use crate::server::{
    data::{advertisement::AdvertisementRepository, Repository},
    model::advertisement::AdvertisementRecord,
};
use rust_decimal::Decimal;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, fixture};

mod create;
mod get;
mod get_all;
mod update;

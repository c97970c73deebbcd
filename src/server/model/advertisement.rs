//! Advertisement domain model.
//!
//! An advertisement is stored with its three foreign keys and read back together with
//! the rows they reference, so the record type carries the optional related models.

use chrono::{DateTime, Utc};

use crate::{
    model::advertisement::{AdvertisementDto, CreateAdvertisementDto, UpdateAdvertisementDto},
    server::model::{
        category::CategoryResource,
        condition::ConditionResource,
        resource::{CreatableResource, Resource},
        user::UserResource,
    },
};

/// Advertisement row with its eagerly loaded owner, category and condition.
///
/// The related models are `None` only for records that have not been persisted yet.
#[derive(Debug, Clone)]
pub struct AdvertisementRecord {
    pub advertisement: entity::advertisement::Model,
    pub user: Option<entity::user::Model>,
    pub category: Option<entity::category::Model>,
    pub condition: Option<entity::condition::Model>,
}

impl AdvertisementRecord {
    /// Wraps a bare advertisement row without related models.
    pub fn new(advertisement: entity::advertisement::Model) -> Self {
        Self {
            advertisement,
            user: None,
            category: None,
            condition: None,
        }
    }
}

pub struct AdvertisementResource;

impl Resource for AdvertisementResource {
    const NAME: &'static str = "Advertisement";

    type Record = AdvertisementRecord;
    type Id = i32;
    type ReadDto = AdvertisementDto;
    type UpdateDto = UpdateAdvertisementDto;

    fn id(record: &AdvertisementRecord) -> i32 {
        record.advertisement.id
    }

    fn search_field(dto: &AdvertisementDto) -> &str {
        &dto.title
    }

    fn to_dto(record: AdvertisementRecord) -> AdvertisementDto {
        let ad = record.advertisement;

        AdvertisementDto {
            id: ad.id,
            title: ad.title,
            description: ad.description,
            price: ad.price,
            created_date: ad.created_date,
            user_id: ad.user_id,
            user: record.user.map(UserResource::into_dto),
            category_id: ad.category_id,
            category: record.category.map(CategoryResource::to_dto),
            condition_id: ad.condition_id,
            condition: record.condition.map(ConditionResource::to_dto),
        }
    }

    fn apply_update(record: &mut AdvertisementRecord, dto: UpdateAdvertisementDto) {
        let ad = &mut record.advertisement;
        ad.title = dto.title;
        ad.description = dto.description;
        ad.price = dto.price;
        ad.user_id = dto.user_id;
        ad.category_id = dto.category_id;
        ad.condition_id = dto.condition_id;
    }
}

impl CreatableResource for AdvertisementResource {
    type CreateDto = CreateAdvertisementDto;

    fn from_create(dto: CreateAdvertisementDto, created_date: DateTime<Utc>) -> AdvertisementRecord {
        AdvertisementRecord::new(entity::advertisement::Model {
            id: 0,
            title: dto.title,
            description: dto.description,
            price: dto.price,
            created_date,
            user_id: dto.user_id,
            category_id: dto.category_id,
            condition_id: dto.condition_id,
        })
    }
}

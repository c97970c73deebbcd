use chrono::{DateTime, Utc};

use crate::{
    model::condition::{ConditionDto, CreateConditionDto, UpdateConditionDto},
    server::model::resource::{CreatableResource, Resource},
};

pub struct ConditionResource;

impl Resource for ConditionResource {
    const NAME: &'static str = "Condition";

    type Record = entity::condition::Model;
    type Id = i32;
    type ReadDto = ConditionDto;
    type UpdateDto = UpdateConditionDto;

    fn id(record: &Self::Record) -> i32 {
        record.id
    }

    fn search_field(dto: &ConditionDto) -> &str {
        &dto.name
    }

    fn to_dto(record: Self::Record) -> ConditionDto {
        ConditionDto {
            id: record.id,
            name: record.name,
            description: record.description,
            created_date: record.created_date,
        }
    }

    fn apply_update(record: &mut Self::Record, dto: UpdateConditionDto) {
        record.name = dto.name;
        record.description = dto.description;
    }
}

impl CreatableResource for ConditionResource {
    type CreateDto = CreateConditionDto;

    fn from_create(dto: CreateConditionDto, created_date: DateTime<Utc>) -> Self::Record {
        entity::condition::Model {
            id: 0,
            name: dto.name,
            description: dto.description,
            created_date,
        }
    }
}

use chrono::{DateTime, Utc};

use crate::{
    model::category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
    server::model::resource::{CreatableResource, Resource},
};

pub struct CategoryResource;

impl Resource for CategoryResource {
    const NAME: &'static str = "Category";

    type Record = entity::category::Model;
    type Id = i32;
    type ReadDto = CategoryDto;
    type UpdateDto = UpdateCategoryDto;

    fn id(record: &Self::Record) -> i32 {
        record.id
    }

    fn search_field(dto: &CategoryDto) -> &str {
        &dto.name
    }

    fn to_dto(record: Self::Record) -> CategoryDto {
        CategoryDto {
            id: record.id,
            name: record.name,
            description: record.description,
            created_date: record.created_date,
        }
    }

    fn apply_update(record: &mut Self::Record, dto: UpdateCategoryDto) {
        record.name = dto.name;
        record.description = dto.description;
    }
}

impl CreatableResource for CategoryResource {
    type CreateDto = CreateCategoryDto;

    fn from_create(dto: CreateCategoryDto, created_date: DateTime<Utc>) -> Self::Record {
        entity::category::Model {
            id: 0,
            name: dto.name,
            description: dto.description,
            created_date,
        }
    }
}

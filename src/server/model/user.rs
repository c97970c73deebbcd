use crate::{
    model::user::{UpdateUserDto, UserDto},
    server::{model::resource::Resource, util::email::normalize_email},
};

pub struct UserResource;

impl UserResource {
    pub fn into_dto(record: entity::user::Model) -> UserDto {
        UserDto {
            id: record.id,
            name: record.name,
            bio: record.bio,
            phone_number: record.phone_number,
            email: record.email,
            created_date: record.created_date,
        }
    }
}

impl Resource for UserResource {
    const NAME: &'static str = "User";

    type Record = entity::user::Model;
    type Id = String;
    type ReadDto = UserDto;
    type UpdateDto = UpdateUserDto;

    fn id(record: &Self::Record) -> String {
        record.id.clone()
    }

    fn search_field(dto: &UserDto) -> &str {
        &dto.name
    }

    fn to_dto(record: Self::Record) -> UserDto {
        Self::into_dto(record)
    }

    /// `user_name` and `normalized_email` always follow `email`.
    fn apply_update(record: &mut Self::Record, dto: UpdateUserDto) {
        record.name = dto.name;
        record.bio = dto.bio;
        record.phone_number = dto.phone_number;
        record.user_name = dto.email.clone();
        record.normalized_email = normalize_email(&dto.email);
        record.email = dto.email;
    }
}

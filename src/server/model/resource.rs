use chrono::{DateTime, Utc};

/// Configuration of one resource type for the generic service.
///
/// Implementors are zero-sized markers. `Record` is what the repository stores and
/// returns, which for most resources is the SeaORM model itself.
pub trait Resource: Send + Sync + 'static {
    /// Display name used in NotFound messages, e.g. `"Category"`.
    const NAME: &'static str;

    type Record: Send + Sync;
    type Id: Clone + Send + Sync;
    type ReadDto: Send;
    type UpdateDto: Send;

    fn id(record: &Self::Record) -> Self::Id;

    /// Text field matched by `searchTerm`.
    fn search_field(dto: &Self::ReadDto) -> &str;

    fn to_dto(record: Self::Record) -> Self::ReadDto;

    /// Replaces every mutable field of `record` with the values from `dto`.
    ///
    /// Must leave the id and `created_date` untouched.
    fn apply_update(record: &mut Self::Record, dto: Self::UpdateDto);
}

/// Resource that may be created through the generic service.
///
/// Users are deliberately not creatable here; registration is their only entry point.
pub trait CreatableResource: Resource {
    type CreateDto: Send;

    /// Builds a new, not yet persisted record stamped with `created_date`.
    fn from_create(dto: Self::CreateDto, created_date: DateTime<Utc>) -> Self::Record;
}

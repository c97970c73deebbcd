//! Generic CRUD service shared by every resource type.

use chrono::Utc;
use std::marker::PhantomData;

use crate::server::{
    data::Repository,
    error::AppError,
    model::resource::{CreatableResource, Resource},
};

/// CRUD service for resource `R` backed by repository `Repo`.
///
/// Get, update and delete always fetch the row first and fail with `AppError::NotFound`
/// when it is absent, without touching the store.
pub struct ResourceService<R, Repo> {
    repo: Repo,
    resource: PhantomData<R>,
}

impl<R, Repo> ResourceService<R, Repo>
where
    R: Resource,
    Repo: Repository<R::Record, Id = R::Id>,
{
    /// Creates a service over the given repository.
    pub fn with_repository(repo: Repo) -> Self {
        Self {
            repo,
            resource: PhantomData,
        }
    }

    fn not_found() -> AppError {
        AppError::NotFound(format!("{} not found", R::NAME))
    }

    /// Returns every row, optionally filtered by `search_term`.
    ///
    /// Filtering happens after conversion to DTOs: a row is kept when its search field
    /// contains the term, ignoring case. A missing or blank term returns every row.
    ///
    /// # Arguments
    /// - `search_term` - Optional substring to match against the resource's search field
    ///
    /// # Returns
    /// - `Ok(Vec<ReadDto>)` - Matching rows in the backend's order
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_all(&self, search_term: Option<&str>) -> Result<Vec<R::ReadDto>, AppError> {
        let dtos = self.repo.get_all().await?.into_iter().map(R::to_dto);

        let Some(term) = search_term.filter(|term| !term.trim().is_empty()) else {
            return Ok(dtos.collect());
        };

        let term = term.to_lowercase();

        Ok(dtos
            .filter(|dto| R::search_field(dto).to_lowercase().contains(&term))
            .collect())
    }

    /// Returns the row with `id`.
    ///
    /// # Returns
    /// - `Ok(ReadDto)` - Row found
    /// - `Err(AppError::NotFound)` - No row with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get(&self, id: R::Id) -> Result<R::ReadDto, AppError> {
        self.repo
            .get(id)
            .await?
            .map(R::to_dto)
            .ok_or_else(Self::not_found)
    }

    /// Replaces the mutable fields of the row with `id` by those in `dto`.
    ///
    /// The stored id and `created_date` are preserved.
    ///
    /// # Returns
    /// - `Ok(())` - Row updated
    /// - `Err(AppError::NotFound)` - No row with that id; nothing written
    /// - `Err(AppError::Conflict)` / `Err(AppError::BadRequest)` - Constraint violation
    pub async fn update(&self, id: R::Id, dto: R::UpdateDto) -> Result<(), AppError> {
        let Some(mut record) = self.repo.get(id).await? else {
            return Err(Self::not_found());
        };

        R::apply_update(&mut record, dto);

        self.repo.update(&record).await?;

        Ok(())
    }

    /// Removes the row with `id`.
    ///
    /// # Returns
    /// - `Ok(())` - Row removed
    /// - `Err(AppError::NotFound)` - No row with that id; nothing removed
    pub async fn delete(&self, id: R::Id) -> Result<(), AppError> {
        if self.repo.get(id.clone()).await?.is_none() {
            return Err(Self::not_found());
        }

        self.repo.delete(id).await?;

        Ok(())
    }
}

impl<R, Repo> ResourceService<R, Repo>
where
    R: CreatableResource,
    Repo: Repository<R::Record, Id = R::Id>,
{
    /// Creates a row from `dto`, stamping `created_date` with the current time.
    ///
    /// # Returns
    /// - `Ok((ReadDto, Id))` - The stored row and its assigned id
    /// - `Err(AppError::Conflict)` - Unique constraint violation
    /// - `Err(AppError::BadRequest)` - Foreign key references a missing row
    pub async fn create(&self, dto: R::CreateDto) -> Result<(R::ReadDto, R::Id), AppError> {
        let mut record = R::from_create(dto, Utc::now());

        self.repo.create(&mut record).await?;

        let id = R::id(&record);

        Ok((R::to_dto(record), id))
    }
}

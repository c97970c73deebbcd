use super::*;

/// Tests creating a category.
///
/// Verifies the returned id matches the DTO's id, that `created_date` is stamped by the
/// service within a second of now, and that a subsequent get returns an equal DTO,
/// creation date included.
///
/// Expected: Ok((dto, id)) with a generated id and a fresh timestamp
#[tokio::test]
async fn creates_category_with_generated_id_and_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CategoryService::new(db);
    let (dto, id) = service
        .create(CreateCategoryDto {
            name: "Electronics".to_string(),
            description: None,
        })
        .await
        .unwrap();

    assert_eq!(dto.id, id);
    assert!(id > 0);
    assert_eq!(dto.name, "Electronics");
    assert!((Utc::now() - dto.created_date).num_seconds().abs() <= 1);

    let fetched = service.get(id).await.unwrap();
    assert_eq!(fetched, dto);

    Ok(())
}

/// Tests creating a second category with an existing name.
///
/// Expected: Err(Conflict) and only the first row stored
#[tokio::test]
async fn fails_on_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CategoryService::new(db);
    let dto = CreateCategoryDto {
        name: "Electronics".to_string(),
        description: None,
    };

    service.create(dto.clone()).await.unwrap();
    let result = service.create(dto).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(Category::find().count(db).await?, 1);

    Ok(())
}

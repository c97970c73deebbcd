use super::*;

/// Tests fetching an existing category.
///
/// Expected: Ok with the stored fields
#[tokio::test]
async fn returns_dto_for_existing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category_named(db, "Books").await?;

    let service = CategoryService::new(db);
    let dto = service.get(category.id).await.unwrap();

    assert_eq!(dto.id, category.id);
    assert_eq!(dto.name, "Books");
    assert_eq!(dto.created_date, category.created_date);

    Ok(())
}

/// Tests fetching a missing category.
///
/// Expected: Err(NotFound) naming the resource
#[tokio::test]
async fn fails_with_not_found_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CategoryService::new(db);
    let result = service.get(404).await;

    match result {
        Err(AppError::NotFound(message)) => assert_eq!(message, "Category not found"),
        other => panic!("expected NotFound, got {:?}", other.map(|dto| dto.id)),
    }

    Ok(())
}

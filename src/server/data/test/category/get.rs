use super::*;

/// Tests fetching an existing row by id.
///
/// Expected: Ok(Some) with the stored row
#[tokio::test]
async fn returns_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;

    let repo = EntityRepository::<Category>::new(db);
    let result = repo.get(category.id).await?;

    assert_eq!(result, Some(category));

    Ok(())
}

/// Tests that a missing id is reported as absent rather than as an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EntityRepository::<Category>::new(db);
    let result = repo.get(999).await?;

    assert!(result.is_none());

    Ok(())
}

use super::*;

/// Tests fetching an advertisement together with its related rows.
///
/// Expected: Ok with nested user, category and condition matching the stored rows
#[tokio::test]
async fn returns_dto_with_related_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, condition, advertisement) =
        factory::helpers::create_advertisement_with_dependencies(db).await?;

    let service = AdvertisementService::new(db);
    let dto = service.get(advertisement.id).await.unwrap();

    assert_eq!(dto.title, advertisement.title);
    assert_eq!(dto.user_id, user.id);
    assert_eq!(dto.user.unwrap().email, user.email);
    assert_eq!(dto.category.unwrap().name, category.name);
    assert_eq!(dto.condition.unwrap().name, condition.name);

    Ok(())
}

/// Tests fetching a missing advertisement.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_with_not_found_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AdvertisementService::new(db);

    assert!(matches!(service.get(1).await, Err(AppError::NotFound(_))));

    Ok(())
}

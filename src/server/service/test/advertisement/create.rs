use super::*;

/// Tests creating an advertisement for existing owner and lookups.
///
/// Verifies that the returned DTO carries the related user, category and condition.
///
/// Expected: Ok with the related DTOs populated
#[tokio::test]
async fn creates_advertisement_with_related_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;
    let condition = factory::condition::create_condition(db).await?;

    let service = AdvertisementService::new(db);
    let (dto, id) = service
        .create(CreateAdvertisementDto {
            title: "Road bike".to_string(),
            description: Some("Carbon frame".to_string()),
            price: Decimal::new(49999, 2),
            user_id: user.id.clone(),
            category_id: category.id,
            condition_id: condition.id,
        })
        .await
        .unwrap();

    assert_eq!(dto.id, id);
    assert_eq!(dto.price, Decimal::new(49999, 2));
    assert_eq!(dto.user.as_ref().map(|u| u.id.as_str()), Some(user.id.as_str()));
    assert_eq!(dto.category.as_ref().map(|c| c.id), Some(category.id));
    assert_eq!(dto.condition.as_ref().map(|c| c.id), Some(condition.id));

    Ok(())
}

/// Tests creating an advertisement that references a missing category.
///
/// Expected: Err(BadRequest) and no row stored
#[tokio::test]
async fn fails_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let condition = factory::condition::create_condition(db).await?;

    let service = AdvertisementService::new(db);
    let result = service
        .create(CreateAdvertisementDto {
            title: "Road bike".to_string(),
            description: None,
            price: Decimal::new(100, 0),
            user_id: user.id,
            category_id: 9999,
            condition_id: condition.id,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(Advertisement::find().count(db).await?, 0);

    Ok(())
}

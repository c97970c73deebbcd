use super::*;

/// Tests moving an advertisement to another category with a new price.
///
/// Expected: Ok with the new fields stored and created_date unchanged
#[tokio::test]
async fn replaces_fields_and_preserves_created_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, condition, advertisement) =
        factory::helpers::create_advertisement_with_dependencies(db).await?;
    let other_category = factory::category::create_category(db).await?;

    let service = AdvertisementService::new(db);
    service
        .update(
            advertisement.id,
            UpdateAdvertisementDto {
                title: "Reduced".to_string(),
                description: None,
                price: Decimal::new(150, 0),
                user_id: user.id,
                category_id: other_category.id,
                condition_id: condition.id,
            },
        )
        .await
        .unwrap();

    let stored = Advertisement::find_by_id(advertisement.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.title, "Reduced");
    assert_eq!(stored.price, Decimal::new(150, 0));
    assert_eq!(stored.category_id, other_category.id);
    assert_eq!(stored.created_date, advertisement.created_date);

    Ok(())
}

/// Tests updating a missing advertisement.
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

    let (user, category, condition, advertisement) =
        factory::helpers::create_advertisement_with_dependencies(db).await?;

    let service = AdvertisementService::new(db);
    let result = service
        .update(
            advertisement.id + 1,
            UpdateAdvertisementDto {
                title: "Ghost".to_string(),
                description: None,
                price: Decimal::new(1, 0),
                user_id: user.id,
                category_id: category.id,
                condition_id: condition.id,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

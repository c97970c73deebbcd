use super::*;

/// Tests that create assigns an id and fills in the related rows.
///
/// Expected: Ok with the record's id set and owner, category and condition loaded
#[tokio::test]
async fn assigns_id_and_loads_related_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;
    let condition = factory::condition::create_condition(db).await?;

    let mut record = AdvertisementRecord::new(
        fixture::advertisement::entity_builder()
            .id(0)
            .title("Road bike")
            .price(Decimal::new(120, 0))
            .user_id(user.id.clone())
            .category_id(category.id)
            .condition_id(condition.id)
            .build(),
    );

    let repo = AdvertisementRepository::new(db);
    repo.create(&mut record).await?;

    assert!(record.advertisement.id > 0);
    assert_eq!(record.advertisement.title, "Road bike");
    assert_eq!(record.advertisement.price, Decimal::new(120, 0));
    assert_eq!(record.user.as_ref().map(|u| &u.id), Some(&user.id));
    assert_eq!(record.category, Some(category));
    assert_eq!(record.condition, Some(condition));

    Ok(())
}

/// Tests that a reference to a missing category is rejected by the backend.
///
/// Expected: Err with a foreign key violation and no stored advertisement
#[tokio::test]
async fn propagates_foreign_key_violation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let condition = factory::condition::create_condition(db).await?;

    let mut record = AdvertisementRecord::new(
        fixture::advertisement::entity_builder()
            .user_id(user.id.clone())
            .category_id(999)
            .condition_id(condition.id)
            .build(),
    );

    let repo = AdvertisementRepository::new(db);
    let err = repo.create(&mut record).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_))
    ));
    assert!(entity::prelude::Advertisement::find()
        .all(db)
        .await?
        .is_empty());

    Ok(())
}

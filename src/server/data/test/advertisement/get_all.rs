use super::*;

/// Tests that every advertisement comes back with its owner, category and condition.
///
/// Expected: Ok with related rows matching each advertisement's foreign keys
#[tokio::test]
async fn loads_related_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, condition, first) =
        factory::helpers::create_advertisement_with_dependencies(db).await?;
    let other_category = factory::category::create_category(db).await?;
    let second =
        factory::advertisement::create_advertisement(db, &user.id, other_category.id, condition.id)
            .await?;

    let repo = AdvertisementRepository::new(db);
    let records = repo.get_all().await?;

    assert_eq!(records.len(), 2);
    for record in &records {
        assert_eq!(record.user.as_ref().unwrap().id, user.id);
        assert_eq!(record.condition.as_ref().unwrap().id, condition.id);
    }

    let first_record = records
        .iter()
        .find(|r| r.advertisement.id == first.id)
        .unwrap();
    assert_eq!(first_record.category.as_ref().unwrap().id, category.id);

    let second_record = records
        .iter()
        .find(|r| r.advertisement.id == second.id)
        .unwrap();
    assert_eq!(
        second_record.category.as_ref().unwrap().name,
        other_category.name
    );

    Ok(())
}

/// Tests reading with no advertisements stored.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_without_advertisements() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = AdvertisementRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

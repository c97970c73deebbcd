use super::*;

/// Tests fetching a single advertisement with related rows.
///
/// Expected: Ok(Some) with owner, category and condition populated
#[tokio::test]
async fn loads_related_rows_for_single_advertisement() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, condition, advertisement) =
        factory::helpers::create_advertisement_with_dependencies(db).await?;

    let repo = AdvertisementRepository::new(db);
    let record = repo.get(advertisement.id).await?.unwrap();

    assert_eq!(record.advertisement, advertisement);
    assert_eq!(record.user, Some(user));
    assert_eq!(record.category, Some(category));
    assert_eq!(record.condition, Some(condition));

    Ok(())
}

/// Tests that a missing id is reported as absent.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdvertisementRepository::new(db);

    assert!(repo.get(42).await?.is_none());

    Ok(())
}

use super::*;

/// Tests that update writes the advertisement row, moving it to another category.
///
/// Expected: Ok with the new title and category stored
#[tokio::test]
async fn updates_advertisement_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, advertisement) =
        factory::helpers::create_advertisement_with_dependencies(db).await?;
    let new_category = factory::category::create_category(db).await?;

    let repo = AdvertisementRepository::new(db);
    let mut record = repo.get(advertisement.id).await?.unwrap();
    record.advertisement.title = "Price drop".to_string();
    record.advertisement.category_id = new_category.id;
    repo.update(&record).await?;

    let stored = entity::prelude::Advertisement::find_by_id(advertisement.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.title, "Price drop");
    assert_eq!(stored.category_id, new_category.id);
    assert_eq!(stored.created_date, advertisement.created_date);

    Ok(())
}

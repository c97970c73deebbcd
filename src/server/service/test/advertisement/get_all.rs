use super::*;

/// Tests that the search term matches advertisement titles.
///
/// Expected: Ok with only the titles containing "bike" in any case
#[tokio::test]
async fn filters_by_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;
    let condition = factory::condition::create_condition(db).await?;

    for title in ["Mountain Bike", "BIKE helmet", "Sofa"] {
        factory::advertisement::AdvertisementFactory::new(db, &user.id, category.id, condition.id)
            .title(title)
            .build()
            .await?;
    }

    let service = AdvertisementService::new(db);

    let mut titles: Vec<String> = service
        .get_all(Some("bike"))
        .await
        .unwrap()
        .into_iter()
        .map(|dto| dto.title)
        .collect();
    titles.sort();

    assert_eq!(titles, vec!["BIKE helmet", "Mountain Bike"]);
    assert_eq!(service.get_all(None).await.unwrap().len(), 3);

    Ok(())
}

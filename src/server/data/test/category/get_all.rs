use super::*;

/// Tests that every stored row is returned.
///
/// Expected: Ok with all three categories
#[tokio::test]
async fn returns_every_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Books", "Garden", "Toys"] {
        factory::category::create_category_named(db, name).await?;
    }

    let repo = EntityRepository::<Category>::new(db);
    let mut names: Vec<String> = repo
        .get_all()
        .await?
        .into_iter()
        .map(|c| c.name)
        .collect();
    names.sort();

    assert_eq!(names, vec!["Books", "Garden", "Toys"]);

    Ok(())
}

/// Tests reading an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EntityRepository::<Category>::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

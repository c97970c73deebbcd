use super::*;

async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    for name in ["Electronics", "Home Electrics", "Garden", "Books"] {
        factory::category::create_category_named(db, name).await?;
    }

    Ok(())
}

fn names(dtos: Vec<crate::model::category::CategoryDto>) -> Vec<String> {
    let mut names: Vec<String> = dtos.into_iter().map(|dto| dto.name).collect();
    names.sort();
    names
}

/// Tests listing without a search term.
///
/// Expected: Ok with every category
#[tokio::test]
async fn returns_all_without_term() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed(db).await?;

    let service = CategoryService::new(db);

    assert_eq!(service.get_all(None).await.unwrap().len(), 4);

    Ok(())
}

/// Tests that empty and whitespace-only terms do not filter.
///
/// Expected: Ok with every category for both terms
#[tokio::test]
async fn ignores_blank_term() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed(db).await?;

    let service = CategoryService::new(db);

    assert_eq!(service.get_all(Some("")).await.unwrap().len(), 4);
    assert_eq!(service.get_all(Some("   ")).await.unwrap().len(), 4);

    Ok(())
}

/// Tests case-insensitive substring matching on the name.
///
/// Expected: Ok with exactly the names containing "ELECTR" in any case
#[tokio::test]
async fn filters_by_name_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed(db).await?;

    let service = CategoryService::new(db);
    let result = service.get_all(Some("ELECTR")).await.unwrap();

    assert_eq!(names(result), vec!["Electronics", "Home Electrics"]);

    Ok(())
}

/// Tests a term that matches nothing.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_when_nothing_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed(db).await?;

    let service = CategoryService::new(db);

    assert!(service.get_all(Some("vehicles")).await.unwrap().is_empty());

    Ok(())
}

use super::*;

/// Tests that the generic repository keeps an externally issued string key on create.
///
/// Expected: Ok with the row stored under the supplied id
#[tokio::test]
async fn keeps_string_primary_key_on_create() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut user = test_utils::fixture::user::entity_builder()
        .id("external-id")
        .build();

    let repo = EntityRepository::<User>::new(db);
    repo.create(&mut user).await?;

    assert_eq!(user.id, "external-id");
    assert!(User::find_by_id("external-id".to_string())
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests that deleting a user removes their role assignments through the cascade.
///
/// Expected: Ok with no user_role rows left for the user
#[tokio::test]
async fn delete_cascades_to_role_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::role::seed_roles(db).await?;
    let user = factory::user::create_user(db).await?;
    factory::role::assign_role(db, &user.id, test_utils::fixture::role::USER_ROLE_ID).await?;

    let repo = EntityRepository::<User>::new(db);
    repo.delete(user.id.clone()).await?;

    assert!(User::find_by_id(user.id).one(db).await?.is_none());
    assert!(entity::prelude::UserRole::find().all(db).await?.is_empty());

    Ok(())
}

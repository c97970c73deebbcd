use crate::server::data::role::RoleRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, fixture};

/// Tests finding the default role regardless of the case of the name.
///
/// Expected: Ok(Some) with the fixed "User" role id
#[tokio::test]
async fn finds_role_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::role::seed_roles(db).await?;

    let repo = RoleRepository::new(db);
    let role = repo.find_by_name("user").await?.unwrap();

    assert_eq!(role.id, fixture::role::USER_ROLE_ID);

    Ok(())
}

/// Tests lookup of a role that was never seeded.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleRepository::new(db);

    assert!(repo.find_by_name("User").await?.is_none());

    Ok(())
}

/// Tests assigning a role to a user.
///
/// Expected: Ok with one user_role row linking them
#[tokio::test]
async fn assigns_role_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::role::seed_roles(db).await?;
    let user = factory::user::create_user(db).await?;

    let repo = RoleRepository::new(db);
    repo.assign(&user.id, fixture::role::ADMIN_ROLE_ID).await?;

    let assignments = entity::prelude::UserRole::find().all(db).await?;
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].user_id, user.id);
    assert_eq!(assignments[0].role_id, fixture::role::ADMIN_ROLE_ID);

    Ok(())
}

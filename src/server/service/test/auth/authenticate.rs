use super::*;

const DAY: i64 = 24 * 60 * 60;

/// Tests logging in with correct credentials.
///
/// Verifies the token subject is the user's id and that the lifetime is one day.
///
/// Expected: Ok(token) expiring one day after issue
#[tokio::test]
async fn issues_one_day_token_for_valid_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user =
        factory::user::create_user_with_credentials(db, "seller@example.com", "Secret#123").await?;

    let jwt = jwt();
    let service = AuthService::new(db, &jwt, factory::user::TEST_BCRYPT_COST);
    let token = service
        .authenticate(Credentials {
            email: "seller@example.com".to_string(),
            password: "Secret#123".to_string(),
            remember_me: false,
        })
        .await
        .unwrap();

    let claims = jwt.validate_token(&token).unwrap();
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.exp - claims.iat, DAY);

    Ok(())
}

/// Tests that "remember me" extends the token lifetime.
///
/// Expected: Ok(token) expiring thirty days after issue
#[tokio::test]
async fn issues_thirty_day_token_with_remember_me() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_credentials(db, "seller@example.com", "Secret#123").await?;

    let jwt = jwt();
    let service = AuthService::new(db, &jwt, factory::user::TEST_BCRYPT_COST);
    let token = service
        .authenticate(Credentials {
            email: "seller@example.com".to_string(),
            password: "Secret#123".to_string(),
            remember_me: true,
        })
        .await
        .unwrap();

    let claims = jwt.validate_token(&token).unwrap();
    assert_eq!(claims.exp - claims.iat, 30 * DAY);

    Ok(())
}

/// Tests that the email lookup ignores case and surrounding whitespace.
///
/// Expected: Ok(token)
#[tokio::test]
async fn matches_email_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_credentials(db, "seller@example.com", "Secret#123").await?;

    let jwt = jwt();
    let service = AuthService::new(db, &jwt, factory::user::TEST_BCRYPT_COST);
    let result = service
        .authenticate(Credentials {
            email: "  Seller@Example.COM ".to_string(),
            password: "Secret#123".to_string(),
            remember_me: false,
        })
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn fails_for_wrong_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_credentials(db, "seller@example.com", "Secret#123").await?;

    let jwt = jwt();
    let service = AuthService::new(db, &jwt, factory::user::TEST_BCRYPT_COST);
    let result = service
        .authenticate(Credentials {
            email: "seller@example.com".to_string(),
            password: "Wrong#1234".to_string(),
            remember_me: false,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in with an email nobody registered.
///
/// Expected: Err(InvalidCredentials), the same error as a wrong password
#[tokio::test]
async fn fails_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_identity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let jwt = jwt();
    let service = AuthService::new(db, &jwt, factory::user::TEST_BCRYPT_COST);
    let result = service
        .authenticate(Credentials {
            email: "nobody@example.com".to_string(),
            password: "Secret#123".to_string(),
            remember_me: false,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

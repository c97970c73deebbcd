use super::*;

/// Tests a request carrying a valid bearer token.
///
/// Expected: Ok(claims) with the token's subject
#[test]
fn accepts_valid_bearer_token() {
    let jwt = JwtService::new(SECRET);
    let token = jwt.generate_token("user-1", false).unwrap();
    let headers = headers_with(&format!("Bearer {}", token));

    let claims = AuthGuard::new(&jwt, &headers).require().unwrap();

    assert_eq!(claims.sub, "user-1");
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(MissingToken)
#[test]
fn rejects_missing_header() {
    let jwt = JwtService::new(SECRET);
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&jwt, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests an Authorization header using a scheme other than Bearer.
///
/// Expected: Err(MissingToken)
#[test]
fn rejects_non_bearer_scheme() {
    let jwt = JwtService::new(SECRET);
    let headers = headers_with("Basic dXNlcjpwYXNz");

    let result = AuthGuard::new(&jwt, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(InvalidToken)
#[test]
fn rejects_token_signed_with_other_secret() {
    let jwt = JwtService::new(SECRET);
    let token = JwtService::new("other-secret")
        .generate_token("user-1", false)
        .unwrap();
    let headers = headers_with(&format!("Bearer {}", token));

    let result = AuthGuard::new(&jwt, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}

/// Tests a bearer credential that is not a token at all.
///
/// Expected: Err(InvalidToken)
#[test]
fn rejects_malformed_token() {
    let jwt = JwtService::new(SECRET);
    let headers = headers_with("Bearer not.a.token");

    let result = AuthGuard::new(&jwt, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}

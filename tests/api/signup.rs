use test_context::test_context;

use crate::helpers::{get_random_email, TestContext, TokenPairBody};

#[test_context(TestContext)]
#[tokio::test]
async fn signup_returns_201_and_a_token_pair(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.signup(&get_random_email(), "Sup3r-secret!").await;
    assert_eq!(response.status().as_u16(), 201);

    let pair: TokenPairBody = response.json().await.expect("token pair body");
    assert!(!pair.access_token.is_empty());
    assert!(!pair.refresh_token.is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn signup_twice_with_same_email_returns_409(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let email = get_random_email();

    let first = app.signup(&email, "pw").await;
    assert_eq!(first.status().as_u16(), 201);

    let second = app.signup(&email, "pw2").await;
    assert_eq!(second.status().as_u16(), 409);
}

#[test_context(TestContext)]
#[tokio::test]
async fn signup_with_malformed_email_returns_422(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.signup("not-an-email", "pw").await;
    assert_eq!(response.status().as_u16(), 422);
}

#[test_context(TestContext)]
#[tokio::test]
async fn signup_with_empty_password_returns_422(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.signup(&get_random_email(), "").await;
    assert_eq!(response.status().as_u16(), 422);
}

use test_context::test_context;

use crate::helpers::{get_random_email, TestContext, TokenPairBody};

#[test_context(TestContext)]
#[tokio::test]
async fn login_with_valid_credentials_returns_tokens(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let email = get_random_email();

    app.signup(&email, "pw").await;

    let response = app.login(&email, "pw").await;
    assert_eq!(response.status().as_u16(), 200);

    let pair: TokenPairBody = response.json().await.expect("token pair body");
    assert!(!pair.access_token.is_empty());
    assert!(!pair.refresh_token.is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn login_with_wrong_password_returns_401(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let email = get_random_email();

    app.signup(&email, "pw").await;

    let response = app.login(&email, "wrong").await;
    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn login_failures_are_indistinguishable(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let email = get_random_email();

    app.signup(&email, "pw").await;

    // Wrong password vs. unknown email: same status, same body.
    let wrong_password = app.login(&email, "wrong").await;
    let unknown_email = app.login(&get_random_email(), "pw").await;

    assert_eq!(wrong_password.status().as_u16(), 401);
    assert_eq!(unknown_email.status().as_u16(), 401);

    let body_a = wrong_password.text().await.unwrap();
    let body_b = unknown_email.text().await.unwrap();
    assert_eq!(body_a, body_b);
}

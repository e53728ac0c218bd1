use test_context::test_context;

use crate::helpers::TestContext;

#[test_context(TestContext)]
#[tokio::test]
async fn verify_token_returns_the_user_id(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let pair = app.signup_random_user().await;

    let response = app.verify_token(&pair.access_token).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("verify body");
    assert!(body["user_id"].is_i64());
}

#[test_context(TestContext)]
#[tokio::test]
async fn verify_token_rejects_a_refresh_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let pair = app.signup_random_user().await;

    let response = app.verify_token(&pair.refresh_token).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn verify_token_rejects_a_tampered_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let pair = app.signup_random_user().await;

    let dot = pair.access_token.find('.').unwrap();
    let mut bytes = pair.access_token.into_bytes();
    bytes[dot + 2] = if bytes[dot + 2] == b'a' { b'b' } else { b'a' };
    let tampered = String::from_utf8(bytes).unwrap();

    let response = app.verify_token(&tampered).await;
    assert_eq!(response.status().as_u16(), 401);
}

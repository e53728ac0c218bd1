use serde_json::json;
use test_context::test_context;

use crate::helpers::TestContext;

#[test_context(TestContext)]
#[tokio::test]
async fn logout_with_a_valid_token_returns_204(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let pair = app.signup_random_user().await;

    let response = app
        .post_json_auth("/logout", &json!({}), &pair.access_token)
        .await;
    assert_eq!(response.status().as_u16(), 204);
}

#[test_context(TestContext)]
#[tokio::test]
async fn logout_without_a_token_returns_401(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.post_json("/logout", &json!({})).await;
    assert_eq!(response.status().as_u16(), 401);
}

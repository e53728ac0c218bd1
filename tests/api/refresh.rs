use test_context::test_context;

use crate::helpers::{TestContext, TokenPairBody};

#[test_context(TestContext)]
#[tokio::test]
async fn refresh_rotates_the_pair(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let pair = app.signup_random_user().await;

    let response = app.refresh(&pair.refresh_token).await;
    assert_eq!(response.status().as_u16(), 200);

    let rotated: TokenPairBody = response.json().await.expect("token pair body");
    assert!(!rotated.access_token.is_empty());
    assert!(!rotated.refresh_token.is_empty());

    // The rotated access token authenticates as the same user.
    let verify = app.verify_token(&rotated.access_token).await;
    assert_eq!(verify.status().as_u16(), 200);
}

#[test_context(TestContext)]
#[tokio::test]
async fn refresh_rejects_an_access_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let pair = app.signup_random_user().await;

    let response = app.refresh(&pair.access_token).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn refresh_rejects_garbage(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.refresh("not-a-token").await;
    assert_eq!(response.status().as_u16(), 401);
}

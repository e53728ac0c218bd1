use test_context::test_context;

use crate::helpers::TestContext;

#[test_context(TestContext)]
#[tokio::test]
async fn suggest_requires_authentication(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app
        .http_client
        .get(format!("{}/suggest-workout", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn suggest_without_history_returns_canned_advice(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let pair = app.signup_random_user().await;

    // No sessions logged: the handler answers without calling the LLM.
    let response = app.get_auth("/suggest-workout", &pair.access_token).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["suggestion"],
        "No history yet. Start with a full-body beginner routine."
    );
}

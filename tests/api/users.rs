use serde_json::json;
use test_context::test_context;

use crate::helpers::{get_random_email, TestContext};

#[test_context(TestContext)]
#[tokio::test]
async fn create_user_returns_the_record_without_a_hash(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let email = get_random_email();

    let response = app
        .post_json(
            "/users",
            &json!({ "name": "Alice", "email": email, "password": "pw" }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["email"], email.as_str());
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[test_context(TestContext)]
#[tokio::test]
async fn get_update_and_delete_a_user(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let email = get_random_email();

    let created = app
        .post_json(
            "/users",
            &json!({ "name": "Bob", "email": email, "password": "pw" }),
        )
        .await;
    let created: serde_json::Value = created.json().await.unwrap();
    let id = created["id"].as_i64().unwrap();

    let fetched = app
        .http_client
        .get(format!("{}/users/{}", &app.address, id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(fetched.status().as_u16(), 200);

    let updated = app
        .http_client
        .put(format!("{}/users/{}", &app.address, id))
        .json(&json!({ "name": "Robert" }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(updated.status().as_u16(), 200);
    let updated: serde_json::Value = updated.json().await.unwrap();
    assert_eq!(updated["name"], "Robert");

    let deleted = app
        .http_client
        .delete(format!("{}/users/{}", &app.address, id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(deleted.status().as_u16(), 204);

    let missing = app
        .http_client
        .get(format!("{}/users/{}", &app.address, id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(missing.status().as_u16(), 404);
}

#[test_context(TestContext)]
#[tokio::test]
async fn unknown_user_returns_404(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app
        .http_client
        .get(format!("{}/users/4242", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 404);
}

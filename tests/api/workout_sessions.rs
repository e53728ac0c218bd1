use serde_json::json;
use test_context::test_context;

use crate::helpers::{TestApp, TestContext};

// Seeds one muscle group + workout type and returns the workout type id.
async fn seed_catalog(app: &TestApp, token: &str) -> i64 {
    let group = app
        .post_json_auth("/muscle-groups", &json!({ "name": "Back" }), token)
        .await;
    assert_eq!(group.status().as_u16(), 201);
    let group: serde_json::Value = group.json().await.unwrap();

    let wt = app
        .post_json_auth(
            "/workout-types",
            &json!({ "name": "Deadlift", "muscle_group_id": group["id"] }),
            token,
        )
        .await;
    assert_eq!(wt.status().as_u16(), 201);
    let wt: serde_json::Value = wt.json().await.unwrap();
    wt["id"].as_i64().unwrap()
}

#[test_context(TestContext)]
#[tokio::test]
async fn sessions_require_authentication(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app
        .http_client
        .get(format!("{}/workout-sessions", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn create_list_and_delete_a_session(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let pair = app.signup_random_user().await;
    let token = &pair.access_token;
    let workout_type_id = seed_catalog(app, token).await;

    // create with an explicit datetime
    let created = app
        .post_json_auth(
            "/workout-sessions",
            &json!({
                "workout_type_id": workout_type_id,
                "datetime": "2026-08-01T10:00:00Z"
            }),
            token,
        )
        .await;
    assert_eq!(created.status().as_u16(), 201);
    let created: serde_json::Value = created.json().await.unwrap();
    let session_id = created["id"].as_i64().unwrap();

    // attach a detail
    let detail = app
        .post_json_auth(
            &format!("/workout-sessions/{}/details", session_id),
            &json!({ "name": "reps", "value": "5x5" }),
            token,
        )
        .await;
    assert_eq!(detail.status().as_u16(), 201);

    // the detail comes back when fetching the session
    let fetched = app
        .get_auth(&format!("/workout-sessions/{}", session_id), token)
        .await;
    assert_eq!(fetched.status().as_u16(), 200);
    let fetched: serde_json::Value = fetched.json().await.unwrap();
    assert_eq!(fetched["details"][0]["name"], "reps");
    assert_eq!(fetched["details"][0]["value"], "5x5");

    // list contains exactly this session
    let listed = app.get_auth("/workout-sessions", token).await;
    let listed: serde_json::Value = listed.json().await.unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // delete
    let deleted = app
        .delete_auth(&format!("/workout-sessions/{}", session_id), token)
        .await;
    assert_eq!(deleted.status().as_u16(), 204);

    let missing = app
        .get_auth(&format!("/workout-sessions/{}", session_id), token)
        .await;
    assert_eq!(missing.status().as_u16(), 404);
}

#[test_context(TestContext)]
#[tokio::test]
async fn sessions_created_without_datetime_default_to_now(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let pair = app.signup_random_user().await;
    let token = &pair.access_token;
    let workout_type_id = seed_catalog(app, token).await;

    let created = app
        .post_json_auth(
            "/workout-sessions",
            &json!({ "workout_type_id": workout_type_id }),
            token,
        )
        .await;
    assert_eq!(created.status().as_u16(), 201);
    let created: serde_json::Value = created.json().await.unwrap();
    assert!(created["datetime"].is_string());
}

#[test_context(TestContext)]
#[tokio::test]
async fn another_users_session_is_not_visible(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let owner = app.signup_random_user().await;
    let workout_type_id = seed_catalog(app, &owner.access_token).await;

    let created = app
        .post_json_auth(
            "/workout-sessions",
            &json!({ "workout_type_id": workout_type_id }),
            &owner.access_token,
        )
        .await;
    let created: serde_json::Value = created.json().await.unwrap();
    let session_id = created["id"].as_i64().unwrap();

    // A different user gets 404, not 403, so session ids are not probeable.
    let intruder = app.signup_random_user().await;
    let fetched = app
        .get_auth(&format!("/workout-sessions/{}", session_id), &intruder.access_token)
        .await;
    assert_eq!(fetched.status().as_u16(), 404);

    let deleted = app
        .delete_auth(&format!("/workout-sessions/{}", session_id), &intruder.access_token)
        .await;
    assert_eq!(deleted.status().as_u16(), 404);

    let listed = app.get_auth("/workout-sessions", &intruder.access_token).await;
    let listed: serde_json::Value = listed.json().await.unwrap();
    assert!(listed.as_array().unwrap().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn creating_a_session_for_a_missing_workout_type_fails(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let pair = app.signup_random_user().await;

    let response = app
        .post_json_auth(
            "/workout-sessions",
            &json!({ "workout_type_id": 999 }),
            &pair.access_token,
        )
        .await;
    assert_eq!(response.status().as_u16(), 404);
}

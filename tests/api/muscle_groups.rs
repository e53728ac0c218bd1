use serde_json::json;
use test_context::test_context;

use crate::helpers::TestContext;

#[test_context(TestContext)]
#[tokio::test]
async fn muscle_groups_require_authentication(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app
        .http_client
        .get(format!("{}/muscle-groups", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 401);

    let response = app.get_auth("/muscle-groups", "bogus-token").await;
    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn muscle_group_crud_round_trip(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let pair = app.signup_random_user().await;
    let token = &pair.access_token;

    // create
    let created = app
        .post_json_auth("/muscle-groups", &json!({ "name": "Chest" }), token)
        .await;
    assert_eq!(created.status().as_u16(), 201);
    let created: serde_json::Value = created.json().await.unwrap();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Chest");

    // list
    let listed = app.get_auth("/muscle-groups", token).await;
    assert_eq!(listed.status().as_u16(), 200);
    let listed: serde_json::Value = listed.json().await.unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // update
    let updated = app
        .put_json_auth(
            &format!("/muscle-groups/{}", id),
            &json!({ "name": "Upper chest" }),
            token,
        )
        .await;
    assert_eq!(updated.status().as_u16(), 200);
    let updated: serde_json::Value = updated.json().await.unwrap();
    assert_eq!(updated["name"], "Upper chest");

    // delete, then the group is gone
    let deleted = app.delete_auth(&format!("/muscle-groups/{}", id), token).await;
    assert_eq!(deleted.status().as_u16(), 204);

    let missing = app.get_auth(&format!("/muscle-groups/{}", id), token).await;
    assert_eq!(missing.status().as_u16(), 404);
}

//! Integration tests for group management and recipient expansion.

use crate::helpers;

use http::StatusCode;

#[tokio::test]
async fn test_create_and_list_groups() {
    let app = helpers::TestApp::new().await;
    let (user_id, user_token) = app.signup_user("Aiko", "g1@group.test").await;
    let (institute_id, inst_token) = app.signup_institute("Suzuka Tech", "g1adm@group.test").await;
    app.link(&user_token, &inst_token, user_id, institute_id)
        .await;

    app.create_group(&inst_token, "Engineering", &[user_id]).await;

    let groups = app
        .request(
            "GET",
            "/api/dashboard/institute/groups",
            None,
            Some(&inst_token),
        )
        .await;
    assert_eq!(groups.status, StatusCode::OK);
    let entries = groups.body.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "Engineering");
}

#[tokio::test]
async fn test_group_members_must_be_linked() {
    let app = helpers::TestApp::new().await;
    let (stranger_id, _) = app.signup_user("Stray", "stray@group.test").await;
    let (_, inst_token) = app.signup_institute("Suzuka Tech", "g2adm@group.test").await;

    let response = app
        .request(
            "POST",
            "/api/dashboard/institute/groups",
            Some(serde_json::json!({
                "name": "Engineering",
                "memberIds": [stranger_id],
            })),
            Some(&inst_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_set_members_replaces_wholesale() {
    let app = helpers::TestApp::new().await;
    let (u1, t1) = app.signup_user("Aiko", "g3a@group.test").await;
    let (u2, t2) = app.signup_user("Botan", "g3b@group.test").await;
    let (institute_id, inst_token) = app.signup_institute("Suzuka Tech", "g3adm@group.test").await;
    app.link(&t1, &inst_token, u1, institute_id).await;
    app.link(&t2, &inst_token, u2, institute_id).await;

    let group_id = app.create_group(&inst_token, "Engineering", &[u1]).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/dashboard/institute/groups/{group_id}/members"),
            Some(serde_json::json!({ "memberIds": [u2] })),
            Some(&inst_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let members = app
        .request(
            "GET",
            &format!("/api/dashboard/institute/groups/{group_id}/members"),
            None,
            Some(&inst_token),
        )
        .await;
    let entries = members.body.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], u2.to_string());
}

#[tokio::test]
async fn test_foreign_group_is_invisible() {
    let app = helpers::TestApp::new().await;
    let (u1, t1) = app.signup_user("Aiko", "g4@group.test").await;
    let (i1, inst1_token) = app.signup_institute("Suzuka Tech", "g4a@group.test").await;
    let (_, inst2_token) = app.signup_institute("Nagoya Labs", "g4b@group.test").await;
    app.link(&t1, &inst1_token, u1, i1).await;

    let group_id = app.create_group(&inst1_token, "Engineering", &[u1]).await;

    let response = app
        .request(
            "GET",
            &format!("/api/dashboard/institute/groups/{group_id}/members"),
            None,
            Some(&inst2_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

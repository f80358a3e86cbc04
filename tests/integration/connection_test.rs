//! Integration tests for the connection lifecycle.

use crate::helpers;

use http::StatusCode;

#[tokio::test]
async fn test_join_approve_updates_both_views() {
    let app = helpers::TestApp::new().await;
    let (user_id, user_token) = app.signup_user("Aiko", "aiko@conn.test").await;
    let (institute_id, inst_token) = app.signup_institute("Suzuka Tech", "admin@conn.test").await;

    app.link(&user_token, &inst_token, user_id, institute_id)
        .await;

    let institutes = app
        .request("GET", "/api/dashboard/user/institutes", None, Some(&user_token))
        .await;
    assert_eq!(institutes.status, StatusCode::OK);
    assert_eq!(institutes.body.as_array().unwrap().len(), 1);
    assert_eq!(institutes.body[0]["name"], "Suzuka Tech");

    let users = app
        .request(
            "GET",
            "/api/dashboard/institute/linked-users",
            None,
            Some(&inst_token),
        )
        .await;
    assert_eq!(users.status, StatusCode::OK);
    assert_eq!(users.body.as_array().unwrap().len(), 1);
    assert_eq!(users.body[0]["email"], "aiko@conn.test");
}

#[tokio::test]
async fn test_duplicate_join_request_rejected() {
    let app = helpers::TestApp::new().await;
    let (_, user_token) = app.signup_user("Aiko", "dupjoin@conn.test").await;
    let (institute_id, _) = app.signup_institute("Suzuka Tech", "dupadmin@conn.test").await;

    let first = app
        .request(
            "POST",
            &format!("/api/dashboard/user/join/{institute_id}"),
            None,
            Some(&user_token),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app
        .request(
            "POST",
            &format!("/api/dashboard/user/join/{institute_id}"),
            None,
            Some(&user_token),
        )
        .await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        second.body["msg"],
        "You already have a pending request for this institute."
    );
}

#[tokio::test]
async fn test_approve_is_one_shot() {
    let app = helpers::TestApp::new().await;
    let (user_id, user_token) = app.signup_user("Aiko", "oneshot@conn.test").await;
    let (institute_id, inst_token) = app
        .signup_institute("Suzuka Tech", "oneshotadm@conn.test")
        .await;

    app.link(&user_token, &inst_token, user_id, institute_id)
        .await;

    // The record is already approved; a second approve finds nothing pending.
    let again = app
        .request(
            "PUT",
            &format!("/api/dashboard/institute/approve/{user_id}"),
            None,
            Some(&inst_token),
        )
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(again.body["msg"], "Pending request not found.");
}

#[tokio::test]
async fn test_rejected_blocks_until_cleared() {
    let app = helpers::TestApp::new().await;
    let (user_id, user_token) = app.signup_user("Aiko", "rej@conn.test").await;
    let (institute_id, inst_token) = app.signup_institute("Suzuka Tech", "rejadm@conn.test").await;

    app.request(
        "POST",
        &format!("/api/dashboard/user/join/{institute_id}"),
        None,
        Some(&user_token),
    )
    .await;

    let reject = app
        .request(
            "PUT",
            &format!("/api/dashboard/institute/reject/{user_id}"),
            None,
            Some(&inst_token),
        )
        .await;
    assert_eq!(reject.status, StatusCode::OK);

    // Re-requesting while rejected is forbidden.
    let retry = app
        .request(
            "POST",
            &format!("/api/dashboard/user/join/{institute_id}"),
            None,
            Some(&user_token),
        )
        .await;
    assert_eq!(retry.status, StatusCode::FORBIDDEN);

    // Clearing the rejected record reopens the pair.
    let clear = app
        .request(
            "DELETE",
            &format!("/api/dashboard/institute/rejected/{user_id}"),
            None,
            Some(&inst_token),
        )
        .await;
    assert_eq!(clear.status, StatusCode::OK);

    let rejoin = app
        .request(
            "POST",
            &format!("/api/dashboard/user/join/{institute_id}"),
            None,
            Some(&user_token),
        )
        .await;
    assert_eq!(rejoin.status, StatusCode::OK);
}

#[tokio::test]
async fn test_leave_removes_link_and_is_idempotent() {
    let app = helpers::TestApp::new().await;
    let (user_id, user_token) = app.signup_user("Aiko", "leave@conn.test").await;
    let (institute_id, inst_token) = app
        .signup_institute("Suzuka Tech", "leaveadm@conn.test")
        .await;

    app.link(&user_token, &inst_token, user_id, institute_id)
        .await;

    let leave = app
        .request(
            "POST",
            &format!("/api/dashboard/user/leave/{institute_id}"),
            None,
            Some(&user_token),
        )
        .await;
    assert_eq!(leave.status, StatusCode::OK);

    let institutes = app
        .request("GET", "/api/dashboard/user/institutes", None, Some(&user_token))
        .await;
    assert!(institutes.body.as_array().unwrap().is_empty());

    // Leaving again still succeeds.
    let again = app
        .request(
            "POST",
            &format!("/api/dashboard/user/leave/{institute_id}"),
            None,
            Some(&user_token),
        )
        .await;
    assert_eq!(again.status, StatusCode::OK);
}

#[tokio::test]
async fn test_join_unknown_institute() {
    let app = helpers::TestApp::new().await;
    let (_, user_token) = app.signup_user("Aiko", "ghost@conn.test").await;

    let response = app
        .request(
            "POST",
            &format!("/api/dashboard/user/join/{}", uuid::Uuid::new_v4()),
            None,
            Some(&user_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["msg"], "Institute not found");
}

#[tokio::test]
async fn test_pending_listing_shows_requester_profile() {
    let app = helpers::TestApp::new().await;
    let (user_id, user_token) = app.signup_user("Aiko", "pend@conn.test").await;
    let (institute_id, inst_token) = app.signup_institute("Suzuka Tech", "pendadm@conn.test").await;

    app.request(
        "POST",
        &format!("/api/dashboard/user/join/{institute_id}"),
        None,
        Some(&user_token),
    )
    .await;

    let pending = app
        .request(
            "GET",
            "/api/dashboard/institute/pending",
            None,
            Some(&inst_token),
        )
        .await;
    assert_eq!(pending.status, StatusCode::OK);
    let entries = pending.body.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["userId"], user_id.to_string());
    assert_eq!(entries[0]["email"], "pend@conn.test");
    assert_eq!(entries[0]["status"], "pending");
}

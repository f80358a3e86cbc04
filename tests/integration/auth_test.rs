//! Integration tests for signup and login.

use crate::helpers;

use http::StatusCode;

#[tokio::test]
async fn test_user_signup_and_login() {
    let app = helpers::TestApp::new().await;
    app.signup_user("Aiko", "aiko@test.com").await;

    let response = app
        .request(
            "POST",
            "/api/auth/user/login",
            Some(serde_json::json!({
                "email": "aiko@test.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("token").is_some());
    assert_eq!(response.body["role"], "user");
}

#[tokio::test]
async fn test_duplicate_user_signup_rejected() {
    let app = helpers::TestApp::new().await;
    app.signup_user("Aiko", "dup@test.com").await;

    let response = app
        .request(
            "POST",
            "/api/auth/user/signup",
            Some(serde_json::json!({
                "name": "Aiko Again",
                "email": "dup@test.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["msg"], "User already exists");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = helpers::TestApp::new().await;
    app.signup_user("Aiko", "wrongpw@test.com").await;

    let response = app
        .request(
            "POST",
            "/api/auth/user/login",
            Some(serde_json::json!({
                "email": "wrongpw@test.com",
                "password": "not-the-password",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["msg"], "Invalid Credentials");
}

#[tokio::test]
async fn test_signup_validation_errors() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/user/signup",
            Some(serde_json::json!({
                "name": "",
                "email": "not-an-email",
                "password": "abc",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let errors = response.body["errors"]
        .as_array()
        .expect("Expected errors array");
    let fields: Vec<&str> = errors
        .iter()
        .filter_map(|e| e["field"].as_str())
        .collect();
    assert!(fields.contains(&"name"));
    assert!(fields.contains(&"email"));
}

#[tokio::test]
async fn test_signup_short_password_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/user/signup",
            Some(serde_json::json!({
                "name": "Aiko",
                "email": "shortpw@test.com",
                "password": "abc",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let errors = response.body["errors"]
        .as_array()
        .expect("Expected errors array");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["field"], "password");
    assert_eq!(errors[0]["message"], "Password must be 6 or more characters");

    // Nothing is persisted when the policy check fails.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind("shortpw@test.com")
        .fetch_one(&app.db_pool)
        .await
        .expect("Count query failed");
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_missing_token_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/dashboard/user/institutes", None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["msg"], "No token, authorization denied");
}

#[tokio::test]
async fn test_user_token_cannot_access_institute_routes() {
    let app = helpers::TestApp::new().await;
    let (_, user_token) = app.signup_user("Aiko", "role@test.com").await;

    let response = app
        .request(
            "GET",
            "/api/dashboard/institute/linked-users",
            None,
            Some(&user_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["msg"], "Forbidden: Institute access required");
}

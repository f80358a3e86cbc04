//! Integration tests for document upload and link issuance.

use crate::helpers;

use http::StatusCode;

#[tokio::test]
async fn test_upload_expands_group_and_issues_links() {
    let app = helpers::TestApp::new().await;
    let (u1, t1) = app.signup_user("Aiko", "d1a@doc.test").await;
    let (u2, t2) = app.signup_user("Botan", "d1b@doc.test").await;
    let (institute_id, inst_token) = app.signup_institute("Suzuka Tech", "d1adm@doc.test").await;
    app.link(&t1, &inst_token, u1, institute_id).await;
    app.link(&t2, &inst_token, u2, institute_id).await;

    let group_id = app.create_group(&inst_token, "Engineering", &[u1, u2]).await;

    let response = app
        .upload_document(&inst_token, "report.pdf", b"%PDF-1.4 test", &[group_id])
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        response.body["msg"],
        "Document uploaded and metadata saved successfully."
    );
    assert_eq!(response.body["recipientsCount"], 2);
    let links = response.body["links"].as_array().unwrap();
    assert_eq!(links.len(), 2);
    for link in links {
        assert!(link["link"].as_str().unwrap().contains("/view/"));
    }
}

#[tokio::test]
async fn test_overlapping_groups_deduplicate_recipients() {
    let app = helpers::TestApp::new().await;
    let (u1, t1) = app.signup_user("Aiko", "d2a@doc.test").await;
    let (u2, t2) = app.signup_user("Botan", "d2b@doc.test").await;
    let (u3, t3) = app.signup_user("Chie", "d2c@doc.test").await;
    let (institute_id, inst_token) = app.signup_institute("Suzuka Tech", "d2adm@doc.test").await;
    app.link(&t1, &inst_token, u1, institute_id).await;
    app.link(&t2, &inst_token, u2, institute_id).await;
    app.link(&t3, &inst_token, u3, institute_id).await;

    let g1 = app.create_group(&inst_token, "Alpha", &[u1, u2]).await;
    let g2 = app.create_group(&inst_token, "Beta", &[u2, u3]).await;

    let response = app
        .upload_document(&inst_token, "memo.docx", b"fake docx", &[g1, g2])
        .await;

    // {u1, u2} ∪ {u2, u3} = 3 distinct recipients.
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["recipientsCount"], 3);
}

#[tokio::test]
async fn test_upload_rejects_unsupported_extension() {
    let app = helpers::TestApp::new().await;
    let (u1, t1) = app.signup_user("Aiko", "d3@doc.test").await;
    let (institute_id, inst_token) = app.signup_institute("Suzuka Tech", "d3adm@doc.test").await;
    app.link(&t1, &inst_token, u1, institute_id).await;
    let group_id = app.create_group(&inst_token, "Engineering", &[u1]).await;

    let response = app
        .upload_document(&inst_token, "script.exe", b"MZ", &[group_id])
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["msg"],
        "File type not supported. Only PDF, DOC, and DOCX files are allowed."
    );
}

#[tokio::test]
async fn test_upload_with_empty_recipients_leaves_no_rows() {
    let app = helpers::TestApp::new().await;
    let (_, inst_token) = app.signup_institute("Suzuka Tech", "d4adm@doc.test").await;

    let response = app
        .upload_document(&inst_token, "report.pdf", b"%PDF-1.4", &[])
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["msg"], "Recipient groups are required.");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_users_cannot_upload() {
    let app = helpers::TestApp::new().await;
    let (_, user_token) = app.signup_user("Aiko", "d5@doc.test").await;

    let response = app
        .upload_document(&user_token, "report.pdf", b"%PDF-1.4", &[])
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_document_listing_is_newest_first() {
    let app = helpers::TestApp::new().await;
    let (u1, t1) = app.signup_user("Aiko", "d6@doc.test").await;
    let (institute_id, inst_token) = app.signup_institute("Suzuka Tech", "d6adm@doc.test").await;
    app.link(&t1, &inst_token, u1, institute_id).await;
    let group_id = app.create_group(&inst_token, "Engineering", &[u1]).await;

    for name in ["first.pdf", "second.pdf"] {
        let response = app
            .upload_document(&inst_token, name, b"%PDF-1.4", &[group_id])
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let listing = app
        .request("GET", "/api/documents", None, Some(&inst_token))
        .await;
    assert_eq!(listing.status, StatusCode::OK);
    let docs = listing.body.as_array().unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0]["originalFileName"], "second.pdf");
    assert_eq!(docs[1]["originalFileName"], "first.pdf");
}

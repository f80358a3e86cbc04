//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use tower::ServiceExt;
use uuid::Uuid;

use docvault_auth::{JwtDecoder, JwtEncoder, PasswordHasher};
use docvault_core::config::AppConfig;
use docvault_database::DatabasePool;
use docvault_database::repositories::connection::ConnectionRepository;
use docvault_database::repositories::document::DocumentRepository;
use docvault_database::repositories::group::GroupRepository;
use docvault_database::repositories::institute::InstituteRepository;
use docvault_database::repositories::user::UserRepository;
use docvault_service::auth::AuthService;
use docvault_service::connection::ConnectionService;
use docvault_service::document::{DocumentService, SecureLinkIssuer};
use docvault_service::group::GroupService;
use docvault_service::storage::LocalDocumentStore;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application backed by its own fresh database.
    pub async fn new() -> Self {
        let mut config = AppConfig::load("test").expect("Failed to load test config");
        Self::create_database(&mut config).await;

        let db_pool = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database")
            .into_pool();

        docvault_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let storage_root = std::env::temp_dir().join(format!("docvault-it-{}", Uuid::new_v4()));
        let store = Arc::new(
            LocalDocumentStore::new(storage_root.to_str().unwrap())
                .await
                .expect("Failed to init document store"),
        );

        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let institute_repo = Arc::new(InstituteRepository::new(db_pool.clone()));
        let connection_repo = Arc::new(ConnectionRepository::new(db_pool.clone()));
        let group_repo = Arc::new(GroupRepository::new(db_pool.clone()));
        let document_repo = Arc::new(DocumentRepository::new(db_pool.clone()));

        let hasher = Arc::new(PasswordHasher::new());
        let encoder = Arc::new(JwtEncoder::new(&config.auth));
        let decoder = Arc::new(JwtDecoder::new(&config.auth));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_repo),
            Arc::clone(&institute_repo),
            Arc::clone(&hasher),
            Arc::clone(&encoder),
            config.auth.password_min_length,
        ));
        let connection_service = Arc::new(ConnectionService::new(
            Arc::clone(&connection_repo),
            Arc::clone(&user_repo),
            Arc::clone(&institute_repo),
        ));
        let group_service = Arc::new(GroupService::new(
            Arc::clone(&group_repo),
            Arc::clone(&connection_repo),
        ));
        let link_issuer =
            SecureLinkIssuer::new(Arc::clone(&encoder), config.links.base_url.clone());
        let document_service = Arc::new(DocumentService::new(
            Arc::clone(&document_repo),
            Arc::clone(&group_repo),
            store,
            link_issuer,
            config.storage.clone(),
            config.links.default_expiry_days,
        ));

        let app_state = docvault_api::AppState {
            config: Arc::new(config.clone()),
            db_pool: db_pool.clone(),
            jwt_decoder: decoder,
            auth_service,
            connection_service,
            group_service,
            document_service,
        };

        let router = docvault_api::build_router(app_state);

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Create a uniquely named database and point the config at it.
    ///
    /// Tests in this binary run in parallel; a shared database would let
    /// one test observe another's rows.
    async fn create_database(config: &mut AppConfig) {
        let (base, _) = config
            .database
            .url
            .rsplit_once('/')
            .expect("Malformed database url");
        let base = base.to_string();
        let db_name = format!("docvault_test_{}", Uuid::new_v4().simple());

        let mut conn = PgConnection::connect(&format!("{base}/postgres"))
            .await
            .expect("Failed to connect to the postgres maintenance database");
        conn.execute(format!(r#"CREATE DATABASE "{db_name}""#).as_str())
            .await
            .expect("Failed to create test database");

        config.database.url = format!("{base}/{db_name}");
    }

    /// Sign up a user through the API and return (id, token).
    pub async fn signup_user(&self, name: &str, email: &str) -> (Uuid, String) {
        let response = self
            .request(
                "POST",
                "/api/auth/user/signup",
                Some(serde_json::json!({
                    "name": name,
                    "email": email,
                    "password": "password123",
                })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "User signup failed: {:?}",
            response.body
        );
        let token = response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in signup response")
            .to_string();

        let id: Uuid = sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
            .bind(email)
            .fetch_one(&self.db_pool)
            .await
            .expect("User not found after signup");

        (id, token)
    }

    /// Sign up an institute through the API and return (id, token).
    pub async fn signup_institute(&self, name: &str, admin_email: &str) -> (Uuid, String) {
        let response = self
            .request(
                "POST",
                "/api/auth/institute/signup",
                Some(serde_json::json!({
                    "name": name,
                    "adminEmail": admin_email,
                    "password": "password123",
                })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Institute signup failed: {:?}",
            response.body
        );
        let token = response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in signup response")
            .to_string();

        let id: Uuid = sqlx::query_scalar("SELECT id FROM institutes WHERE admin_email = $1")
            .bind(admin_email)
            .fetch_one(&self.db_pool)
            .await
            .expect("Institute not found after signup");

        (id, token)
    }

    /// Create an approved user-institute link via join + approve.
    pub async fn link(
        &self,
        user_token: &str,
        institute_token: &str,
        user_id: Uuid,
        institute_id: Uuid,
    ) {
        let response = self
            .request(
                "POST",
                &format!("/api/dashboard/user/join/{institute_id}"),
                None,
                Some(user_token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

        let response = self
            .request(
                "PUT",
                &format!("/api/dashboard/institute/approve/{user_id}"),
                None,
                Some(institute_token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    }

    /// Create a group through the API and return its id.
    pub async fn create_group(
        &self,
        institute_token: &str,
        name: &str,
        member_ids: &[Uuid],
    ) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/dashboard/institute/groups",
                Some(serde_json::json!({
                    "name": name,
                    "memberIds": member_ids,
                })),
                Some(institute_token),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Group creation failed: {:?}",
            response.body
        );
        response
            .body
            .get("id")
            .and_then(|v| v.as_str())
            .and_then(|s| s.parse().ok())
            .expect("No group id in response")
    }

    /// Make a JSON HTTP request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("x-auth-token", token);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Upload a document as multipart form data.
    pub async fn upload_document(
        &self,
        token: &str,
        file_name: &str,
        file_bytes: &[u8],
        recipients: &[Uuid],
    ) -> TestResponse {
        let boundary = "docvault-test-boundary";
        let recipients_json =
            serde_json::to_string(recipients).expect("Failed to serialize recipients");

        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"document\"; \
                 filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(file_bytes);
        body.extend_from_slice(b"\r\n");
        for (name, value) in [
            ("recipients", recipients_json.as_str()),
            ("expiryDays", "7"),
            ("viewOnce", "false"),
            ("watermark", "true"),
        ] {
            body.extend_from_slice(
                format!(
                    "--{boundary}\r\nContent-Disposition: form-data; \
                     name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

        let req = Request::builder()
            .method("POST")
            .uri("/api/documents/upload")
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .header("x-auth-token", token)
            .body(Body::from(body))
            .expect("Failed to build upload request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

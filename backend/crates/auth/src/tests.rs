//! Router tests for the auth crate
//! Drive the real axum router against the in-memory repository.

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{HeaderMap, Request, StatusCode, header};
    use chrono::Utc;
    use kernel::id::UserId;
    use platform::token::TokenSigner;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::config::AuthConfig;
    use crate::error::{MSG_DUPLICATE_EMAIL, MSG_INVALID_CREDENTIALS, MSG_INVALID_TOKEN};
    use crate::infra::memory::MemoryUserRepository;
    use crate::presentation::router::auth_router_generic;

    const SECRET: &[u8] = b"router-test-secret";

    struct TestApp {
        router: Router,
        repo: MemoryUserRepository,
        config: AuthConfig,
    }

    fn app() -> TestApp {
        let repo = MemoryUserRepository::new();
        let config = AuthConfig::new(SECRET);
        TestApp {
            router: auth_router_generic(repo.clone(), config.clone()),
            repo,
            config,
        }
    }

    async fn send(router: &Router, req: Request<Body>) -> (StatusCode, HeaderMap, Value) {
        let response = router.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, headers, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn register(app: &TestApp, name: &str, email: &str) -> Value {
        let (status, _, body) = send(
            &app.router,
            post_json(
                "/register",
                json!({"name": name, "email": email, "password": "pa55word"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body
    }

    async fn login(app: &TestApp, email: &str) -> String {
        let (status, _, body) = send(
            &app.router,
            post_json("/auth", json!({"email": email, "password": "pa55word"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["token"].as_str().unwrap().to_string()
    }

    // ------------------------------------------------------------------------
    // Register
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_register_returns_user_and_location() {
        let app = app();
        let (status, headers, body) = send(
            &app.router,
            post_json(
                "/register",
                json!({"name": "Test User", "email": "Test@Example.com", "password": "pa55word"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(headers.get(header::LOCATION).unwrap(), "/v1/users/1");
        assert_eq!(body["user"]["id"], 1);
        assert_eq!(body["user"]["name"], "Test User");
        assert_eq!(body["user"]["email"], "test@example.com");
        assert_eq!(body["user"]["active"], true);

        let raw = body.to_string();
        assert!(!raw.contains("password"));
        assert!(!raw.contains("argon2"));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let app = app();
        register(&app, "First", "dup@example.com").await;

        let (status, _, body) = send(
            &app.router,
            post_json(
                "/register",
                json!({"name": "Second", "email": "DUP@example.com", "password": "pa55word"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body, json!({"error": {"email": MSG_DUPLICATE_EMAIL}}));
    }

    #[tokio::test]
    async fn test_register_validation_errors() {
        let app = app();
        let (status, _, body) = send(
            &app.router,
            post_json(
                "/register",
                json!({"name": "", "email": "not-an-email", "password": "short"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["name"], "must be provided");
        assert_eq!(body["error"]["email"], "must be a valid email address");
        assert_eq!(body["error"]["password"], "must be at least 8 bytes long");
    }

    #[tokio::test]
    async fn test_register_missing_fields_are_validation_errors() {
        let app = app();
        let (status, _, body) = send(&app.router, post_json("/register", json!({}))).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["email"], "must be provided");
        assert_eq!(body["error"]["password"], "must be provided");
    }

    #[tokio::test]
    async fn test_register_malformed_body() {
        let app = app();
        let req = Request::builder()
            .method("POST")
            .uri("/register")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"name\": "))
            .unwrap();
        let (status, _, body) = send(&app.router, req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    // ------------------------------------------------------------------------
    // Login
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_login_issues_usable_token() {
        let app = app();
        register(&app, "Test User", "test@example.com").await;

        let token = login(&app, "test@example.com").await;
        let claims = app.config.token_signer().verify(&token).unwrap();
        assert_eq!(claims.sub, "1");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);

        let (status, _, body) = send(&app.router, get("/users", Some(&token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["users"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let app = app();
        register(&app, "Test User", "test@example.com").await;

        let wrong_password = send(
            &app.router,
            post_json(
                "/auth",
                json!({"email": "test@example.com", "password": "wrongpass"}),
            ),
        )
        .await;
        let unknown_email = send(
            &app.router,
            post_json(
                "/auth",
                json!({"email": "nobody@example.com", "password": "pa55word"}),
            ),
        )
        .await;

        assert_eq!(wrong_password.0, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_email.0, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong_password.2, json!({"error": MSG_INVALID_CREDENTIALS}));
        assert_eq!(wrong_password.2, unknown_email.2);
    }

    #[tokio::test]
    async fn test_login_validation_errors() {
        let app = app();
        let (status, _, body) = send(
            &app.router,
            post_json("/auth", json!({"email": "bad", "password": ""})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["email"], "must be a valid email address");
        assert_eq!(body["error"]["password"], "must be provided");
    }

    // ------------------------------------------------------------------------
    // Authentication
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_missing_token_is_rejected() {
        let app = app();
        let (status, headers, body) = send(&app.router, get("/users", None)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(headers.get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");
        assert_eq!(headers.get(header::VARY).unwrap(), "Authorization");
        assert_eq!(body, json!({"error": MSG_INVALID_TOKEN}));
    }

    #[tokio::test]
    async fn test_bad_tokens_match_missing_token() {
        let app = app();
        register(&app, "Test User", "test@example.com").await;

        let (_, _, missing) = send(&app.router, get("/users", None)).await;

        let foreign = TokenSigner::new(b"some-other-secret", "auction-go", app.config.token_ttl)
            .issue("1")
            .unwrap();
        let expired = app
            .config
            .token_signer()
            .issue_at("1", Utc::now() - chrono::Duration::hours(25))
            .unwrap();

        for token in [foreign.as_str(), expired.as_str(), "garbage"] {
            let (status, headers, body) = send(&app.router, get("/users", Some(token))).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(headers.get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");
            assert_eq!(body, missing);
        }
    }

    #[tokio::test]
    async fn test_token_for_unknown_user_is_rejected() {
        let app = app();
        let token = app.config.token_signer().issue("99").unwrap();
        let (status, _, body) = send(&app.router, get("/users", Some(&token))).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"error": MSG_INVALID_TOKEN}));
    }

    #[tokio::test]
    async fn test_non_numeric_subject_is_server_error() {
        let app = app();
        let token = app.config.token_signer().issue("not-a-number").unwrap();
        let (status, _, body) = send(&app.router, get("/users", Some(&token))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"error": kernel::error::app_error::SERVER_ERROR_MESSAGE})
        );
    }

    // ------------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_show_user() {
        let app = app();
        register(&app, "Alice", "alice@example.com").await;
        register(&app, "Bob", "bob@example.com").await;
        let token = login(&app, "alice@example.com").await;

        let (status, headers, body) = send(&app.router, get("/users/2", Some(&token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers.get(header::VARY).unwrap(), "Authorization");
        assert_eq!(body["user"]["name"], "Bob");
    }

    #[tokio::test]
    async fn test_show_user_not_found() {
        let app = app();
        register(&app, "Alice", "alice@example.com").await;
        let token = login(&app, "alice@example.com").await;

        for uri in ["/users/42", "/users/abc", "/users/0"] {
            let (status, _, body) = send(&app.router, get(uri, Some(&token))).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert!(body["error"].is_string());
        }
    }

    #[tokio::test]
    async fn test_list_users_skips_destroyed() {
        let app = app();
        register(&app, "Alice", "alice@example.com").await;
        register(&app, "Bob", "bob@example.com").await;
        app.repo.destroy(UserId::new(2)).unwrap();
        let token = login(&app, "alice@example.com").await;

        let (status, _, body) = send(&app.router, get("/users", Some(&token))).await;
        assert_eq!(status, StatusCode::OK);

        let users = body["users"].as_array().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["email"], "alice@example.com");
    }
}
